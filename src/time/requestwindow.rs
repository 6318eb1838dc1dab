use chrono::{
    Datelike,
    Days,
    Local,
    NaiveDate,
    Weekday
};
use serde::Serialize;
use tracing::debug;

use crate::time::calendar::colombia::Colombia;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{
    end_of_week,
    start_of_week
};

const ONE_DAY: Days = Days::new(1);

/// Dates a new permission request may be filed against.
///
/// The window runs from the Monday on or before `today` to the Sunday on or
/// after it, and takes in the following Monday as well when that Monday is a
/// holiday (looked up in the holidays of the Monday's own year).
///
/// At the ends of chrono's date range the week is truncated to the
/// representable days, and a Monday past `NaiveDate::MAX` never extends it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EligibleDateWindow {
    start: NaiveDate,
    end: NaiveDate,
    extended: bool,
    dates: Vec<NaiveDate>
}

impl EligibleDateWindow {
    pub fn new<C>(today: NaiveDate, calendar: &C) -> EligibleDateWindow
        where C: HolidayCalendar + ?Sized {
        let start = start_of_week(today);
        let sunday = end_of_week(today);
        let holiday_monday = sunday
            .checked_add_days(ONE_DAY)
            .filter(|d| d.weekday() == Weekday::Mon && calendar.is_holiday(*d));

        let extended = holiday_monday.is_some();
        let end = holiday_monday.unwrap_or(sunday);
        let dates = RangeOfDates::new(start, end).to_vec();

        debug!(%today, %start, %end, extended, "computed request window");
        EligibleDateWindow { start, end, extended, dates }
    }

    /// Window for today's local date.
    pub fn current<C>(calendar: &C) -> EligibleDateWindow
        where C: HolidayCalendar + ?Sized {
        EligibleDateWindow::new(Local::now().date_naive(), calendar)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the window runs into the holiday Monday after the week.
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// A request for `d` is accepted only if `d` is one of the window's days
    /// and lies within its bounds.
    pub fn is_eligible(&self, d: NaiveDate) -> bool {
        let is_past = d < self.start;
        let is_future = d > self.end;
        self.dates.binary_search(&d).is_ok() && !is_past && !is_future
    }
}

/// Eligible request dates for the week of `today` under the Colombian calendar.
pub fn eligible_dates_for_current_window(today: NaiveDate) -> EligibleDateWindow {
    EligibleDateWindow::new(today, &Colombia::new())
}
