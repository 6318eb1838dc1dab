use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::time::calendar::holidayset::{
    HolidaySet,
    NamedHoliday
};
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::is_weekend;

/// Source of observed public holidays.
///
/// Implementations are pure: the holidays of a year depend on nothing but the
/// year, so calendars can be shared freely behind an `Arc`.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn get_holiday_dates(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn named_holidays(&self, year: i32) -> Vec<NamedHoliday>;

    fn holiday_set(&self, year: i32) -> HolidaySet {
        HolidaySet::new(year, self.get_holiday_dates(year))
    }

    /// Holidays inside `[d1, d2]`, consulting every year the range touches.
    fn holidays_between(&self, d1: NaiveDate, d2: NaiveDate) -> Vec<NaiveDate> {
        let range = RangeOfDates::new(d1, d2);
        range
            .years()
            .flat_map(|year| self.get_holiday_dates(year))
            .filter(|d| range.contain(*d))
            .collect()
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !is_weekend(d) && !self.is_holiday(d)
    }
}
