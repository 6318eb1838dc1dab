use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::NamedHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

const ADDITIONAL_HOLIDAY_NAME: &str = "Additional holiday";

/// Calendar made of recurring holiday rules plus one-off holidays.
pub struct SimpleCalendar {
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: BTreeSet<NaiveDate>
}

impl SimpleCalendar {
    /// Creates a new SimpleCalendar.
    ///
    /// # Arguments
    /// * `recurring_holidays` - Rules evaluated for every year
    /// * `additional_holidays` - One-time holidays (takes ownership)
    pub fn new(
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<NaiveDate>
    ) -> SimpleCalendar {
        SimpleCalendar {
            recurring_holidays,
            additional_holidays: additional_holidays.into_iter().collect()
        }
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    pub fn additional_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.additional_holidays
    }

    pub fn is_recurring_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(&d))
    }

    #[inline]
    pub fn is_additional_holiday(&self, d: NaiveDate) -> bool {
        self.additional_holidays.contains(&d)
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.is_additional_holiday(d) || self.is_recurring_holiday(d)
    }

    fn get_holiday_dates(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut holiday_set = BTreeSet::new();

        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.get_holiday(year));
        }

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied()
        );

        holiday_set
    }

    /// Sorted by date; a date produced by several rules is listed once per rule.
    fn named_holidays(&self, year: i32) -> Vec<NamedHoliday> {
        let mut named: Vec<NamedHoliday> = self.recurring_holidays
            .iter()
            .flat_map(|r| {
                r.get_holiday(year)
                    .into_iter()
                    .map(move |date| NamedHoliday { date, name: r.name().to_owned() })
            })
            .chain(
                self.additional_holidays
                    .iter()
                    .filter(|d| d.year() == year)
                    .map(|&date| NamedHoliday { date, name: ADDITIONAL_HOLIDAY_NAME.to_owned() })
            )
            .collect();
        named.sort_by_key(|h| h.date);
        named
    }
}
