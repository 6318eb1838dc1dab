use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};


pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    /// Observed dates the rule produces inside `year`.
    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        let holiday_set = self.get_holiday(d.year());
        holiday_set.contains(d)
    }
}
