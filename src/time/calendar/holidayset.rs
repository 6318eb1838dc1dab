use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

/// Observed holidays of one year, ascending and free of duplicates.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct HolidaySet {
    year: i32,
    dates: Vec<NaiveDate>
}

impl HolidaySet {
    pub fn new(year: i32, dates: BTreeSet<NaiveDate>) -> HolidaySet {
        HolidaySet {
            year,
            dates: dates.into_iter().collect()
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[inline]
    pub fn contains(&self, d: &NaiveDate) -> bool {
        self.dates.binary_search(d).is_ok()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }

    pub fn into_vec(self) -> Vec<NaiveDate> {
        self.dates
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

/// A holiday date together with the name of the rule that produced it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct NamedHoliday {
    pub date: NaiveDate,
    pub name: String
}
