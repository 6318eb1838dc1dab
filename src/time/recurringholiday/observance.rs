use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use crate::time::utility::next_monday;

/// How the legal date of a holiday relates to its traditional date.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum Observance {
    /// Observed on the traditional date whatever the weekday.
    #[default]
    Unadjusted,
    /// Observed on the traditional date when it is a Monday, otherwise on the
    /// Monday after it.
    NextMonday
}

impl Observance {
    /// Observed date for traditional date `d`; `None` past the end of chrono's range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self {
            Observance::Unadjusted => Some(d),
            Observance::NextMonday => next_monday(d)
        }
    }

    /// Largest number of days `adjust` can move a date forward.
    pub const fn max_shift_days(&self) -> u32 {
        match self {
            Observance::Unadjusted => 0,
            Observance::NextMonday => 6
        }
    }
}


#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    #[test]
    fn unadjusted_keeps_date() {
        let d = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        assert_eq!(Observance::Unadjusted.adjust(d), Some(d));
    }

    #[test]
    fn next_monday_always_lands_on_monday() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for d in start.iter_days().take(14) {
            let adjusted = Observance::NextMonday.adjust(d).unwrap();
            assert_eq!(adjusted.weekday(), Weekday::Mon);
            assert!(adjusted >= d);
            assert!((adjusted - d).num_days() <= Observance::NextMonday.max_shift_days() as i64);
        }
    }

    #[test]
    fn next_monday_unrepresentable_at_range_end() {
        // The last representable Monday still adjusts to itself
        let last_monday = NaiveDate::MAX - chrono::Days::new(NaiveDate::MAX.weekday().num_days_from_monday() as u64);
        assert_eq!(Observance::NextMonday.adjust(last_monday), Some(last_monday));
        if NaiveDate::MAX.weekday() != Weekday::Mon {
            assert_eq!(Observance::NextMonday.adjust(NaiveDate::MAX), None);
        }
        assert_eq!(Observance::Unadjusted.adjust(NaiveDate::MAX), Some(NaiveDate::MAX));
    }

    #[test]
    fn deserializes_from_variant_name() {
        let observance: Observance = serde_json::from_str("\"NextMonday\"").unwrap();
        assert_eq!(observance, Observance::NextMonday);
    }
}
