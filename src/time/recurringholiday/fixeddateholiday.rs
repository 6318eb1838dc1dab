use std::collections::BTreeSet;

use chrono::{
    Datelike,
    NaiveDate
};

use super::observance::Observance;
use super::recurringholiday::RecurringHoliday;
use crate::time::utility::days_of_month;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum ObservanceShiftCheck {
    MayShiftFromPreviousYear = -1,
    None = 0
}

/// Holiday anchored on the same month and day every year.
#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    name: String,
    month: u32,
    day: u32,
    observance: Observance,
    shift_check: ObservanceShiftCheck
}

impl FixedDateHoliday {
    /// Returns `None` when `month`/`day` never names a real date.
    /// February 29 is accepted and only yields a holiday in leap years.
    pub fn new(name: &str, month: u32, day: u32, observance: Observance) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(2000, month) {
            return None;
        }

        let shift_check = if month == 12 && day > 31 - observance.max_shift_days() {
            ObservanceShiftCheck::MayShiftFromPreviousYear
        } else {
            ObservanceShiftCheck::None
        };

        Some(FixedDateHoliday {
            name: name.to_owned(),
            month,
            day,
            observance,
            shift_check
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn observance(&self) -> Observance {
        self.observance
    }

    fn get_holiday_impl(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .and_then(|d| self.observance.adjust(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut holiday_set = BTreeSet::new();

        if let Some(d1) = self.get_holiday_impl(year) {
            if d1.year() == year {
                holiday_set.insert(d1);
            }
        }

        // A late-December anchor of the previous year may be observed in January.
        if self.shift_check != ObservanceShiftCheck::None {
            let previous_year = year.checked_add(self.shift_check as i32);
            if let Some(d2) = previous_year.and_then(|y| self.get_holiday_impl(y)) {
                if d2.year() == year {
                    holiday_set.insert(d2);
                }
            }
        }

        holiday_set
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new("x", 0, 1, Observance::Unadjusted).is_none());
        assert!(FixedDateHoliday::new("x", 13, 1, Observance::Unadjusted).is_none());
        assert!(FixedDateHoliday::new("x", 4, 31, Observance::Unadjusted).is_none());
        assert!(FixedDateHoliday::new("x", 2, 30, Observance::Unadjusted).is_none());
        assert!(FixedDateHoliday::new("x", 2, 29, Observance::Unadjusted).is_some());
    }

    #[test]
    fn unadjusted_holiday_stays_on_weekend() {
        // 2022-05-01 is a Sunday
        let labour_day = FixedDateHoliday::new("Día del Trabajo", 5, 1, Observance::Unadjusted).unwrap();
        assert_eq!(labour_day.get_holiday(2022), BTreeSet::from([ymd(2022, 5, 1)]));
        assert!(labour_day.is_holiday(&ymd(2022, 5, 1)));
        assert!(!labour_day.is_holiday(&ymd(2022, 5, 2)));
    }

    #[test]
    fn monday_holiday_moves_forward() {
        let epiphany = FixedDateHoliday::new("Reyes Magos", 1, 6, Observance::NextMonday).unwrap();
        // 2024-01-06 is a Saturday
        assert_eq!(epiphany.get_holiday(2024), BTreeSet::from([ymd(2024, 1, 8)]));
        // 2020-01-06 is a Monday
        assert_eq!(epiphany.get_holiday(2020), BTreeSet::from([ymd(2020, 1, 6)]));
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let leap_day = FixedDateHoliday::new("Leap Day", 2, 29, Observance::Unadjusted).unwrap();
        assert_eq!(leap_day.get_holiday(2024).len(), 1);
        assert!(leap_day.get_holiday(2023).is_empty());
    }

    #[test]
    fn late_december_anchor_observed_next_year() {
        // 2025-12-30 is a Tuesday, observed on Monday 2026-01-05
        let holiday = FixedDateHoliday::new("Year End", 12, 30, Observance::NextMonday).unwrap();
        assert!(holiday.get_holiday(2025).is_empty());
        let in_2026 = holiday.get_holiday(2026);
        assert!(in_2026.contains(&ymd(2026, 1, 5)));
    }

    #[test]
    fn extreme_years_yield_nothing() {
        let holiday = FixedDateHoliday::new("Year End", 12, 30, Observance::NextMonday).unwrap();
        assert!(holiday.get_holiday(i32::MIN).is_empty());
        assert!(holiday.get_holiday(i32::MAX).is_empty());
    }

    #[test]
    fn late_december_anchor_at_last_representable_year() {
        // Dec 31 of chrono's last year may have no Monday after it
        let holiday = FixedDateHoliday::new("Year End", 12, 31, Observance::NextMonday).unwrap();
        let last_year = NaiveDate::MAX.year();
        for d in holiday.get_holiday(last_year) {
            assert_eq!(d.year(), last_year);
        }
    }
}
