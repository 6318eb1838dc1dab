use std::collections::BTreeSet;

use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta
};
use serde::{Deserialize, Serialize};

use super::observance::Observance;
use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// Easter Sunday of `year` as a Gregorian date.
///
/// `Western` uses the Meeus/Jones/Butcher computus, `Orthodox` the Meeus
/// Julian computus shifted onto the Gregorian calendar. Both are integer-only
/// and meaningful for Gregorian years (1583 onwards). Returns `None` only when
/// chrono cannot represent the resulting date.
pub fn easter_sunday(year: i32, easter_type: EasterType) -> Option<NaiveDate> {
    match easter_type {
        EasterType::Western => {
            let a = year.rem_euclid(19);
            let b = year.div_euclid(100);
            let c = year.rem_euclid(100);
            let d = b.div_euclid(4);
            let e = b.rem_euclid(4);
            let f = (b + 8).div_euclid(25);
            let g = (b - f + 1).div_euclid(3);
            let h = (19 * a + b - d - g + 15).rem_euclid(30);
            let i = c.div_euclid(4);
            let k = c.rem_euclid(4);
            let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
            let m = (a + 11 * h + 22 * l).div_euclid(451);
            let n = h + l - 7 * m + 114;
            // month is 1-based here: 3 = March, 4 = April
            let month = n.div_euclid(31) as u32;
            let day = (n.rem_euclid(31) + 1) as u32;
            NaiveDate::from_ymd_opt(year, month, day)
        },
        EasterType::Orthodox => {
            let a = year.rem_euclid(4);
            let b = year.rem_euclid(7);
            let c = year.rem_euclid(19);
            let d = (19 * c + 15).rem_euclid(30);
            let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
            let n = d + e + 114;
            let month = n.div_euclid(31) as u32;
            let day = (n.rem_euclid(31) + 1) as u32;
            // Julian to Gregorian offset, valid from March onwards
            let julian_offset = year.div_euclid(100) - year.div_euclid(400) - 2;
            NaiveDate::from_ymd_opt(year, month, day)?
                .checked_add_signed(TimeDelta::days(julian_offset as i64))
        }
    }
}

/// Holiday at a fixed number of days from Easter Sunday.
#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    name: String,
    easter_type: EasterType,
    shift_days: i32,
    observance: Observance
}

impl EasterRelatedHoliday {
    pub fn new(name: &str, easter_type: EasterType, shift_days: i32, observance: Observance) -> Option<EasterRelatedHoliday> {
        // Keeps the observed date within a year of Easter.
        if shift_days.unsigned_abs() > 300 {
            return None;
        }
        Some(EasterRelatedHoliday {
            name: name.to_owned(),
            easter_type,
            shift_days,
            observance
        })
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    pub fn observance(&self) -> Observance {
        self.observance
    }

    fn get_holiday_impl(&self, easter_year: i32) -> Option<NaiveDate> {
        let easter_day = easter_sunday(easter_year, self.easter_type)?;
        easter_day
            .checked_add_signed(TimeDelta::days(self.shift_days as i64))
            .and_then(|d| self.observance.adjust(d))
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        // Large shifts can carry a neighbouring year's date into this one.
        [year.checked_sub(1), Some(year), year.checked_add(1)]
            .into_iter()
            .flatten()
            .filter_map(|easter_year| self.get_holiday_impl(easter_year))
            .filter(|d| d.year() == year)
            .collect()
    }
}
