use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::NamedHoliday;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::utility::days_of_year;

/// Bitset cache over a [`SimpleCalendar`] for a fixed range of years.
///
/// Dates outside the range fall back to the raw calendar.
pub struct PrecomputedSimpleCalendar {
    raw_calendar: SimpleCalendar,
    start_year: i32,
    end_year: i32,
    precomputed_bits: Vec<YearBitset>,
}

/// Holidays of a single year, one bit per day of year (0 = Jan 1).
/// 3 × u128 covers the 366 days of a leap year.
#[derive(Clone)]
struct YearBitset {
    bits: [u128; 3],
}

impl YearBitset {
    fn new() -> Self {
        YearBitset { bits: [0; 3] }
    }

    #[inline]
    fn set(&mut self, day_of_year: u32) {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        if block < 3 {
            self.bits[block] |= 1u128 << bit;
        }
    }

    #[inline]
    fn is_set(&self, day_of_year: u32) -> bool {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        block < 3 && (self.bits[block] & (1u128 << bit)) != 0
    }

    fn from_calendar(calendar: &SimpleCalendar, year: i32) -> Self {
        let mut bitset = YearBitset::new();
        for date in calendar.get_holiday_dates(year) {
            bitset.set(date.ordinal0());
        }
        bitset
    }

    fn count_holidays(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}


impl PrecomputedSimpleCalendar {
    /// Precomputes the holidays of `[start_year, end_year]` inclusive.
    /// An inverted range precomputes nothing.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use permitcal::time::calendar::colombia::Colombia;
    /// use permitcal::time::calendar::holidaycalendar::HolidayCalendar;
    /// use permitcal::time::calendar::precomputedsimplecalendar::PrecomputedSimpleCalendar;
    ///
    /// let calendar = PrecomputedSimpleCalendar::new(Colombia::new().into_simple_calendar(), 2020, 2040);
    /// assert_eq!(calendar.len(), 21);
    /// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 7, 20).unwrap()));
    /// ```
    pub fn new(
        raw_calendar: SimpleCalendar,
        start_year: i32,
        end_year: i32,
    ) -> PrecomputedSimpleCalendar {
        let n_years = if end_year < start_year {
            0
        } else {
            end_year.abs_diff(start_year) as usize + 1
        };
        let mut precomputed_bits = Vec::with_capacity(n_years);

        for year in start_year..=end_year {
            precomputed_bits.push(YearBitset::from_calendar(&raw_calendar, year));
        }

        let calendar = PrecomputedSimpleCalendar {
            raw_calendar,
            start_year,
            end_year,
            precomputed_bits,
        };
        debug!(
            start_year,
            end_year,
            total_holidays = calendar.total_holidays(),
            "precomputed holiday calendar"
        );
        calendar
    }

    pub fn raw_calendar(&self) -> &SimpleCalendar {
        &self.raw_calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn len(&self) -> usize {
        self.precomputed_bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precomputed_bits.is_empty()
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    pub fn total_holidays(&self) -> u32 {
        self.precomputed_bits.iter()
            .map(|b| b.count_holidays())
            .sum()
    }

    fn year_bits(&self, year: i32) -> Option<&YearBitset> {
        if self.in_precomputation_range(year) {
            self.precomputed_bits.get(year.abs_diff(self.start_year) as usize)
        } else {
            None
        }
    }
}

impl HolidayCalendar for PrecomputedSimpleCalendar {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        match self.year_bits(d.year()) {
            Some(bits) => bits.is_set(d.ordinal0()),
            None => self.raw_calendar.is_holiday(d)
        }
    }

    fn get_holiday_dates(&self, year: i32) -> BTreeSet<NaiveDate> {
        match self.year_bits(year) {
            Some(bits) => (1..=days_of_year(year))
                .filter_map(|ordinal| NaiveDate::from_yo_opt(year, ordinal))
                .filter(|date| bits.is_set(date.ordinal0()))
                .collect(),
            None => self.raw_calendar.get_holiday_dates(year)
        }
    }

    fn named_holidays(&self, year: i32) -> Vec<NamedHoliday> {
        self.raw_calendar.named_holidays(year)
    }
}
