use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

#[inline]
pub const fn days_of_year (year: i32) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}

/// Smallest date on or after `d` falling on `weekday`, if chrono can represent it.
pub fn next_weekday_on_or_after (d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let from = d.weekday().num_days_from_monday();
    let to = weekday.num_days_from_monday();
    let shift = (to + 7 - from) % 7;
    d.checked_add_days(Days::new(shift as u64))
}

/// `d` itself when it is a Monday, otherwise the Monday after it.
#[inline]
pub fn next_monday (d: NaiveDate) -> Option<NaiveDate> {
    next_weekday_on_or_after(d, Weekday::Mon)
}

/// Monday of the Monday-to-Sunday week containing `d`.
///
/// Clamped to `NaiveDate::MIN` when that Monday precedes chrono's range.
#[inline]
pub fn start_of_week (d: NaiveDate) -> NaiveDate {
    d.checked_sub_days(Days::new(d.weekday().num_days_from_monday() as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Sunday of the Monday-to-Sunday week containing `d`.
///
/// Clamped to `NaiveDate::MAX` when that Sunday is past chrono's range.
#[inline]
pub fn end_of_week (d: NaiveDate) -> NaiveDate {
    d.checked_add_days(Days::new(6 - d.weekday().num_days_from_monday() as u64))
        .unwrap_or(NaiveDate::MAX)
}

#[inline]
pub fn is_weekend (d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_year(2024), 366);
    }

    #[test]
    fn next_monday_keeps_mondays() {
        // 2024-01-08 is a Monday
        assert_eq!(next_monday(ymd(2024, 1, 8)), Some(ymd(2024, 1, 8)));
    }

    #[test]
    fn next_monday_moves_forward() {
        // Saturday and Sunday both go to the following Monday
        assert_eq!(next_monday(ymd(2024, 1, 6)), Some(ymd(2024, 1, 8)));
        assert_eq!(next_monday(ymd(2024, 1, 7)), Some(ymd(2024, 1, 8)));
        // Tuesday goes almost a full week ahead
        assert_eq!(next_monday(ymd(2024, 1, 9)), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn next_monday_crosses_year_end() {
        // 2025-12-31 is a Wednesday
        assert_eq!(next_monday(ymd(2025, 12, 31)), Some(ymd(2026, 1, 5)));
    }

    #[test]
    fn next_monday_past_last_representable_date() {
        let last_monday = start_of_week(NaiveDate::MAX);
        assert_eq!(next_monday(last_monday), Some(last_monday));
        if NaiveDate::MAX.weekday() != Weekday::Mon {
            assert_eq!(next_monday(NaiveDate::MAX), None);
        }
    }

    #[test]
    fn week_bounds_clamp_at_range_ends() {
        assert!(end_of_week(NaiveDate::MAX) <= NaiveDate::MAX);
        assert_eq!(start_of_week(NaiveDate::MAX).weekday(), Weekday::Mon);
        assert!(start_of_week(NaiveDate::MIN) >= NaiveDate::MIN);
        assert_eq!(end_of_week(NaiveDate::MIN).weekday(), Weekday::Sun);
        if NaiveDate::MAX.weekday() != Weekday::Sun {
            assert_eq!(end_of_week(NaiveDate::MAX), NaiveDate::MAX);
        }
        if NaiveDate::MIN.weekday() != Weekday::Mon {
            assert_eq!(start_of_week(NaiveDate::MIN), NaiveDate::MIN);
        }
    }

    #[test]
    fn week_bounds() {
        // 2024-05-15 is a Wednesday
        assert_eq!(start_of_week(ymd(2024, 5, 15)), ymd(2024, 5, 13));
        assert_eq!(end_of_week(ymd(2024, 5, 15)), ymd(2024, 5, 19));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(start_of_week(ymd(2024, 5, 19)), ymd(2024, 5, 13));
        assert_eq!(start_of_week(ymd(2024, 5, 13)), ymd(2024, 5, 13));
    }

    #[test]
    fn weekends() {
        assert!(is_weekend(ymd(2024, 5, 18)));
        assert!(is_weekend(ymd(2024, 5, 19)));
        assert!(!is_weekend(ymd(2024, 5, 20)));
    }
}
