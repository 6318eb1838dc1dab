//! Request window behaviour around weeks, holidays and year ends.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use permitcal::configuration::Configuration;
use permitcal::manager::manager::IManager;
use permitcal::time::calendar::colombia::Colombia;
use permitcal::time::calendar::holidaycalendar::HolidayCalendar;
use permitcal::time::calendar::simplecalendar::SimpleCalendar;
use permitcal::{eligible_dates_for_current_window, EligibleDateWindow};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_year_monday_extends_window() {
    // 2023-12-31 is a Sunday and 2024-01-01 a Monday
    let window = eligible_dates_for_current_window(ymd(2023, 12, 28));
    assert_eq!(window.start(), ymd(2023, 12, 25));
    assert_eq!(window.end(), ymd(2024, 1, 1));
    assert!(window.is_eligible(ymd(2024, 1, 1)));
}

#[test]
fn window_starting_in_previous_year() {
    // 2025-12-29 is a Monday; 2026-01-05 is not a holiday, Reyes is 2026-01-12
    let window = eligible_dates_for_current_window(ymd(2026, 1, 2));
    assert_eq!(window.start(), ymd(2025, 12, 29));
    assert_eq!(window.end(), ymd(2026, 1, 4));
    assert!(!window.is_extended());
    assert!(window.is_eligible(ymd(2026, 1, 1)));
}

#[test]
fn week_before_moved_holiday() {
    // Sagrado Corazón 2024 is Monday June 10
    let window = eligible_dates_for_current_window(ymd(2024, 6, 5));
    assert_eq!(window.end(), ymd(2024, 6, 10));
    // The holiday Monday that starts the week does not extend anything
    let window = eligible_dates_for_current_window(ymd(2024, 6, 10));
    assert_eq!(window.start(), ymd(2024, 6, 10));
    assert_eq!(window.len(), 7);
}

#[test]
fn calendar_without_holidays_never_extends() {
    let calendar = SimpleCalendar::new(Vec::new(), Vec::new());
    let window = EligibleDateWindow::new(ymd(2024, 1, 3), &calendar);
    assert_eq!(window.len(), 7);
    assert!(!window.is_extended());
}

#[test]
fn window_from_configured_calendar() {
    let config = Configuration::new();
    config.from_reader(concat!(env!("CARGO_MANIFEST_DIR"), "/config/calendars.json")).unwrap();
    let calendar: Arc<dyn HolidayCalendar> = config.holiday_calendar_manager().get("ColombiaWithAscension").unwrap();
    // Ascension 2024 is observed on Monday May 13
    let window = EligibleDateWindow::new(ymd(2024, 5, 8), calendar.as_ref());
    assert_eq!(window.end(), ymd(2024, 5, 13));
    let builtin = eligible_dates_for_current_window(ymd(2024, 5, 8));
    assert_eq!(builtin.end(), ymd(2024, 5, 12));

    let configured_colombia = config.holiday_calendar_manager().get("Colombia").unwrap();
    for year in 2020..=2045 {
        assert_eq!(configured_colombia.holiday_set(year), Colombia::new().holiday_set(year));
    }
}

proptest! {
    #[test]
    fn window_shape(days in 0i64..73000) {
        let today = ymd(1900, 1, 1) + chrono::TimeDelta::days(days);
        let window = eligible_dates_for_current_window(today);
        prop_assert_eq!(window.start().weekday(), Weekday::Mon);
        prop_assert!(window.len() == 7 || window.len() == 8);
        prop_assert!(window.is_eligible(today));
        prop_assert_eq!(window.dates().first(), Some(&window.start()));
        prop_assert_eq!(window.dates().last(), Some(&window.end()));
        for pair in window.dates().windows(2) {
            prop_assert_eq!(pair[0] + Days::new(1), pair[1]);
        }
    }

    #[test]
    fn extension_only_for_holiday_monday(days in 0i64..73000) {
        let today = ymd(1900, 1, 1) + chrono::TimeDelta::days(days);
        let window = eligible_dates_for_current_window(today);
        let next_monday = window.start() + Days::new(7);
        let holiday = Colombia::new().holiday_set(next_monday.year()).contains(&next_monday);
        prop_assert_eq!(window.is_extended(), holiday);
        prop_assert_eq!(window.len(), if holiday { 8 } else { 7 });
        prop_assert!(!window.is_eligible(window.start() - Days::new(1)));
        prop_assert!(!window.is_eligible(window.end() + Days::new(1)));
    }
}
