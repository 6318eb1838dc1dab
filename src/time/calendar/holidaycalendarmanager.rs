use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json;
use tracing::debug;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::time::calendar::colombia::Colombia;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::precomputedsimplecalendar::PrecomputedSimpleCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterRelatedHoliday,
    EasterType
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::observance::Observance;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;


#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    name: String,
    easter_type: EasterType,
    shift_days: i32,
    #[serde(default)]
    observance: Observance
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = ManagerError::from_json_or_json_parse_error(json)?;
    let holiday = EasterRelatedHoliday::new(&json_prop.name, json_prop.easter_type, json_prop.shift_days, json_prop.observance)
        .ok_or_else(|| ManagerError::InvalidHolidayError(
            format!("'{}': shift of {} days from Easter", json_prop.name, json_prop.shift_days)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    name: String,
    month: u32,
    day: u32,
    #[serde(default)]
    observance: Observance
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = ManagerError::from_json_or_json_parse_error(json)?;
    let holiday = FixedDateHoliday::new(&json_prop.name, json_prop.month, json_prop.day, json_prop.observance)
        .ok_or_else(|| ManagerError::InvalidHolidayError(
            format!("'{}': month {} day {}", json_prop.name, json_prop.month, json_prop.day)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = ManagerError::from_json_or_json_parse_error(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json)
    }
}

#[derive(Deserialize)]
enum CalendarType {
    SimpleCalendar,
    Colombia
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType
}

/// Widest year range a calendar file may ask to precompute.
pub const MAX_PRECOMPUTED_YEARS: u32 = 1000;

#[derive(Deserialize)]
struct SimpleCalendarPrecomputationJsonProp {
    apply: bool,
    start_year: i32,
    end_year: i32
}

impl SimpleCalendarPrecomputationJsonProp {
    fn validate(&self) -> Result<(), ManagerError> {
        if self.end_year < self.start_year {
            return Err(ManagerError::InvalidHolidayError(
                format!("precomputation ends in {} before it starts in {}", self.end_year, self.start_year)
            ));
        }
        if self.end_year.abs_diff(self.start_year) >= MAX_PRECOMPUTED_YEARS {
            return Err(ManagerError::InvalidHolidayError(
                format!("precomputation {}..={} spans more than {} years", self.start_year, self.end_year, MAX_PRECOMPUTED_YEARS)
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    precomputation: Option<SimpleCalendarPrecomputationJsonProp>
}

fn precompute_if_requested(
    simple_calendar: SimpleCalendar,
    precomputation: Option<SimpleCalendarPrecomputationJsonProp>
) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    match precomputation {
        Some(prop) if prop.apply => {
            prop.validate()?;
            Ok(Arc::new(PrecomputedSimpleCalendar::new(
                simple_calendar,
                prop.start_year,
                prop.end_year
            )))
        },
        _ => Ok(Arc::new(simple_calendar))
    }
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let holiday_calendar_json: SimpleCalendarJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let recurring_holidays = holiday_calendar_json.recurring_holidays
        .into_iter()
        .map(get_recurring_holiday_from_json)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        recurring = recurring_holidays.len(),
        additional = holiday_calendar_json.additional_holidays.len(),
        "built simple calendar"
    );
    let simple_calendar = SimpleCalendar::new(
        recurring_holidays,
        holiday_calendar_json.additional_holidays
    );
    precompute_if_requested(simple_calendar, holiday_calendar_json.precomputation)
}

#[derive(Deserialize)]
struct ColombiaCalendarJsonProp {
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    precomputation: Option<SimpleCalendarPrecomputationJsonProp>
}

fn get_colombia_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let json_prop: ColombiaCalendarJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    if json_prop.additional_holidays.is_empty() && json_prop.precomputation.is_none() {
        return Ok(Arc::new(Colombia::new()));
    }
    let simple_calendar = SimpleCalendar::new(Colombia::recurring_holidays(), json_prop.additional_holidays);
    precompute_if_requested(simple_calendar, json_prop.precomputation)
}

fn get_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let calendar_typed_object: CalendarTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
    match calendar_typed_object.calendar_type {
        CalendarType::SimpleCalendar => get_simple_calendar_from_json(json_value),
        CalendarType::Colombia       => get_colombia_calendar_from_json(json_value)
    }
}


pub struct HolidayCalendarManager;


impl HolidayCalendarManager {
    pub fn new() -> Manager<Arc<dyn HolidayCalendar>> {
        Manager::new(get_calendar_from_json)
    }
}
