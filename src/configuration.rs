use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_calendar: Vec<serde_json::Value>
}

pub struct Configuration {
    holiday_calendar_manager_cell: RefCell<Manager<Arc<dyn HolidayCalendar>>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager_cell: RefCell::new(HolidayCalendarManager::new())
        }
    }

    pub fn holiday_calendar_manager(&self) -> RefMut<'_, Manager<Arc<dyn HolidayCalendar>>> {
        self.holiday_calendar_manager_cell.borrow_mut()
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.from_json_prop(json_prop)?;
        info!(path = %file_path.as_ref().display(), "loaded configuration");
        Ok(())
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        self.from_json_prop(json_prop)
    }

    fn from_json_prop(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let holiday_calendar_manager = self.holiday_calendar_manager_cell.borrow_mut();
        holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar, &())?;
        info!(calendars = json_prop.holiday_calendar.len(), "registered holiday calendars");
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
