use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::{
    HolidaySet,
    NamedHoliday
};
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterRelatedHoliday,
    EasterType
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::observance::Observance;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// (name, month, day) observed on the date itself.
const FIXED_HOLIDAYS: [(&str, u32, u32); 6] = [
    ("Año Nuevo", 1, 1),
    ("Día del Trabajo", 5, 1),
    ("Día de la Independencia", 7, 20),
    ("Batalla de Boyacá", 8, 7),
    ("Inmaculada Concepción", 12, 8),
    ("Navidad", 12, 25),
];

/// (name, month, day) observed on the next Monday.
const MONDAY_HOLIDAYS: [(&str, u32, u32); 7] = [
    ("Reyes Magos", 1, 6),
    ("San José", 3, 19),
    ("San Pedro y San Pablo", 6, 29),
    ("Asunción de la Virgen", 8, 15),
    ("Día de la Raza", 10, 12),
    ("Todos los Santos", 11, 1),
    ("Independencia de Cartagena", 11, 11),
];

/// (name, days from Easter Sunday, observance)
const EASTER_HOLIDAYS: [(&str, i32, Observance); 4] = [
    ("Jueves Santo", -3, Observance::Unadjusted),
    ("Viernes Santo", -2, Observance::Unadjusted),
    ("Corpus Christi", 60, Observance::NextMonday),
    ("Sagrado Corazón", 68, Observance::NextMonday),
];

/// Colombian public holidays (Ley Emiliani).
///
/// Six fixed holidays, seven holidays moved to the following Monday, Holy
/// Thursday and Good Friday, and Corpus Christi and Sacred Heart moved to the
/// Monday on or after Easter + 60 and Easter + 68 days.
pub struct Colombia {
    calendar: SimpleCalendar
}

impl Colombia {
    pub fn new() -> Colombia {
        Colombia {
            calendar: SimpleCalendar::new(Colombia::recurring_holidays(), Vec::new())
        }
    }

    pub fn recurring_holidays() -> Vec<Arc<dyn RecurringHoliday>> {
        let fixed = FIXED_HOLIDAYS.iter()
            .filter_map(|&(name, month, day)| FixedDateHoliday::new(name, month, day, Observance::Unadjusted))
            .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>);
        let monday = MONDAY_HOLIDAYS.iter()
            .filter_map(|&(name, month, day)| FixedDateHoliday::new(name, month, day, Observance::NextMonday))
            .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>);
        let easter = EASTER_HOLIDAYS.iter()
            .filter_map(|&(name, shift_days, observance)| {
                EasterRelatedHoliday::new(name, EasterType::Western, shift_days, observance)
            })
            .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>);
        fixed.chain(monday).chain(easter).collect()
    }

    pub fn into_simple_calendar(self) -> SimpleCalendar {
        self.calendar
    }
}

impl Default for Colombia {
    fn default() -> Self {
        Colombia::new()
    }
}

impl HolidayCalendar for Colombia {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.calendar.is_holiday(d)
    }

    fn get_holiday_dates(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.calendar.get_holiday_dates(year)
    }

    fn named_holidays(&self, year: i32) -> Vec<NamedHoliday> {
        self.calendar.named_holidays(year)
    }
}

/// Observed Colombian holidays of `year`, ascending and without duplicates.
pub fn compute_holidays(year: i32) -> HolidaySet {
    Colombia::new().holiday_set(year)
}
