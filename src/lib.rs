pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod requestwindow;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod observance;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidayset;
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod precomputedsimplecalendar;
        pub mod colombia;
        pub mod holidaycalendarmanager;
    }
}

pub use time::calendar::colombia::compute_holidays;
pub use time::calendar::holidayset::HolidaySet;
pub use time::requestwindow::{
    eligible_dates_for_current_window,
    EligibleDateWindow
};
