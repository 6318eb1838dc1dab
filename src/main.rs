use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Datelike, Local};
use tracing::error;
use tracing_subscriber::EnvFilter;

use permitcal::configuration::Configuration;
use permitcal::manager::manager::IManager;
use permitcal::manager::managererror::ManagerError;
use permitcal::time::calendar::colombia::Colombia;
use permitcal::time::calendar::holidaycalendar::HolidayCalendar;
use permitcal::time::requestwindow::EligibleDateWindow;

const USAGE: &str = "usage: permitcal [YEAR] [--config FILE --calendar NAME]";

struct Args {
    year: Option<i32>,
    config: Option<String>,
    calendar: Option<String>
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args { year: None, config: None, calendar: None };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(iter.next().ok_or("--config needs a file")?),
            "--calendar" => args.calendar = Some(iter.next().ok_or("--calendar needs a name")?),
            "-h" | "--help" => return Err(USAGE.to_owned()),
            year => {
                let year = year.parse::<i32>().map_err(|_| format!("invalid year '{year}'\n{USAGE}"))?;
                args.year = Some(year);
            }
        }
    }
    Ok(args)
}

fn load_calendar(args: &Args) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    match &args.config {
        Some(path) => {
            let config = Configuration::new();
            config.from_reader(path)?;
            let name = args.calendar.as_deref().unwrap_or("Colombia");
            let calendar = config.holiday_calendar_manager().get(name)?;
            Ok(calendar)
        },
        None => Ok(Arc::new(Colombia::new()))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let calendar = match load_calendar(&args) {
        Ok(calendar) => calendar,
        Err(err) => {
            error!(%err, "cannot load holiday calendar");
            return ExitCode::FAILURE;
        }
    };

    let today = Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());

    println!("Holidays {year}:");
    for holiday in calendar.named_holidays(year) {
        println!("  {} {} {}", holiday.date, holiday.date.weekday(), holiday.name);
    }

    let window = EligibleDateWindow::new(today, calendar.as_ref());
    println!("Request window for {today}: {} .. {}", window.start(), window.end());
    for d in window.dates() {
        println!("  {d} {}", d.weekday());
    }
    ExitCode::SUCCESS
}
