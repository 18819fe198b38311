//! Wall clock formatting for the status bar and lock screen

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Compact 12-hour time, e.g. `9:05AM`
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%-I:%M%p").to_string()
}

/// Long date, e.g. `Monday, January 5`
pub fn format_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%A, %B %-d").to_string()
}
