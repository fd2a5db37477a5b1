use crate::parse::types::CalendarFields;
use chrono::{Datelike, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Monday first, matching `Weekday::num_days_from_monday`.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

static HOUR_BUCKETS: Lazy<[String; 24]> =
    Lazy::new(|| std::array::from_fn(|h| hour_bucket_label(h as u32)));

/// Label of the one-hour heatmap column starting at `hour` (0-23),
/// e.g. `"11 PM - 12 AM"` for 23.
pub fn hour_bucket_label(hour: u32) -> String {
    let end = (hour + 1) % 24;
    format!("{} - {}", clock_label(hour), clock_label(end))
}

/// Interned label for `hour`; hours past 23 wrap.
pub fn hour_bucket(hour: u32) -> &'static str {
    HOUR_BUCKETS[(hour % 24) as usize].as_str()
}

fn clock_label(hour: u32) -> String {
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{twelve} {meridiem}")
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize).saturating_sub(1) % 12]
}

pub fn calendar_fields(ts: &NaiveDateTime) -> CalendarFields {
    let hour = ts.hour();
    CalendarFields {
        date: ts.date(),
        year: ts.year(),
        month: ts.month(),
        month_name: month_name(ts.month()),
        day: ts.day(),
        day_name: DAY_NAMES[ts.weekday().num_days_from_monday() as usize],
        hour,
        minute: ts.minute(),
        hour_bucket: hour_bucket(hour),
    }
}
