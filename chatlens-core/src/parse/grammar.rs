use crate::parse::calendar::calendar_fields;
use crate::parse::types::{GROUP_NOTIFICATION, Message};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `[DD/MM/YY, H:MM:SS AM] Sender: body` with the sender part optional.
///
/// Not anchored: exports from some clients prefix lines with a direction
/// mark. `.` stops at the line break, so bodies never span lines.
static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\[(\d{2})/(\d{2})/(\d{2}), (\d{1,2}):(\d{2}):(\d{2})\s([AP]M)\] (?:(.*?): )?(.*)",
    )
    .expect("header pattern is valid")
});

/// Parses a single physical line. `None` means the line does not follow the
/// export grammar or names an impossible date or time.
pub fn parse_line(line: &str) -> Option<Message> {
    let caps = HEADER.captures(line)?;
    let timestamp = timestamp(&caps)?;

    let sender = caps
        .get(8)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| GROUP_NOTIFICATION.to_string());
    let body = caps.get(9).map_or("", |m| m.as_str()).to_string();

    Some(Message {
        calendar: calendar_fields(&timestamp),
        timestamp,
        sender,
        body,
    })
}

fn timestamp(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let field = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

    let day = field(1)?;
    let month = field(2)?;
    let year = expand_two_digit_year(field(3)?);

    let hour = to_24_hour(field(4)?, caps.get(7)?.as_str() == "PM")?;
    let minute = field(5)?;
    let second = field(6)?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

/// POSIX `%y` pivot: 69-99 are the 1900s, 00-68 the 2000s.
fn expand_two_digit_year(yy: u32) -> i32 {
    let yy = yy as i32;
    if yy >= 69 { 1900 + yy } else { 2000 + yy }
}

fn to_24_hour(hour: u32, pm: bool) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(hour % 12 + if pm { 12 } else { 0 })
}
