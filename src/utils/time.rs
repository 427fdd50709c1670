//! Time utilities: parsing HH:MM, formatting minutes, minute-of-day helpers.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Parse a `HH:MM` duration into signed minutes.
///
/// Exactly two digit-only fields separated by `:` are accepted, optionally
/// preceded by `-`. Fields are not range-checked, so `"100:75"` is `6075`.
pub fn parse_hhmm(text: &str) -> AppResult<i64> {
    let malformed = || AppError::MalformedDuration(text.to_string());

    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (h, m) = body.split_once(':').ok_or_else(malformed)?;
    let hours = parse_field(h).ok_or_else(malformed)?;
    let minutes = parse_field(m).ok_or_else(malformed)?;

    let total = hours * 60 + minutes;
    let signed = if negative { -total } else { total };
    i64::try_from(signed).map_err(|_| malformed())
}

fn parse_field(field: &str) -> Option<i128> {
    if field.is_empty() || field.len() > 20 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Render minutes as `HH:MM`, with a leading `-` for negative values.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.unsigned_abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Strict wall-clock parse (00:00..23:59), used to validate configured times.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minute_of_day(now: NaiveDateTime) -> i64 {
    minute_of_day_of(now.time())
}

pub fn minute_of_day_of(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Current local minute of day.
pub fn now_minutes() -> i64 {
    minute_of_day(chrono::Local::now().naive_local())
}
