use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// Canonical textual form of a date key.
pub const DATE_KEY_FORMAT: &str = "%d-%m-%Y";

const WEEKDAY_FR: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse the `--now` override ("YYYY-MM-DD HH:MM").
pub fn parse_now(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidNow(s.to_string()))
}

pub fn date_key(d: NaiveDate) -> String {
    d.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a date key: `dd-mm-yyyy`, or the two-digit-year variant `dd-mm-yy`.
pub fn parse_date_key(key: &str) -> AppResult<NaiveDate> {
    let malformed = || AppError::MalformedDateKey(key.to_string());

    let trimmed = key.trim();
    let year_part = trimmed.rsplit('-').next().ok_or_else(malformed)?;
    let fmt = match year_part.len() {
        4 => DATE_KEY_FORMAT,
        2 => "%d-%m-%y",
        _ => return Err(malformed()),
    };

    NaiveDate::parse_from_str(trimmed, fmt).map_err(|_| malformed())
}

/// French weekday label, lower case ("lundi" .. "dimanche").
pub fn weekday_label(wd: Weekday) -> &'static str {
    WEEKDAY_FR[wd.num_days_from_monday() as usize]
}

/// Display form used by the dashboard cards.
pub fn display_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
