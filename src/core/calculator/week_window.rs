use crate::utils::date::{date_key, weekday_label};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// One calendar day of the week window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// `dd-mm-yyyy`, the key used by the badge data.
    pub key: String,
    pub label: &'static str,
    pub is_today: bool,
}

pub fn monday_of(d: NaiveDate) -> NaiveDate {
    d - Days::new(d.weekday().num_days_from_monday() as u64)
}

/// The seven days, Monday through Sunday, of the week containing `now`.
pub fn current_week(now: NaiveDateTime) -> Vec<WeekDay> {
    let today = now.date();
    let monday = monday_of(today);

    monday
        .iter_days()
        .take(7)
        .map(|date| WeekDay {
            date,
            key: date_key(date),
            label: weekday_label(date.weekday()),
            is_today: date == today,
        })
        .collect()
}
