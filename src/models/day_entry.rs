use chrono::NaiveDate;
use serde::Serialize;

/// One day of the week view, recomputed on every refresh.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub date_key: String,
    pub date: NaiveDate,
    pub label: &'static str,
    pub punches: Vec<String>,
    pub is_today: bool,
    /// None when the punch list could not be parsed.
    pub effective: Option<i64>,
    pub paid: Option<i64>,
    /// Today with an open interval: figures move with the clock.
    pub live: bool,
}

impl DayEntry {
    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }
}
