use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub date_key: String,
    pub date: NaiveDate,
    pub label: &'static str,
    pub minutes: i64,
}
