//! Historical recap: one row per date key of the badge data, newest first.

use crate::core::calculator::day_total::static_total;
use crate::core::calculator::week_totals::DayFailure;
use crate::errors::AppResult;
use crate::models::hours::Hours;
use crate::models::summary_row::SummaryRow;
use crate::utils::date::{parse_date_key, weekday_label};
use chrono::Datelike;

#[derive(Debug, Default)]
pub struct SummaryReport {
    /// Sorted by date, most recent first.
    pub rows: Vec<SummaryRow>,
    pub failures: Vec<DayFailure>,
}

fn summary_row(key: &str, punches: &[String]) -> AppResult<SummaryRow> {
    let date = parse_date_key(key)?;
    Ok(SummaryRow {
        date_key: key.to_string(),
        date,
        label: weekday_label(date.weekday()),
        minutes: static_total(punches)?,
    })
}

pub fn format_summary(hours: &Hours) -> SummaryReport {
    let mut report = SummaryReport::default();

    for (key, punches) in hours {
        match summary_row(key, punches) {
            Ok(row) => report.rows.push(row),
            Err(error) => report.failures.push(DayFailure {
                date_key: key.clone(),
                error,
            }),
        }
    }

    report.rows.sort_by(|a, b| b.date.cmp(&a.date));
    report
}
