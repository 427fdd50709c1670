use crate::core::calculator::day_total::is_open;
use crate::core::calculator::week_totals::{WeekTotals, day_figures};
use crate::core::calculator::week_window::current_week;
use crate::core::policy::WorkPolicy;
use crate::core::summary::{SummaryReport, format_summary};
use crate::models::day_entry::DayEntry;
use crate::models::hours::Hours;
use chrono::NaiveDateTime;

/// Everything a host needs to paint the current week.
#[derive(Debug, Default)]
pub struct WeekView {
    pub days: Vec<DayEntry>,
    pub totals: WeekTotals,
}

impl WeekView {
    /// True when some figure depends on the clock and must be refreshed.
    pub fn has_live_day(&self) -> bool {
        self.days.iter().any(|d| d.live)
    }

    pub fn today(&self) -> Option<&DayEntry> {
        self.days.iter().find(|d| d.is_today)
    }
}

pub struct Core;

impl Core {
    pub fn build_week(hours: &Hours, now: NaiveDateTime, policy: &WorkPolicy) -> WeekView {
        let mut days = Vec::with_capacity(7);
        let mut totals = WeekTotals::default();

        for day in current_week(now) {
            let punches: Vec<String> = hours
                .get(&day.key)
                .map(|p| p.iter().map(|s| s.trim().to_string()).collect())
                .unwrap_or_default();

            let figures = day_figures(&day, &punches, now, policy);
            let (effective, paid) = totals.add_day(&day.key, figures).unzip();

            days.push(DayEntry {
                live: day.is_today && is_open(&punches),
                date_key: day.key,
                date: day.date,
                label: day.label,
                punches,
                is_today: day.is_today,
                effective,
                paid,
            });
        }

        totals.close(policy);
        WeekView { days, totals }
    }

    pub fn build_summary(hours: &Hours) -> SummaryReport {
        format_summary(hours)
    }
}
