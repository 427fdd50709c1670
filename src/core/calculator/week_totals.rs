use crate::core::calculator::break_bonus::break_bonus;
use crate::core::calculator::day_total::{dynamic_total, static_total};
use crate::core::calculator::week_window::{WeekDay, current_week};
use crate::core::policy::WorkPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::hours::Hours;
use crate::utils::time::minute_of_day;
use chrono::NaiveDateTime;

/// A day (or summary row) whose figures could not be computed.
#[derive(Debug)]
pub struct DayFailure {
    pub date_key: String,
    pub error: AppError,
}

#[derive(Debug, Default)]
pub struct WeekTotals {
    pub effective: i64,
    pub paid: i64,
    pub remaining: i64,
    pub failures: Vec<DayFailure>,
}

/// Effective and paid minutes of one window day.
pub(crate) fn day_figures(
    day: &WeekDay,
    punches: &[String],
    now: NaiveDateTime,
    policy: &WorkPolicy,
) -> AppResult<(i64, i64)> {
    let effective = if day.is_today {
        dynamic_total(punches, Some(minute_of_day(now)))?
    } else {
        static_total(punches)?
    };
    let paid = effective
        .checked_add(break_bonus(punches, day.date, now, policy)?)
        .ok_or_else(|| AppError::DurationOverflow("paid total".into()))?;
    Ok((effective, paid))
}

impl WeekTotals {
    /// Fold one day in. A failed day, or one that would push the week sums
    /// out of range, is recorded and contributes nothing.
    pub(crate) fn add_day(&mut self, date_key: &str, figures: AppResult<(i64, i64)>) -> Option<(i64, i64)> {
        let folded = figures.and_then(|(effective, paid)| {
            match (self.effective.checked_add(effective), self.paid.checked_add(paid)) {
                (Some(e), Some(p)) => Ok((effective, paid, e, p)),
                _ => Err(AppError::DurationOverflow("week total".into())),
            }
        });

        match folded {
            Ok((effective, paid, week_effective, week_paid)) => {
                self.effective = week_effective;
                self.paid = week_paid;
                Some((effective, paid))
            }
            Err(error) => {
                tracing::warn!(date = %date_key, %error, "day left out of the week totals");
                self.failures.push(DayFailure {
                    date_key: date_key.to_string(),
                    error,
                });
                None
            }
        }
    }

    pub(crate) fn close(&mut self, policy: &WorkPolicy) {
        self.remaining = remaining_minutes(policy.weekly_target_minutes, self.paid);
    }
}

/// Week totals for the window containing `now`. Recompute on every tick while
/// a day is open: today's figure depends on the clock.
pub fn week_totals(hours: &Hours, now: NaiveDateTime, policy: &WorkPolicy) -> WeekTotals {
    let mut totals = WeekTotals::default();

    for day in current_week(now) {
        let punches = hours.get(&day.key).map(Vec::as_slice).unwrap_or_default();
        totals.add_day(&day.key, day_figures(&day, punches, now, policy));
    }

    totals.close(policy);
    totals
}

pub fn remaining_minutes(target: i64, paid: i64) -> i64 {
    target.saturating_sub(paid).max(0)
}
