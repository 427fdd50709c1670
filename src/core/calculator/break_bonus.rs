use crate::core::calculator::day_total::static_total;
use crate::core::policy::WorkPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::time::minute_of_day;
use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Paid minutes credited on top of the effective time for `day`.
///
/// Only days with some work earn a bonus. A past day gets every break
/// bonus, a future day none, and today gets one per threshold already
/// reached by `now`. `day` and `now` are both local calendar values.
pub fn break_bonus<S: AsRef<str>>(
    punches: &[S],
    day: NaiveDate,
    now: NaiveDateTime,
    policy: &WorkPolicy,
) -> AppResult<i64> {
    if static_total(punches)? <= 0 {
        return Ok(0);
    }

    let bonus = match day.cmp(&now.date()) {
        Ordering::Less => policy.full_day_bonus(),
        Ordering::Greater => 0,
        Ordering::Equal => {
            let now_min = minute_of_day(now);
            let crossed = policy
                .break_thresholds
                .iter()
                .filter(|&&threshold| now_min >= threshold)
                .count() as i64;
            crossed
                .checked_mul(policy.bonus_minutes)
                .ok_or_else(|| AppError::DurationOverflow("break bonus".into()))?
        }
    };

    Ok(bonus)
}
