use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{minute_of_day_of, parse_clock};

pub const DEFAULT_WEEKLY_HOURS: u32 = 38;
pub const DEFAULT_BONUS_MINUTES: i64 = 7;
pub const DEFAULT_BREAK_TIMES: [&str; 2] = ["10:30", "15:30"];

/// Policy parameters for one computation: weekly target and break bonuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPolicy {
    pub weekly_target_minutes: i64,
    /// Paid minutes credited for each break threshold crossed.
    pub bonus_minutes: i64,
    /// Break check times, as minutes of day.
    pub break_thresholds: Vec<i64>,
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            weekly_target_minutes: DEFAULT_WEEKLY_HOURS as i64 * 60,
            bonus_minutes: DEFAULT_BONUS_MINUTES,
            break_thresholds: vec![10 * 60 + 30, 15 * 60 + 30],
        }
    }
}

impl WorkPolicy {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let break_thresholds = cfg
            .break_times
            .iter()
            .map(|t| {
                parse_clock(t)
                    .map(minute_of_day_of)
                    .ok_or_else(|| AppError::InvalidTime(t.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;

        if cfg.break_bonus_minutes < 0 {
            return Err(AppError::Config(format!(
                "break_bonus_minutes must be >= 0 (got {})",
                cfg.break_bonus_minutes
            )));
        }

        Ok(Self {
            weekly_target_minutes: cfg.weekly_hours as i64 * 60,
            bonus_minutes: cfg.break_bonus_minutes,
            break_thresholds,
        })
    }

    /// Bonus credited for a fully elapsed day.
    pub fn full_day_bonus(&self) -> i64 {
        self.bonus_minutes
            .saturating_mul(self.break_thresholds.len() as i64)
    }
}
