//! Badge data sources: the HTTP badge API and saved payload files.

use crate::errors::AppResult;
use crate::models::hours::Hours;
use serde::{Deserialize, Serialize};

pub mod client;
pub mod file;

pub use client::{BadgeApi, normalize_url};
pub use file::FileSource;

/// Payload returned by the badge API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BadgeData {
    pub hours: Hours,
    /// Server-side week totals (`HH:MM`), informational only.
    #[serde(default)]
    pub total_effective: Option<String>,
    #[serde(default)]
    pub total_paid: Option<String>,
}

impl BadgeData {
    /// Punches come padded from some servers.
    pub fn cleaned(mut self) -> Self {
        for punches in self.hours.values_mut() {
            for p in punches.iter_mut() {
                *p = p.trim().to_string();
            }
        }
        self
    }
}

/// Anything able to provide the punch map of the current period.
pub trait PunchSource {
    fn fetch(&self) -> AppResult<BadgeData>;
}
