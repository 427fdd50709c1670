use crate::core::policy::{DEFAULT_BONUS_MINUTES, DEFAULT_BREAK_TIMES, DEFAULT_WEEKLY_HOURS};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod work_days;

pub const DEFAULT_API_URL: &str = "https://www.example.com/quel%20io/api/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub username: String,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: u32,
    /// Workdays, 0 = Monday .. 6 = Sunday.
    #[serde(default = "default_work_days")]
    pub work_days: Vec<u32>,
    #[serde(default = "default_bonus_minutes")]
    pub break_bonus_minutes: i64,
    #[serde(default = "default_break_times")]
    pub break_times: Vec<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_weekly_hours() -> u32 {
    DEFAULT_WEEKLY_HOURS
}
pub fn default_work_days() -> Vec<u32> {
    vec![0, 1, 2, 3, 4]
}
fn default_bonus_minutes() -> i64 {
    DEFAULT_BONUS_MINUTES
}
fn default_break_times() -> Vec<String> {
    DEFAULT_BREAK_TIMES.iter().map(|t| t.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            username: String::new(),
            weekly_hours: default_weekly_hours(),
            work_days: default_work_days(),
            break_bonus_minutes: default_bonus_minutes(),
            break_times: default_break_times(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.quelio)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quelio")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("quelio.conf")
    }

    /// Load configuration from `path`. Ok(None) when the file does not exist.
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file");
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(Some(cfg))
    }

    /// Like [`Config::load`] but a missing file is an error.
    pub fn require(path: &Path) -> AppResult<Self> {
        Self::load(path)?.ok_or(AppError::NotConfigured)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Delete the configuration file. Returns false when there was none.
    pub fn remove(path: &Path) -> AppResult<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub fn is_work_day(&self, weekday_index: u32) -> bool {
        self.work_days.contains(&weekday_index)
    }
}
