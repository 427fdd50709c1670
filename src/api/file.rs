use super::client::parse_payload;
use super::{BadgeData, PunchSource};
use crate::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::fs;
use std::path::PathBuf;

/// Replays a badge payload saved as JSON (same shape as the API response).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PunchSource for FileSource {
    fn fetch(&self) -> AppResult<BadgeData> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Api(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let data = parse_payload(StatusCode::OK, &content)?;
        tracing::debug!(path = %self.path.display(), days = data.hours.len(), "badge data loaded from file");
        Ok(data)
    }
}
