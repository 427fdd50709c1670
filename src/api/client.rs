use super::{BadgeData, PunchSource};
use crate::errors::{AppError, AppResult};
use reqwest::StatusCode;
use reqwest::blocking::{Client, multipart};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(20);

/// Escape spaces and make sure the URL ends with a slash.
pub fn normalize_url(url: &str) -> String {
    let mut u = url.trim().replace(' ', "%20");
    if !u.ends_with('/') {
        u.push('/');
    }
    u
}

/// Client for the single POST endpoint of the badge service.
pub struct BadgeApi {
    api_url: String,
    username: String,
    password: String,
    client: Client,
}

impl BadgeApi {
    pub fn new(api_url: &str, username: &str, password: &str) -> AppResult<Self> {
        let client = Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            api_url: normalize_url(api_url),
            username: username.to_string(),
            password: password.to_string(),
            client,
        })
    }
}

/// Validate the raw response body of the badge endpoint.
pub fn parse_payload(status: StatusCode, body: &str) -> AppResult<BadgeData> {
    if status != StatusCode::OK {
        let snippet: String = body.chars().take(200).collect();
        return Err(AppError::Api(format!("HTTP {}: {}", status.as_u16(), snippet)));
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| AppError::Api("invalid JSON response".into()))?;

    if !value.as_object().is_some_and(|o| o.contains_key("hours")) {
        return Err(AppError::Api("unexpected response: no 'hours' field".into()));
    }

    let data: BadgeData = serde_json::from_value(value)
        .map_err(|e| AppError::Api(format!("unexpected response: {}", e)))?;
    Ok(data.cleaned())
}

impl PunchSource for BadgeApi {
    fn fetch(&self) -> AppResult<BadgeData> {
        let form = multipart::Form::new()
            .text("username", self.username.clone())
            .text("password", self.password.clone());

        tracing::debug!(url = %self.api_url, user = %self.username, "fetching badge data");

        let resp = self.client.post(&self.api_url).multipart(form).send()?;
        let status = resp.status();
        let body = resp.text()?;

        let data = parse_payload(status, &body)?;
        tracing::info!(days = data.hours.len(), "badge data received");
        Ok(data)
    }
}
