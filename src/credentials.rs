//! Password resolution. The password lives in the OS keychain (saved by
//! `setup`), or comes from the environment or a hidden prompt.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use keyring::Entry;
use std::env;

pub const PASSWORD_ENV_VARS: [&str; 2] = ["QUELIO_PASSWORD", "QUELIO_PWD"];

/// Keychain service name for every quelio entry.
pub const KEYCHAIN_SERVICE: &str = "quelio";

/// Keychain account of a configuration: `username@api_url`.
pub fn keychain_account(cfg: &Config) -> String {
    format!("{}@{}", cfg.username, cfg.api_url)
}

fn keychain_entry(cfg: &Config) -> AppResult<Entry> {
    Ok(Entry::new(KEYCHAIN_SERVICE, &keychain_account(cfg))?)
}

pub fn store_password(cfg: &Config, password: &str) -> AppResult<()> {
    keychain_entry(cfg)?.set_password(password)?;
    tracing::debug!(account = %keychain_account(cfg), "password saved in the keychain");
    Ok(())
}

/// Password saved for `cfg`, if any. A keychain that cannot be reached
/// counts as no password.
pub fn stored_password(cfg: &Config) -> Option<String> {
    match keychain_entry(cfg).and_then(|e| Ok(e.get_password()?)) {
        Ok(pwd) if !pwd.is_empty() => Some(pwd),
        Ok(_) | Err(AppError::Keychain(keyring::Error::NoEntry)) => None,
        Err(error) => {
            tracing::debug!(%error, "keychain unavailable");
            None
        }
    }
}

/// Delete the saved password. Ok(false) when there was none.
pub fn forget_password(cfg: &Config) -> AppResult<bool> {
    match keychain_entry(cfg)?.delete_password() {
        Ok(()) => Ok(true),
        Err(keyring::Error::NoEntry) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub fn password_from_env() -> Option<String> {
    PASSWORD_ENV_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|v| !v.is_empty())
}

pub fn prompt_password() -> AppResult<String> {
    rpassword::prompt_password("Password: ").map_err(|e| AppError::Credentials(e.to_string()))
}

/// Keychain first, then the environment, then an interactive prompt when allowed.
pub fn resolve_password(cfg: &Config, allow_prompt: bool) -> AppResult<String> {
    if let Some(pwd) = stored_password(cfg) {
        tracing::debug!("password taken from the keychain");
        return Ok(pwd);
    }
    if let Some(pwd) = password_from_env() {
        tracing::debug!("password taken from the environment");
        return Ok(pwd);
    }
    if !allow_prompt {
        return Err(AppError::Credentials(format!(
            "run `quelio setup`, set {} or run interactively",
            PASSWORD_ENV_VARS[0]
        )));
    }
    messages::warning("Password not found in the keychain or the environment. Type it (it will not be stored):");
    prompt_password()
}
