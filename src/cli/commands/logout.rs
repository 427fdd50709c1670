use crate::Context;
use crate::config::Config;
use crate::credentials::forget_password;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `logout` command: forget the keychain password, then delete
/// the configuration file.
pub fn handle(ctx: &Context) -> AppResult<()> {
    match Config::load(&ctx.config_path) {
        Ok(Some(cfg)) => match forget_password(&cfg) {
            Ok(true) => tracing::info!("keychain password deleted"),
            Ok(false) => {}
            Err(error) => tracing::warn!(%error, "keychain password not deleted"),
        },
        Ok(None) => {
            messages::info("No configuration found.");
            return Ok(());
        }
        // An unreadable file names no account: remove it anyway.
        Err(error) => tracing::warn!(%error, "configuration unreadable"),
    }

    Config::remove(&ctx.config_path)?;
    tracing::info!(path = %ctx.config_path.display(), "configuration removed");
    messages::success("Logged out, configuration deleted.");
    Ok(())
}
