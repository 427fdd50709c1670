use crate::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = &ctx.config_path;

        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = Config::require(path)?;
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                return Err(AppError::NotConfigured);
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    messages::success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    messages::warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    let status = Command::new(&default_editor)
                        .arg(path)
                        .status()
                        .map_err(|e| AppError::Config(e.to_string()))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "failed to edit configuration file using '{}'",
                            default_editor
                        )));
                    }
                }
            }

            // Reject an edit that no longer parses.
            Config::require(path)?;
        }

        if !*print_config && !*edit_config {
            messages::info(format!("Configuration file: {}", path.display()));
        }
    }

    Ok(())
}
