//! quelio library root.
//! Exposes the time accounting engine (`core`), the CLI parser, the high-level
//! run() function and the host modules around them.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod credentials;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use api::{BadgeApi, FileSource, PunchSource};
use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Per-invocation settings resolved from the global flags.
pub struct Context {
    pub config_path: PathBuf,
    pub from_file: Option<PathBuf>,
    pub fixed_now: Option<NaiveDateTime>,
    pub color: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let fixed_now = cli.now.as_deref().map(utils::date::parse_now).transpose()?;
        let color = !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();

        Ok(Self {
            config_path: cli
                .config
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(Config::config_file),
            from_file: cli.from_file.as_ref().map(PathBuf::from),
            fixed_now,
            color,
        })
    }

    /// Reference time for every computation of this run.
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now.unwrap_or_else(utils::date::now)
    }

    /// Configuration needed to read badge data. A replayed file does not need
    /// credentials, so defaults are fine there.
    pub fn config(&self) -> AppResult<Config> {
        match Config::load(&self.config_path)? {
            Some(cfg) => Ok(cfg),
            None if self.from_file.is_some() => Ok(Config::default()),
            None => Err(errors::AppError::NotConfigured),
        }
    }

    pub fn source(&self, cfg: &Config) -> AppResult<Box<dyn PunchSource>> {
        if let Some(path) = &self.from_file {
            return Ok(Box::new(FileSource::new(path.clone())));
        }
        let password = credentials::resolve_password(cfg, std::io::stdin().is_terminal())?;
        Ok(Box::new(BadgeApi::new(&cfg.api_url, &cfg.username, &password)?))
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Setup) => cli::commands::setup::handle(ctx),
        Some(Commands::Logout) => cli::commands::logout::handle(ctx),
        Some(cmd @ Commands::Status { .. }) => cli::commands::status::handle(cmd, ctx),
        Some(cmd @ Commands::Dashboard { .. }) => cli::commands::dashboard::handle(cmd, ctx),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, ctx),
        None => cli::commands::dashboard::handle(&Commands::default_dashboard(), ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init();

    let ctx = Context::from_cli(&cli)?;
    tracing::debug!(config = %ctx.config_path.display(), "starting");

    dispatch(&cli, &ctx)
}
