use crate::Context;
use crate::api::BadgeData;
use crate::cli::commands::status::check_server_total;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy::WorkPolicy;
use crate::errors::AppResult;
use crate::ui::dashboard::{self, Style};
use crate::ui::messages;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn paint_once(data: &BadgeData, cfg: &Config, policy: &WorkPolicy, ctx: &Context, details: bool) -> String {
    let now = ctx.now();
    let view = Core::build_week(&data.hours, now, policy);
    dashboard::render(&view, cfg, now, details, &Style::new(ctx.color))
}

/// Handle the `dashboard` command (also the default command).
///
/// Totals are recomputed on every repaint: an open day moves with the clock.
/// Badge data is fetched again every `refresh` seconds; a failed refetch keeps
/// the previous data on screen.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Dashboard {
        watch,
        interval,
        refresh,
        details,
    } = cmd
    else {
        return Ok(());
    };

    let cfg = ctx.config()?;
    let policy = WorkPolicy::from_config(&cfg)?;
    let source = ctx.source(&cfg)?;

    let mut data = source.fetch()?;
    let now = ctx.now();
    let view = Core::build_week(&data.hours, now, &policy);
    check_server_total("effective", data.total_effective.as_deref(), view.totals.effective);
    check_server_total("paid", data.total_paid.as_deref(), view.totals.paid);

    if !*watch {
        print!("{}", dashboard::render(&view, &cfg, now, *details, &Style::new(ctx.color)));
        return Ok(());
    }

    let tick = Duration::from_secs((*interval).max(1));
    let refetch_every = Duration::from_secs((*refresh).max(1));
    let mut last_fetch = Instant::now();
    let mut last_error: Option<String> = None;

    loop {
        if last_fetch.elapsed() >= refetch_every {
            match source.fetch() {
                Ok(fresh) => {
                    data = fresh;
                    last_error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "refresh failed, keeping previous data");
                    last_error = Some(e.to_string());
                }
            }
            last_fetch = Instant::now();
        }

        let screen = paint_once(&data, &cfg, &policy, ctx, *details);
        let mut out = io::stdout().lock();
        write!(out, "{}{}", CLEAR_SCREEN, screen)?;
        out.flush()?;
        drop(out);

        if let Some(e) = &last_error {
            messages::warning(format!("Loading error: {}", e));
        }

        thread::sleep(tick);
    }
}
