use crate::Context;
use crate::api::BadgeData;
use crate::cli::parser::Commands;
use crate::core::calculator::week_totals::DayFailure;
use crate::core::logic::{Core, WeekView};
use crate::core::policy::WorkPolicy;
use crate::core::summary::SummaryReport;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::pad_right;
use crate::utils::time::{format_minutes, parse_hhmm};
use serde_json::json;

/// Warn when the server's own total disagrees with ours.
pub fn check_server_total(name: &str, server: Option<&str>, computed: i64) {
    let Some(text) = server else { return };
    match parse_hhmm(text) {
        Ok(m) if m != computed => tracing::warn!(
            total = name,
            server = text,
            computed = %format_minutes(computed),
            "server total differs from the computed one"
        ),
        Ok(_) => {}
        Err(error) => tracing::warn!(total = name, %error, "unreadable server total"),
    }
}

fn failure_json(f: &DayFailure) -> serde_json::Value {
    json!({ "date": f.date_key, "error": f.error.to_string() })
}

fn print_json(data: &BadgeData, view: &WeekView, summary: &SummaryReport) -> AppResult<()> {
    let doc = json!({
        "server": {
            "total_effective": data.total_effective,
            "total_paid": data.total_paid,
        },
        "week": {
            "effective": format_minutes(view.totals.effective),
            "paid": format_minutes(view.totals.paid),
            "remaining": format_minutes(view.totals.remaining),
            "days": view.days,
            "failures": view.totals.failures.iter().map(failure_json).collect::<Vec<_>>(),
        },
        "summary": summary.rows.iter().map(|r| json!({
            "date": r.date_key,
            "weekday": r.label,
            "total": format_minutes(r.minutes),
        })).collect::<Vec<_>>(),
        "failures": summary.failures.iter().map(failure_json).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn server_value(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("--:--")
}

fn print_text(data: &BadgeData, view: &WeekView, summary: &SummaryReport) {
    println!("\nMy week");
    println!(
        "  {} : {}   (server: {})",
        pad_right("Effective total", 15),
        format_minutes(view.totals.effective),
        server_value(&data.total_effective)
    );
    println!(
        "  {} : {}   (server: {})",
        pad_right("Paid total", 15),
        format_minutes(view.totals.paid),
        server_value(&data.total_paid)
    );
    println!(
        "  {} : {}",
        pad_right("Time remaining", 15),
        format_minutes(view.totals.remaining)
    );
    println!();

    for row in &summary.rows {
        println!(
            "- {} {} : {}",
            pad_right(row.label, 8),
            row.date_key,
            format_minutes(row.minutes)
        );
    }
    println!();

    for f in view.totals.failures.iter().chain(summary.failures.iter()) {
        messages::warning(format!("{}: {}", f.date_key, f.error));
    }
}

/// Handle the `status` command: non-interactive recap.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let cfg = ctx.config()?;
        let policy = WorkPolicy::from_config(&cfg)?;
        let data = ctx.source(&cfg)?.fetch()?;
        let now = ctx.now();

        let view = Core::build_week(&data.hours, now, &policy);
        let summary = Core::build_summary(&data.hours);

        check_server_total("effective", data.total_effective.as_deref(), view.totals.effective);
        check_server_total("paid", data.total_paid.as_deref(), view.totals.paid);

        if *json {
            print_json(&data, &view, &summary)?;
        } else {
            print_text(&data, &view, &summary);
        }
    }
    Ok(())
}
