//! Weekly dashboard: totals panel, then one card per day of the window.

use crate::config::Config;
use crate::core::calculator::day_total::pairs;
use crate::core::logic::WeekView;
use crate::models::day_entry::DayEntry;
use crate::ui::timeline::{self, TICKS};
use crate::utils::colors::{
    BOLD, CYAN, DIM, GREEN, GREY, MAGENTA, RED, color_for_remaining, paint,
};
use crate::utils::date::{capitalize, display_date};
use crate::utils::formatting::{mins2readable, pad_right};
use crate::utils::time::{format_minutes, minute_of_day};
use chrono::{Datelike, NaiveDateTime};

const PANEL_WIDTH: usize = 47;

pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, s: &str, code: &str) -> String {
        if self.color {
            paint(s, code)
        } else {
            s.to_string()
        }
    }
}

fn boxed(lines: &[String], title: Option<&str>) -> String {
    let inner = PANEL_WIDTH - 2;
    let top = match title {
        Some(t) => {
            let t = format!(" {t} ");
            let rest = inner.saturating_sub(t.chars().count() + 1);
            format!("╭─{}{}╮", t, "─".repeat(rest))
        }
        None => format!("╭{}╮", "─".repeat(inner)),
    };

    let mut out = top;
    out.push('\n');
    for line in lines {
        out.push_str(&format!("│ {} │\n", pad_right(line, inner - 2)));
    }
    out.push_str(&format!("╰{}╯\n", "─".repeat(inner)));
    out
}

fn totals_panel(view: &WeekView, style: &Style) -> String {
    let t = &view.totals;
    let lines = vec![
        format!(
            "{}  {}",
            style.paint("Effective total:", BOLD),
            style.paint(&format_minutes(t.effective), GREEN)
        ),
        format!(
            "{}       {}",
            style.paint("Paid total:", BOLD),
            style.paint(&format_minutes(t.paid), CYAN)
        ),
        format!(
            "{}   {}",
            style.paint("Time remaining:", BOLD),
            style.paint(&format_minutes(t.remaining), color_for_remaining(t.remaining))
        ),
    ];
    boxed(&lines, Some("My week"))
}

fn day_card(day: &DayEntry, now: NaiveDateTime, cfg: &Config, details: bool, style: &Style) -> String {
    let now_min = minute_of_day(now);
    let mut lines = Vec::new();

    let total = match day.effective {
        Some(m) => format_minutes(m),
        None => "--:--".to_string(),
    };
    let marker = if day.is_today { "▸ " } else { "  " };
    let name = capitalize(day.label);
    let head = format!(
        "{}{} {}  {}",
        marker,
        style.paint(&name, BOLD),
        style.paint(&display_date(day.date), GREY),
        style.paint(&total, if day.live { MAGENTA } else { GREY })
    );
    lines.push(head);

    if day.is_empty() {
        let rest_day = !cfg.is_work_day(day.date.weekday().num_days_from_monday());
        let card = boxed(&lines, None);
        return if rest_day { style.paint(&card, DIM) } else { card };
    }

    let day_pairs = match pairs(&day.punches) {
        Ok(p) => p,
        Err(e) => {
            lines.push(style.paint(&format!("  {}", e), RED));
            return boxed(&lines, None);
        }
    };

    lines.push(String::new());
    lines.push(timeline::render_timeline(
        &day_pairs,
        now_min,
        day.is_today,
        timeline::WIDTH,
        style.color,
    ));
    lines.push(style.paint(TICKS, DIM));

    if details {
        lines.push(String::new());
        lines.push(style.paint("In/Out:", GREY));
        for p in &day_pairs {
            match p.out {
                Some(out) => lines.push(format!(
                    "  - {}  →  {}",
                    format_minutes(p.start),
                    format_minutes(out)
                )),
                None => lines.push(style.paint(
                    &format!(
                        "  - {}  →  {} (en cours)",
                        format_minutes(p.start),
                        format_minutes(now_min)
                    ),
                    MAGENTA,
                )),
            }
        }
        if let Some(m) = day.effective {
            lines.push(style.paint(&format!("Total: {}", mins2readable(m)), GREY));
        }
    }

    boxed(&lines, None)
}

/// Render the whole dashboard as a string.
pub fn render(view: &WeekView, cfg: &Config, now: NaiveDateTime, details: bool, style: &Style) -> String {
    let mut out = totals_panel(view, style);

    for day in &view.days {
        out.push_str(&day_card(day, now, cfg, details, style));
    }

    for failure in &view.totals.failures {
        out.push_str(&style.paint(
            &format!("! {}: {}\n", failure.date_key, failure.error),
            RED,
        ));
    }

    out.push_str(&style.paint(
        &format!("\nupdated {}  ·  Ctrl+C to quit\n", now.format("%H:%M:%S")),
        GREY,
    ));
    out
}
