mod common;
use common::{at, punches};
use quelio::config::Config;
use quelio::core::calculator::day_total::{PunchPair, pairs};
use quelio::core::logic::Core;
use quelio::core::policy::WorkPolicy;
use quelio::models::hours::Hours;
use quelio::ui::dashboard::{Style, render};
use quelio::ui::timeline::{WIDTH, render_timeline};
use quelio::utils::formatting::{pad_left, pad_right, visible_width};

fn bar(list: &[&str], now: i64, is_today: bool) -> String {
    let p = pairs(&punches(list)).unwrap();
    render_timeline(&p, now, is_today, WIDTH, false)
}

#[test]
fn test_timeline_morning_block() {
    let expected = format!("{}{}", "█".repeat(16), "─".repeat(24));
    assert_eq!(bar(&["08:00", "12:00"], 0, false), expected);
}

#[test]
fn test_timeline_half_columns() {
    // 08:00-08:08 covers the left half of the first column only
    assert!(bar(&["08:00", "08:08"], 0, false).starts_with('▌'));
    // 08:08-08:15 covers its right half only
    assert!(bar(&["08:08", "08:15"], 0, false).starts_with('▐'));
}

#[test]
fn test_timeline_open_interval_runs_to_now() {
    let s = bar(&["13:00"], 16 * 60, true);
    let cols: Vec<char> = s.chars().collect();
    assert_eq!(cols.len(), WIDTH);
    assert!(cols[..20].iter().all(|&c| c == '─'));
    assert!(cols[20..32].iter().all(|&c| c == '█'));
    assert!(cols[32..].iter().all(|&c| c == '─'));
}

#[test]
fn test_timeline_clamps_outside_hours() {
    let s = bar(&["06:00", "20:00"], 0, false);
    assert_eq!(s, "█".repeat(WIDTH));
}

#[test]
fn test_timeline_extreme_punches_saturate() {
    let p = vec![PunchPair { start: i64::MIN, out: Some(i64::MAX) }];
    assert_eq!(render_timeline(&p, 0, false, WIDTH, false), "█".repeat(WIDTH));
}

#[test]
fn test_timeline_live_segment_is_colored() {
    let p = vec![PunchPair { start: 13 * 60, out: None }];
    let live = render_timeline(&p, 16 * 60, true, WIDTH, true);
    let past = render_timeline(&p, 16 * 60, false, WIDTH, true);
    assert_ne!(live, past);
    assert_eq!(visible_width(&live), WIDTH);
}

#[test]
fn test_visible_width_and_padding() {
    assert_eq!(visible_width("\x1b[31mabc\x1b[0m"), 3);
    assert_eq!(visible_width("payé"), 4);
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(pad_left("ab", 4), "  ab");
    assert_eq!(visible_width(&pad_right("\x1b[1mab\x1b[0m", 5)), 5);
}

#[test]
fn test_dashboard_render_plain() {
    let mut hours = Hours::new();
    hours.insert("13-10-2025".into(), punches(&["08:00", "12:00", "13:00", "17:00"]));
    hours.insert("15-10-2025".into(), punches(&["08:00", "12:00", "13:00"]));

    let now = at("2025-10-15 16:00");
    let view = Core::build_week(&hours, now, &WorkPolicy::default());
    let out = render(&view, &Config::default(), now, true, &Style::new(false));

    assert!(out.contains("My week"));
    assert!(out.contains("Effective total:  15:00"));
    assert!(out.contains("Paid total:       15:28"));
    assert!(out.contains("Time remaining:   22:32"));
    assert!(out.contains("Lundi 13/10/2025  08:00"));
    assert!(out.contains("Mercredi 15/10/2025  07:00"));
    assert!(out.contains("13:00  →  16:00 (en cours)"));
    assert!(out.contains("Dimanche 19/10/2025  00:00"));
    assert!(!out.contains('\x1b'));

    // every framed line has the same width
    let widths: Vec<usize> = out
        .lines()
        .filter(|l| l.starts_with('│'))
        .map(visible_width)
        .collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}
