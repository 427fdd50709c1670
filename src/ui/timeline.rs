//! Day timeline bar from 08:00 to 18:00, drawn with half-column precision.

use crate::core::calculator::day_total::PunchPair;
use crate::utils::colors::{GREY, MAGENTA, PURPLE, RESET};

pub const DAY_START: i64 = 8 * 60;
pub const DAY_END: i64 = 18 * 60;
pub const WIDTH: usize = 40;

pub const TICKS: &str = "08  09  10  11  12  13  14  15  16  17  18";

/// Position of `minute` in half columns, clamped to `[0, width * 2]`.
fn to_half(minute: i64, width: usize) -> usize {
    let halves = (width * 2) as i64;
    let x2 = minute.saturating_sub(DAY_START).saturating_mul(halves) / (DAY_END - DAY_START);
    x2.clamp(0, halves) as usize
}

fn mark(halves: &mut [bool], start: i64, end: i64, width: usize) -> (usize, usize) {
    let max = width * 2;
    let s2 = to_half(start, width);
    let mut e2 = to_half(end, width);
    if e2 <= s2 {
        e2 = (s2 + 1).min(max);
    }
    for h in halves.iter_mut().take(e2).skip(s2) {
        *h = true;
    }
    (s2, e2)
}

/// Render the bar. The open pair, if any, runs to `now_minutes` and is drawn
/// in the live color when `is_today`.
pub fn render_timeline(pairs: &[PunchPair], now_minutes: i64, is_today: bool, width: usize, color: bool) -> String {
    let mut halves = vec![false; width * 2];
    let mut live: Option<(usize, usize)> = None;

    for pair in pairs {
        match pair.out {
            Some(out) => {
                mark(&mut halves, pair.start, out, width);
            }
            None => live = Some(mark(&mut halves, pair.start, now_minutes, width)),
        }
    }

    let mut out = String::with_capacity(width * 8);
    for col in 0..width {
        let (l, r) = (col * 2, col * 2 + 1);
        let (left, right) = (halves[l], halves[r]);

        let (ch, style) = match (left, right) {
            (false, false) => ('─', GREY),
            (true, true) => ('█', PURPLE),
            (true, false) => ('▌', PURPLE),
            (false, true) => ('▐', PURPLE),
        };
        let in_live = is_today
            && live.is_some_and(|(s, e)| (l >= s && l < e) || (r >= s && r < e));
        let style = if in_live && ch != '─' { MAGENTA } else { style };

        if color {
            out.push_str(style);
            out.push(ch);
            out.push_str(RESET);
        } else {
            out.push(ch);
        }
    }
    out
}
