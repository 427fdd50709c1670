//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

/// Display width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC [ ... final byte in @..~
            for n in chars.by_ref() {
                if ('@'..='~').contains(&n) && n != '[' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    UnicodeWidthStr::width(plain.as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// `07h 42m` style, used where a label reads better than a clock.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.unsigned_abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
