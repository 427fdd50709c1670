/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Purple used for worked segments of the timeline.
pub const PURPLE: &str = "\x1b[38;5;99m";

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Remaining time color: red while something is left, green once done.
pub fn color_for_remaining(value: i64) -> &'static str {
    if value > 0 { RED } else { GREEN }
}
