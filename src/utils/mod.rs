pub mod colors;
pub mod date;
pub mod formatting;
pub mod time;

pub use time::{format_minutes, parse_hhmm};
