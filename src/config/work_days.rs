//! Parsing of the workdays answer given during `setup`.
//!
//! Accepted forms:
//! - `1-5`        → 1-based inclusive range (Monday..Friday)
//! - `1,2,3,4,5`  → 1-based list (every value in 1..=7)
//! - `0,1,2,3,4`  → 0-based list (every value in 0..=6)
//!
//! Anything else, including an empty answer, falls back to Monday..Friday.
//! The result is always 0-based (0 = Monday).

use super::default_work_days;

pub fn parse_work_days(input: &str) -> Vec<u32> {
    let input = input.trim();
    if input.is_empty() {
        return default_work_days();
    }

    if let Some((start, end)) = input.split_once('-')
        && let (Ok(start), Ok(end)) = (start.trim().parse::<u32>(), end.trim().parse::<u32>())
        && (1..=7).contains(&start)
        && (start..=7).contains(&end)
    {
        return (start - 1..end).collect();
    }

    let parsed: Result<Vec<u32>, _> = input.split(',').map(|d| d.trim().parse::<u32>()).collect();
    if let Ok(days) = parsed {
        if days.iter().all(|d| (1..=7).contains(d)) {
            return days.into_iter().map(|d| d - 1).collect();
        }
        if days.iter().all(|d| *d <= 6) {
            return days;
        }
    }

    default_work_days()
}

/// Inverse of [`parse_work_days`] for prompts: 1-based comma list.
pub fn format_work_days(days: &[u32]) -> String {
    days.iter()
        .map(|d| (d + 1).to_string())
        .collect::<Vec<_>>()
        .join(",")
}
