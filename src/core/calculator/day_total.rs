//! Day totals: pairs punches strictly in order (0 with 1, 2 with 3, ...).

use crate::errors::{AppError, AppResult};
use crate::utils::time::{now_minutes, parse_hhmm};

/// One in/out pair of a day, in minutes of day. `out` is None for an open entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunchPair {
    pub start: i64,
    pub out: Option<i64>,
}

pub fn punch_minutes<S: AsRef<str>>(punches: &[S]) -> AppResult<Vec<i64>> {
    punches.iter().map(|p| parse_hhmm(p.as_ref())).collect()
}

pub fn is_open<S>(punches: &[S]) -> bool {
    punches.len() % 2 == 1
}

fn overflow(what: &str) -> AppError {
    AppError::DurationOverflow(what.to_string())
}

fn closed_sum(mins: &[i64]) -> AppResult<i64> {
    mins.chunks_exact(2).try_fold(0i64, |acc, pair| {
        pair[1]
            .checked_sub(pair[0])
            .and_then(|d| acc.checked_add(d))
            .ok_or_else(|| overflow("day total"))
    })
}

/// Total of a closed day. A trailing unmatched punch is ignored; an
/// out-of-order pair contributes a negative amount as-is.
pub fn static_total<S: AsRef<str>>(punches: &[S]) -> AppResult<i64> {
    let mins = punch_minutes(punches)?;
    closed_sum(&mins)
}

/// Like [`static_total`], but an open trailing punch runs until `now_minutes`
/// (local minute of day when None). The open interval never counts negative.
pub fn dynamic_total<S: AsRef<str>>(punches: &[S], now_minutes_opt: Option<i64>) -> AppResult<i64> {
    let mins = punch_minutes(punches)?;
    let mut total = closed_sum(&mins)?;

    if mins.len() % 2 == 1
        && let Some(&last) = mins.last()
    {
        let now = now_minutes_opt.unwrap_or_else(now_minutes);
        let open = now.checked_sub(last).ok_or_else(|| overflow("open interval"))?;
        total = total
            .checked_add(open.max(0))
            .ok_or_else(|| overflow("day total"))?;
    }

    Ok(total)
}

pub fn pairs<S: AsRef<str>>(punches: &[S]) -> AppResult<Vec<PunchPair>> {
    let mins = punch_minutes(punches)?;
    Ok(mins
        .chunks(2)
        .map(|c| PunchPair {
            start: c[0],
            out: c.get(1).copied(),
        })
        .collect())
}
