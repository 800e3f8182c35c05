//! Field normalization: stable row ids, typed dates and clock times, and the
//! canonical event tokens split out of the free-text notes.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::raw_record::RawRecord;
use crate::utils::{date, time};
use chrono::NaiveTime;

/// Token assigned to days whose notes are empty or absent.
pub const DEFAULT_CATEGORY: &str = "Standard";

/// Multi-value separator after canonicalization: a ", " list becomes ",_".
pub const TOKEN_SEPARATOR: &str = ",_";

/// `RawRecord[] -> DayRecord[]`, order-preserving, one-to-one.
///
/// Ids are 1-based input positions, never content-derived: two identical
/// rows get different ids. The first malformed date or time aborts the
/// whole batch; there is no partial output.
pub fn normalize(raw: &[RawRecord], date_format: &str) -> AppResult<Vec<DayRecord>> {
    let mut days = Vec::with_capacity(raw.len());

    for (pos, rec) in raw.iter().enumerate() {
        let row = pos + 1;

        let date = date::parse_day_first(&rec.date_text, date_format).ok_or_else(|| {
            AppError::InvalidDate {
                value: rec.date_text.clone(),
                row,
            }
        })?;

        let clock_in = parse_clock(rec.clock_in_text.as_deref(), row)?;
        let clock_out = parse_clock(rec.clock_out_text.as_deref(), row)?;

        days.push(DayRecord {
            id: row as u32,
            date,
            clock_in,
            clock_out,
            event_tokens: canonicalize_notes(rec.notes_text.as_deref()),
        });
    }

    Ok(days)
}

/// Empty cells normalize to absent; malformed non-empty text is an error.
fn parse_clock(text: Option<&str>, row: usize) -> AppResult<Option<NaiveTime>> {
    match text {
        None => Ok(None),
        Some(s) => {
            let t = time::parse_time(s).ok_or_else(|| AppError::InvalidTime {
                value: s.to_string(),
                row,
            })?;
            Ok(Some(t))
        }
    }
}

/// Canonicalize a notes cell into event tokens.
///
/// Spaces, colons and hyphens each become an underscore, which turns the
/// human-written ", " list separator into the ",_" split point. An empty
/// result maps to the single default category, so `event_tokens` is never
/// empty. Re-running this on tokens rejoined with ",_" is a no-op.
pub fn canonicalize_notes(notes: Option<&str>) -> Vec<String> {
    let canonical: String = notes
        .unwrap_or("")
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | ':' | '-' => '_',
            other => other,
        })
        .collect();

    if canonical.is_empty() {
        return vec![DEFAULT_CATEGORY.to_string()];
    }

    canonical
        .split(TOKEN_SEPARATOR)
        .map(str::to_string)
        .collect()
}
