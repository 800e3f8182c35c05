//! Explode multi-valued event tokens into one row per (day, token) pair,
//! then collapse back to one row per day by OR-reducing the indicators and
//! rejoining the day scalars.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::event_category::EventFlags;
use crate::models::tidy_record::TidyDayRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Intermediate long-form row. Never survives past the collapse in the
/// pipeline, but also serves as the per-event table for plotting consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ExplodedRow {
    pub id: u32,
    pub event_token: String,
    #[serde(flatten)]
    pub flags: EventFlags,
}

/// Step A: one row per (day, token). A token matching no known category
/// yields an all-false indicator vector; unknown tokens are tolerated, not
/// rejected.
pub fn explode(days: &[DayRecord]) -> Vec<ExplodedRow> {
    let mut rows = Vec::new();
    for day in days {
        for token in &day.event_tokens {
            rows.push(ExplodedRow {
                id: day.id,
                event_token: token.clone(),
                flags: EventFlags::from_token(token),
            });
        }
    }
    rows
}

/// Steps B and C: group exploded rows by day id, OR-reduce the indicator
/// vectors, then rejoin date and clock times from the source records by an
/// indexed id lookup.
///
/// Output is ordered by ascending id. A collapsed id with no source record
/// is an invariant violation and fails the batch.
pub fn collapse(rows: &[ExplodedRow], days: &[DayRecord]) -> AppResult<Vec<TidyDayRecord>> {
    let mut grouped: BTreeMap<u32, EventFlags> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.id).or_default().or_assign(&row.flags);
    }

    let by_id: BTreeMap<u32, &DayRecord> = days.iter().map(|d| (d.id, d)).collect();

    let mut tidy = Vec::with_capacity(grouped.len());
    for (id, flags) in grouped {
        let day = by_id.get(&id).ok_or(AppError::Join(id))?;
        tidy.push(TidyDayRecord {
            id,
            date: day.date,
            clock_in: day.clock_in,
            clock_out: day.clock_out,
            flags,
        });
    }

    Ok(tidy)
}

/// Full explode-then-collapse round trip. Every day record carries at least
/// one token, so the output has exactly the input's id set.
pub fn tidy(days: &[DayRecord]) -> AppResult<Vec<TidyDayRecord>> {
    collapse(&explode(days), days)
}
