use crate::utils::time::minutes_between;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One calendar day after normalization: typed date and clock times plus the
/// canonical event tokens split out of the free-text notes.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub id: u32, // 1-based input position, stable across the pipeline
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub event_tokens: Vec<String>, // never empty, defaults to ["Standard"]
}

impl DayRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Clock-out minus clock-in. No ordering is enforced between the two,
    /// so the result may be negative when the source data is malformed.
    pub fn office_minutes(&self) -> Option<i64> {
        match (self.clock_in, self.clock_out) {
            (Some(i), Some(o)) => Some(minutes_between(i, o)),
            _ => None,
        }
    }

    /// Tokens rejoined with the canonical separator; feeding this back
    /// through the normalizer yields the same tokens.
    pub fn notes_canonical(&self) -> String {
        self.event_tokens.join(",_")
    }
}
