use super::event_category::EventFlags;
use crate::utils::time::minutes_between;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Final per-day row: the day scalars rejoined with the OR-reduced category
/// indicators. Every category flag is a concrete boolean, never missing.
#[derive(Debug, Clone, Serialize)]
pub struct TidyDayRecord {
    pub id: u32,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub clock_in: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_hhmm")]
    pub clock_out: Option<NaiveTime>,
    #[serde(flatten)]
    pub flags: EventFlags,
}

impl TidyDayRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Same pass-through semantics as `DayRecord::office_minutes`.
    pub fn office_minutes(&self) -> Option<i64> {
        match (self.clock_in, self.clock_out) {
            (Some(i), Some(o)) => Some(minutes_between(i, o)),
            _ => None,
        }
    }
}

/// Times are exchanged as "HH:MM" in exported tables.
pub(crate) fn serialize_hhmm<S>(
    value: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
        None => serializer.serialize_none(),
    }
}
