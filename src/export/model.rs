//! Flat row shapes for export. Column names and order are the contract
//! with the plotting/reporting collaborator: day scalars first, then one
//! `event_*` boolean per category, never missing.

use crate::models::day_record::DayRecord;
use crate::models::event_category::EventCategory;
use crate::models::tidy_record::{TidyDayRecord, serialize_hhmm};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One per (day, token): the long form used for per-event time plotting.
#[derive(Debug, Clone, Serialize)]
pub struct LongRow {
    pub id: u32,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub clock_in: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_hhmm")]
    pub clock_out: Option<NaiveTime>,
    pub event: String,
}

pub(crate) fn long_rows(days: &[DayRecord]) -> Vec<LongRow> {
    let mut rows = Vec::new();
    for day in days {
        for token in &day.event_tokens {
            rows.push(LongRow {
                id: day.id,
                date: day.date,
                clock_in: day.clock_in,
                clock_out: day.clock_out,
                event: token.clone(),
            });
        }
    }
    rows
}

pub(crate) fn long_headers() -> Vec<String> {
    ["id", "date", "clock_in", "clock_out", "event"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn long_record(row: &LongRow) -> Vec<String> {
    vec![
        row.id.to_string(),
        row.date.format("%Y-%m-%d").to_string(),
        fmt_clock(row.clock_in),
        fmt_clock(row.clock_out),
        row.event.clone(),
    ]
}

/// Wide headers: day scalars followed by one column per category.
pub(crate) fn tidy_headers() -> Vec<String> {
    let mut headers: Vec<String> = ["id", "date", "clock_in", "clock_out"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    headers.extend(EventCategory::ALL.iter().map(|c| c.column()));
    headers
}

pub(crate) fn tidy_record(rec: &TidyDayRecord) -> Vec<String> {
    let mut row = vec![
        rec.id.to_string(),
        rec.date_str(),
        fmt_clock(rec.clock_in),
        fmt_clock(rec.clock_out),
    ];
    row.extend(
        EventCategory::ALL
            .iter()
            .map(|c| rec.flags.get(*c).to_string()),
    );
    row
}

fn fmt_clock(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}
