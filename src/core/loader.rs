//! CSV loading. All four fields come out as raw text so that no
//! locale-dependent coercion happens before the normalizer can report a
//! malformed cell with its row position.

use crate::errors::{AppError, AppResult};
use crate::models::raw_record::RawRecord;
use csv::ReaderBuilder;
use std::path::Path;

pub const COL_DATE: &str = "Date";
pub const COL_CLOCK_IN: &str = "Clock In Time";
pub const COL_CLOCK_OUT: &str = "Clock Out Time";
pub const COL_NOTES: &str = "Notes";

/// Read the timesheet into raw records, preserving source order.
/// Columns are matched by header name, not position.
pub fn load_records(path: &Path) -> AppResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let position_of = |name: &str| -> AppResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AppError::MissingColumn(name.to_string()))
    };

    let date_idx = position_of(COL_DATE)?;
    let clock_in_idx = position_of(COL_CLOCK_IN)?;
    let clock_out_idx = position_of(COL_CLOCK_OUT)?;
    let notes_idx = position_of(COL_NOTES)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // a short row (flexible mode) reads as absent fields, not an error
        let field = |idx: usize| -> Option<String> {
            row.get(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        records.push(RawRecord {
            date_text: field(date_idx).unwrap_or_default(),
            clock_in_text: field(clock_in_idx),
            clock_out_text: field(clock_out_idx),
            notes_text: field(notes_idx),
        });
    }

    Ok(records)
}
