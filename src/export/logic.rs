use crate::core::pipeline::Analysis;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the tidy table (or, with `long`, the per-(day, event) form)
    /// to `file` in the requested format.
    pub fn export(
        analysis: &Analysis,
        format: ExportFormat,
        file: &str,
        long: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match (format, long) {
            (ExportFormat::Csv, false) => {
                let rows: Vec<Vec<String>> = analysis.tidy.iter().map(model::tidy_record).collect();
                export_csv(&model::tidy_headers(), &rows, path)
            }
            (ExportFormat::Csv, true) => {
                let long_rows = model::long_rows(&analysis.days);
                let rows: Vec<Vec<String>> = long_rows.iter().map(model::long_record).collect();
                export_csv(&model::long_headers(), &rows, path)
            }
            (ExportFormat::Json, false) => export_json(&analysis.tidy, path),
            (ExportFormat::Json, true) => export_json(&model::long_rows(&analysis.days), path),
        }
    }
}
