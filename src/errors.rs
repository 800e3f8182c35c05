//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / input file
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Input file contains no data rows")]
    EmptyDataset,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date '{value}' at row {row}")]
    InvalidDate { value: String, row: usize },

    #[error("Invalid time '{value}' at row {row}")]
    InvalidTime { value: String, row: usize },

    // ---------------------------
    // Pipeline invariants
    // ---------------------------
    #[error("Collapsed row id {0} has no matching day record")]
    Join(u32),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
