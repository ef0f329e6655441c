use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("File not found")]
    FileNotFound(PathBuf),

    #[error("could not read transactions file")]
    Io(#[from] std::io::Error),
}

/// Reasons a single line of the export is rejected. These never reach the
/// user, they only decide which lines are skipped.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingField { expected: usize, found: usize },

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}
