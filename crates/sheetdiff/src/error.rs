use std::io;

use thiserror::Error;

/// A document could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error processing Excel file: {0}")]
    Io(#[from] io::Error),

    #[error("Error processing Excel file: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Error processing Excel file: workbook has no worksheets")]
    NoSheet,
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Error comparing Excel files: {0}")]
    Fault(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid utf-8 report output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
