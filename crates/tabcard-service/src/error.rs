use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unsupported file format: .{0}")]
    UnsupportedFormat(String),

    #[error("No records found in file")]
    EmptyTable,

    #[error("Invalid index for {label}: `{input}` is not a number")]
    InvalidColumnIndex { label: String, input: String },

    #[error("Invalid index for {label}. Use 0-{max}")]
    ColumnIndexOutOfRange {
        label: String,
        index: usize,
        max: usize,
    },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
