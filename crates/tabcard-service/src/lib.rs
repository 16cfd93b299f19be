//! Spreadsheet-to-vCard conversion: table reading, column mapping and the
//! row mapper that feeds the encoder.

pub mod convert;
pub mod error;
pub mod mapping;
pub mod table;
