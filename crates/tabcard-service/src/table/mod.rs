//! Tabular contact sources.
//!
//! A [`Table`] is a header row plus data rows of text cells, read from a
//! delimited text file or from the first worksheet of a spreadsheet.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Data, Range, Reader};

use crate::error::{ServiceError, ServiceResult};

const UTF8_BOM: char = '\u{feff}';

/// Header row and data rows of a tabular source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Source layouts recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
    Xls,
    Xlsx,
    Ods,
}

impl TableFormat {
    /// ## Summary
    /// Picks the format from a path's extension (case-insensitive).
    ///
    /// ## Errors
    /// Returns `UnsupportedFormat` for any other extension, including none.
    pub fn from_path(path: &Path) -> ServiceResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xls" => Ok(Self::Xls),
            "xlsx" => Ok(Self::Xlsx),
            "ods" => Ok(Self::Ods),
            _ => Err(ServiceError::UnsupportedFormat(ext)),
        }
    }

    /// Field delimiter of the text formats; `None` for spreadsheets.
    #[must_use]
    pub const fn delimiter(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Xls | Self::Xlsx | Self::Ods => None,
        }
    }
}

impl Table {
    /// ## Summary
    /// Reads a table whose first record is the header row.
    ///
    /// Rows may be shorter or longer than the header; missing cells read as
    /// empty text. A leading UTF-8 byte order mark is dropped.
    ///
    /// ## Errors
    /// Returns an error if the input is not valid delimited text or holds no
    /// data rows.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> ServiceResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(ToString::to_string)
            .collect();
        if let Some(first) = headers.first_mut()
            && first.starts_with(UTF8_BOM)
        {
            first.remove(0);
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            rows.push(record?.iter().map(ToString::to_string).collect());
        }

        Self::from_parts(headers, rows)
    }

    /// ## Summary
    /// Reads the first worksheet of an `.xls`, `.xlsx` or `.ods` workbook.
    ///
    /// ## Errors
    /// Returns an error if the workbook cannot be opened, has no worksheet,
    /// or its first worksheet holds no data rows.
    pub fn from_workbook(path: &Path) -> ServiceResult<Self> {
        let mut workbook = calamine::open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ServiceError::EmptyTable)??;
        Self::from_range(&range)
    }

    /// ## Summary
    /// Builds a table from a worksheet's used cells.
    ///
    /// The first row is the header row. Cells are rendered as text, empty
    /// cells as empty text, and rows with no text at all are skipped.
    ///
    /// ## Errors
    /// Returns `EmptyTable` when no data rows remain.
    pub fn from_range(range: &Range<Data>) -> ServiceResult<Self> {
        let mut rows = range
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<String>>());
        let headers = rows.next().unwrap_or_default();
        let rows = rows
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect();

        Self::from_parts(headers, rows)
    }

    fn from_parts(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> ServiceResult<Self> {
        if rows.is_empty() {
            return Err(ServiceError::EmptyTable);
        }

        for row in &mut rows {
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
        }

        tracing::debug!(
            columns = headers.len(),
            rows = rows.len(),
            "Table loaded"
        );
        Ok(Self { headers, rows })
    }

    /// The first `n` data rows, for showing the user what was read.
    #[must_use]
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// ## Summary
/// Reads a table from a `.csv`, `.tsv`, `.xls`, `.xlsx` or `.ods` file.
///
/// ## Errors
/// Returns an error if the extension is not supported, the file cannot be
/// opened, or its contents cannot be read as a table.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_table(path: &Path) -> ServiceResult<Table> {
    let format = TableFormat::from_path(path)?;
    tracing::debug!(?format, "Reading table");

    match format.delimiter() {
        Some(delimiter) => Table::from_reader(File::open(path)?, delimiter),
        None => Table::from_workbook(path),
    }
}
