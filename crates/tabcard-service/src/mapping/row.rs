//! Row mapper: one table row to one contact record.

use std::collections::BTreeMap;

use tabcard_core::types::PhoneType;
use tabcard_rfc::rfc::vcard::{ContactRecord, Phone};

use super::column::{ColumnMapping, ContactField};
use crate::error::{ServiceError, ServiceResult};

/// A [`ColumnMapping`] bound to the column positions of one header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMapping {
    first_name: usize,
    optional: BTreeMap<ContactField, usize>,
    phones: Vec<(usize, PhoneType)>,
}

impl ColumnMapping {
    /// ## Summary
    /// Looks up the column of every bound header.
    ///
    /// When a header name repeats, the leftmost column wins.
    ///
    /// ## Errors
    /// Returns `UnknownColumn` if a bound header is not in `headers`.
    pub fn resolve(&self, headers: &[String]) -> ServiceResult<ResolvedMapping> {
        let position = |name: &str| -> ServiceResult<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ServiceError::UnknownColumn(name.to_string()))
        };

        Ok(ResolvedMapping {
            first_name: position(&self.first_name)?,
            optional: self
                .optional
                .iter()
                .map(|(&field, header)| position(header).map(|index| (field, index)))
                .collect::<ServiceResult<_>>()?,
            phones: self
                .phones
                .iter()
                .map(|p| position(&p.header).map(|index| (index, p.kind)))
                .collect::<ServiceResult<_>>()?,
        })
    }
}

impl ResolvedMapping {
    /// ## Summary
    /// Builds the contact record for one row.
    ///
    /// Missing cells read as empty text. Unbound optional fields are `None`;
    /// bound ones carry the cell, even when empty. Phones with an empty
    /// number are dropped.
    #[must_use]
    pub fn map_row(&self, row: &[String]) -> ContactRecord {
        let cell =
            |index: usize| normalize_line_endings(row.get(index).map_or("", String::as_str));

        let mut record = ContactRecord::new(cell(self.first_name));
        for (&field, &index) in &self.optional {
            let value = Some(cell(index));
            match field {
                ContactField::FirstName => record.first_name = cell(index),
                ContactField::LastName => record.last_name = value,
                ContactField::FormattedName => record.formatted_name = value,
                ContactField::AdditionalNames => record.additional_names = value,
                ContactField::Prefix => record.prefix = value,
                ContactField::Suffix => record.suffix = value,
                ContactField::Email => record.email = value,
                ContactField::Address => record.address = value,
                ContactField::Org => record.org = value,
                ContactField::Title => record.title = value,
                ContactField::Url => record.url = value,
            }
        }

        record.phones = self
            .phones
            .iter()
            .map(|&(index, kind)| Phone::new(cell(index), kind))
            .filter(|p| !p.number.is_empty())
            .collect();

        record
    }
}

/// Converts CRLF and lone CR to LF, so a multi-line cell escapes to `\n`.
#[must_use]
pub fn normalize_line_endings(value: &str) -> String {
    if value.contains('\r') {
        value.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        ["First", "Last", "Mobile", "Work", "Address", "Mail"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    fn mapping() -> ColumnMapping {
        ColumnMapping::new("First")
            .with(ContactField::LastName, "Last")
            .with(ContactField::Address, "Address")
            .with(ContactField::Email, "Mail")
            .with_phone("Mobile", PhoneType::Cell)
            .with_phone("Work", PhoneType::Work)
    }

    #[test]
    fn maps_bound_cells() {
        let resolved = mapping().resolve(&headers()).expect("mapping should resolve");
        let record = resolved.map_row(&row(&[
            "Ada",
            "Lovelace",
            "",
            "555-1234",
            "12 St James's Square",
            "ada@example.com",
        ]));

        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(record.formatted_name, None);
        assert_eq!(record.address.as_deref(), Some("12 St James's Square"));
        assert_eq!(record.email.as_deref(), Some("ada@example.com"));
        assert_eq!(record.org, None);
        assert_eq!(record.phones, [Phone::new("555-1234", PhoneType::Work)]);
        assert_eq!(record.resolved_formatted_name(), "Ada Lovelace");
    }

    #[test]
    fn short_rows_read_as_empty() {
        let resolved = mapping().resolve(&headers()).expect("mapping should resolve");
        let record = resolved.map_row(&row(&["Ada"]));

        assert_eq!(record.last_name.as_deref(), Some(""));
        assert!(record.phones.is_empty());
    }

    #[test]
    fn unknown_header_is_rejected() {
        let err = ColumnMapping::new("Given").resolve(&headers()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown column: Given");

        let err = mapping()
            .with_phone("Fax", PhoneType::Home)
            .resolve(&headers())
            .unwrap_err();
        assert!(matches!(err, ServiceError::UnknownColumn(name) if name == "Fax"));
    }

    #[test]
    fn explicit_formatted_name_column() {
        let headers = row(&["First", "Display"]);
        let resolved = ColumnMapping::new("First")
            .with(ContactField::FormattedName, "Display")
            .resolve(&headers)
            .expect("mapping should resolve");

        let record = resolved.map_row(&row(&["Ada", "Lady Lovelace"]));
        assert_eq!(record.resolved_formatted_name(), "Lady Lovelace");
    }

    #[test]
    fn cell_line_endings_are_normalized() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_line_endings("plain"), "plain");
    }
}
