//! Field-to-column bindings and the parsing of user-entered column indices.

use std::collections::BTreeMap;

use tabcard_core::config::MappingConfig;
use tabcard_core::types::PhoneType;

use crate::error::{ServiceError, ServiceResult};

/// Logical contact fields a column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    FormattedName,
    AdditionalNames,
    Prefix,
    Suffix,
    Email,
    Address,
    Org,
    Title,
    Url,
}

impl ContactField {
    /// Fields that may be left unbound, in prompting order.
    pub const OPTIONAL: [Self; 10] = [
        Self::LastName,
        Self::FormattedName,
        Self::AdditionalNames,
        Self::Prefix,
        Self::Suffix,
        Self::Email,
        Self::Address,
        Self::Org,
        Self::Title,
        Self::Url,
    ];

    /// Human-readable name used in prompts and errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::FormattedName => "Formatted name",
            Self::AdditionalNames => "Additional names",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Org => "Organization",
            Self::Title => "Title",
            Self::Url => "URL",
        }
    }
}

/// A phone column and the type tag its numbers get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneColumn {
    pub header: String,
    pub kind: PhoneType,
}

/// Bindings from contact fields to header names.
///
/// The first name is always bound. Phone columns keep their order, which is
/// the order of the TEL lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub first_name: String,
    pub optional: BTreeMap<ContactField, String>,
    pub phones: Vec<PhoneColumn>,
}

impl ColumnMapping {
    #[must_use]
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            optional: BTreeMap::new(),
            phones: Vec::new(),
        }
    }

    /// Binds `field` to `header`, replacing any earlier binding.
    #[must_use]
    pub fn with(mut self, field: ContactField, header: impl Into<String>) -> Self {
        let header = header.into();
        if field == ContactField::FirstName {
            self.first_name = header;
        } else {
            self.optional.insert(field, header);
        }
        self
    }

    #[must_use]
    pub fn with_phone(mut self, header: impl Into<String>, kind: PhoneType) -> Self {
        self.phones.push(PhoneColumn {
            header: header.into(),
            kind,
        });
        self
    }

    /// The header bound to `field`, if any.
    #[must_use]
    pub fn header(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => Some(&self.first_name),
            _ => self.optional.get(&field).map(String::as_str),
        }
    }

    /// ## Summary
    /// Builds a mapping from the `[mapping]` configuration section.
    ///
    /// Phone type tags go through [`PhoneType::normalize`]; a missing tag is
    /// `CELL`, and an unrecognized one is logged and replaced by `CELL`.
    #[must_use]
    pub fn from_config(config: &MappingConfig) -> Self {
        let bindings = [
            (ContactField::LastName, &config.last_name),
            (ContactField::FormattedName, &config.formatted_name),
            (ContactField::AdditionalNames, &config.additional_names),
            (ContactField::Prefix, &config.prefix),
            (ContactField::Suffix, &config.suffix),
            (ContactField::Email, &config.email),
            (ContactField::Address, &config.address),
            (ContactField::Org, &config.org),
            (ContactField::Title, &config.title),
            (ContactField::Url, &config.url),
        ];

        let mut mapping = Self::new(config.first_name.clone());
        for (field, header) in bindings {
            if let Some(header) = header {
                mapping = mapping.with(field, header.clone());
            }
        }

        for phone in &config.phones {
            let raw = phone.kind.as_deref().unwrap_or_default();
            let kind = PhoneType::normalize(raw);
            if !raw.is_empty() && raw.parse::<PhoneType>().is_err() {
                tracing::warn!(
                    column = %phone.column,
                    phone_type = raw,
                    "Unknown phone type, using CELL"
                );
            }
            mapping = mapping.with_phone(phone.column.clone(), kind);
        }

        mapping
    }

    /// ## Summary
    /// Builds a mapping from column indices into `headers`.
    ///
    /// Phone columns without a matching type get `CELL`.
    ///
    /// ## Errors
    /// Returns `ColumnIndexOutOfRange` if any index is not a column of
    /// `headers`.
    pub fn from_selection(headers: &[String], selection: &ColumnSelection) -> ServiceResult<Self> {
        let header_at = |label: &str, index: usize| -> ServiceResult<String> {
            headers
                .get(index)
                .cloned()
                .ok_or_else(|| out_of_range(label, index, headers.len()))
        };

        let mut mapping = Self::new(header_at(
            ContactField::FirstName.label(),
            selection.first_name,
        )?);
        for (&field, &index) in &selection.optional {
            mapping = mapping.with(field, header_at(field.label(), index)?);
        }
        for (i, &index) in selection.phones.iter().enumerate() {
            let kind = selection.phone_types.get(i).copied().unwrap_or_default();
            mapping = mapping.with_phone(header_at("Phone numbers", index)?, kind);
        }

        Ok(mapping)
    }
}

/// Column indices chosen for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    pub first_name: usize,
    pub optional: BTreeMap<ContactField, usize>,
    pub phones: Vec<usize>,
    pub phone_types: Vec<PhoneType>,
}

fn out_of_range(label: &str, index: usize, columns: usize) -> ServiceError {
    ServiceError::ColumnIndexOutOfRange {
        label: label.to_string(),
        index,
        max: columns.saturating_sub(1),
    }
}

/// ## Summary
/// Parses a required column index typed by the user.
///
/// ## Errors
/// Returns `InvalidColumnIndex` when the input is not a non-negative integer
/// and `ColumnIndexOutOfRange` when it is not below `columns`.
pub fn parse_index(label: &str, input: &str, columns: usize) -> ServiceResult<usize> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_err| ServiceError::InvalidColumnIndex {
            label: label.to_string(),
            input: input.to_string(),
        })?;

    if index >= columns {
        return Err(out_of_range(label, index, columns));
    }
    Ok(index)
}

/// ## Summary
/// Parses an optional column index; blank input means "skip".
///
/// ## Errors
/// Same as [`parse_index`] for non-blank input.
pub fn parse_optional_index(label: &str, input: &str, columns: usize) -> ServiceResult<Option<usize>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_index(label, input, columns).map(Some)
}

/// ## Summary
/// Parses a comma-separated list of column indices; blank input is an
/// empty list.
///
/// ## Errors
/// Same as [`parse_index`] for every item, blank items included.
pub fn parse_index_list(label: &str, input: &str, columns: usize) -> ServiceResult<Vec<usize>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|item| parse_index(label, item, columns))
        .collect()
}

/// Parses comma-separated phone type tags into exactly `count` types.
///
/// Never fails: see [`PhoneType::fill`].
#[must_use]
pub fn parse_phone_types(input: &str, count: usize) -> Vec<PhoneType> {
    let tags: Vec<&str> = if input.trim().is_empty() {
        Vec::new()
    } else {
        input.split(',').collect()
    };
    PhoneType::fill(&tags, count)
}
