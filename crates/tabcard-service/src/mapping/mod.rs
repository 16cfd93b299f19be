//! Column mapping: which header feeds which contact field.
//!
//! - [`ColumnMapping`] - validated bindings from logical fields to header names
//! - [`ColumnSelection`] - the same bindings as column indices, as typed by a user
//! - [`ResolvedMapping`] - bindings resolved against a header row; maps rows
//!   to [`tabcard_rfc::rfc::vcard::ContactRecord`]s

mod column;
mod row;

pub use column::{
    ColumnMapping, ColumnSelection, ContactField, PhoneColumn, parse_index, parse_index_list,
    parse_optional_index, parse_phone_types,
};
pub use row::{ResolvedMapping, normalize_line_endings};
