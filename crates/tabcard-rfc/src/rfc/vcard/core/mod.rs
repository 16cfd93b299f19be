//! vCard core types.
//!
//! - [`ContactRecord`] - One normalized contact, as produced by a row mapper
//! - [`Phone`] - Telephone number with its type tag
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property (family, given, etc.)
//! - [`Address`] - ADR property

mod contact;
mod structured;

pub(crate) use contact::present;
pub use contact::{ContactRecord, Phone};
pub use structured::{Address, StructuredName};
