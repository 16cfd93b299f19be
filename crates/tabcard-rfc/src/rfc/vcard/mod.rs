//! vCard implementation (RFC 2426).
//!
//! This module turns normalized contact records into vCard 3.0 text.
//!
//! ## Overview
//!
//! Every [`ContactRecord`] becomes one `BEGIN:VCARD` .. `END:VCARD` block.
//! Values are escaped, each property line is folded to 75 octets, lines end
//! in CRLF, and each block is followed by a blank line.
//!
//! ## Usage
//!
//! ```rust
//! use tabcard_core::types::PhoneType;
//! use tabcard_rfc::rfc::vcard::{ContactRecord, encode_batch};
//!
//! let ada = ContactRecord::new("Ada")
//!     .with_last_name("Lovelace")
//!     .with_phone("555-1234", PhoneType::Work);
//! let grace = ContactRecord::new("Grace").with_last_name("Hopper");
//!
//! let output = encode_batch(&[ada, grace]);
//! assert!(output.contains("FN:Ada Lovelace\r\n"));
//! assert!(output.contains("TEL;TYPE=WORK,VOICE:555-1234\r\n"));
//! assert_eq!(output.matches("BEGIN:VCARD").count(), 2);
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Contact record and structured value types
//! - [`build`] - Escaping, folding and encoding

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{encode_batch, encode_batch_parallel, encode_contact};
pub use core::{Address, ContactRecord, Phone, StructuredName};
