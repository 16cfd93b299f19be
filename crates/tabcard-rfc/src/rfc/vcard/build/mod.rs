//! vCard serialization (RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use tabcard_rfc::rfc::vcard::{ContactRecord, encode_contact};
//!
//! let card = encode_contact(&ContactRecord::new("Jane").with_last_name("Doe"));
//! assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;Jane;;;\r\n"));
//! assert!(card.ends_with("END:VCARD\r\n\r\n"));
//! ```
//!
//! ## Features
//!
//! - Proper line folding at 75 octets (UTF-8 safe)
//! - Text escaping per RFC 2426
//! - Structured value serialization (N, ADR)
//! - Order-preserving batch encoding, sequential or on the rayon pool

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_optional, escape_text};
pub use fold::{fold_line, fold_line_to};
pub use serializer::{contact_lines, encode_batch, encode_batch_parallel, encode_contact};
