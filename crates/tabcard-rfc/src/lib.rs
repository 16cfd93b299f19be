//! vCard 3.0 (RFC 2426) encoding of contact records.

pub mod rfc;
