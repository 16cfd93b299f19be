//! Literal vCard 3.0 (RFC 2426) framing shared by the encoder and its tests.

pub const VCARD_VERSION: &str = "3.0";

pub const BEGIN_LINE: &str = "BEGIN:VCARD";
pub const END_LINE: &str = "END:VCARD";
pub const VERSION_LINE: &str = const_str::concat!("VERSION:", VCARD_VERSION);

/// Line terminator; bare LF never appears in output.
pub const CRLF: &str = "\r\n";

/// Separator between a folded segment and its continuation.
pub const FOLD_CONTINUATION: &str = const_str::concat!(CRLF, " ");

/// Maximum physical line length in octets.
pub const MAX_LINE_OCTETS: usize = 75;
