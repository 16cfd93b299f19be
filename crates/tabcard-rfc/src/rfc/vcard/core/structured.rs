//! Structured vCard types (RFC 2426 §3.1.2, §3.2.1).
//!
//! These hold raw (unescaped) component text; the serializer escapes each
//! component and joins them with `;`.

/// Structured name (N property).
///
/// Every component is always written, empty or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredName<'a> {
    /// Family name (surname).
    pub family: &'a str,
    /// Given name (first name).
    pub given: &'a str,
    /// Additional names (middle names).
    pub additional: &'a str,
    /// Honorific prefix (e.g., "Dr.").
    pub prefix: &'a str,
    /// Honorific suffix (e.g., "Jr.").
    pub suffix: &'a str,
}

impl<'a> StructuredName<'a> {
    /// Components in wire order.
    #[must_use]
    pub const fn components(&self) -> [&'a str; 5] {
        [
            self.family,
            self.given,
            self.additional,
            self.prefix,
            self.suffix,
        ]
    }
}

/// Delivery address (ADR property).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Address<'a> {
    /// Post office box.
    pub po_box: &'a str,
    /// Extended address (e.g., apartment or suite number).
    pub extended: &'a str,
    /// Street address.
    pub street: &'a str,
    /// Locality (city).
    pub locality: &'a str,
    /// Region (state or province).
    pub region: &'a str,
    /// Postal code.
    pub postal_code: &'a str,
    /// Country name.
    pub country: &'a str,
}

impl<'a> Address<'a> {
    /// Address whose only populated component is the street.
    ///
    /// Spreadsheet sources usually carry a whole address in one cell; it is
    /// placed in the street slot.
    #[must_use]
    pub fn street_only(street: &'a str) -> Self {
        Self {
            street,
            ..Self::default()
        }
    }

    /// Components in wire order.
    #[must_use]
    pub const fn components(&self) -> [&'a str; 7] {
        [
            self.po_box,
            self.extended,
            self.street,
            self.locality,
            self.region,
            self.postal_code,
            self.country,
        ]
    }
}
