//! Normalized contact record.

use tabcard_core::types::PhoneType;

use super::structured::StructuredName;

/// A telephone number and its type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub number: String,
    pub kind: PhoneType,
}

impl Phone {
    #[must_use]
    pub fn new(number: impl Into<String>, kind: PhoneType) -> Self {
        Self {
            number: number.into(),
            kind,
        }
    }
}

/// One contact, built from one source row.
///
/// Optional fields that are `None` or empty produce no output line.
/// `formatted_name` is `None` when the source has no formatted-name column;
/// the encoder then derives it from the first and last names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: Option<String>,
    pub formatted_name: Option<String>,
    pub additional_names: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub phones: Vec<Phone>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub org: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl ContactRecord {
    #[must_use]
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn with_formatted_name(mut self, formatted_name: impl Into<String>) -> Self {
        self.formatted_name = Some(formatted_name.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, number: impl Into<String>, kind: PhoneType) -> Self {
        self.phones.push(Phone::new(number, kind));
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// ## Summary
    /// Returns the text for the FN property.
    ///
    /// An explicit formatted name wins even when empty. Otherwise the first
    /// and last names are joined with a space and trimmed.
    #[must_use]
    pub fn resolved_formatted_name(&self) -> String {
        match &self.formatted_name {
            Some(name) => name.clone(),
            None => format!(
                "{} {}",
                self.first_name,
                self.last_name.as_deref().unwrap_or_default()
            )
            .trim()
            .to_string(),
        }
    }

    /// Name components for the N property; missing parts are empty.
    #[must_use]
    pub fn structured_name(&self) -> StructuredName<'_> {
        StructuredName {
            family: self.last_name.as_deref().unwrap_or_default(),
            given: &self.first_name,
            additional: self.additional_names.as_deref().unwrap_or_default(),
            prefix: self.prefix.as_deref().unwrap_or_default(),
            suffix: self.suffix.as_deref().unwrap_or_default(),
        }
    }

    /// Phones that will produce a TEL line.
    pub fn dialable_phones(&self) -> impl Iterator<Item = &Phone> {
        self.phones.iter().filter(|p| !p.number.is_empty())
    }
}

/// Returns the value only when it is present and non-empty.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_name_from_first_and_last() {
        let record = ContactRecord::new("Ada").with_last_name("Lovelace");
        assert_eq!(record.resolved_formatted_name(), "Ada Lovelace");
    }

    #[test]
    fn formatted_name_trims_missing_last() {
        let record = ContactRecord::new("Ada");
        assert_eq!(record.resolved_formatted_name(), "Ada");

        let record = ContactRecord::new("").with_last_name("Lovelace");
        assert_eq!(record.resolved_formatted_name(), "Lovelace");
    }

    #[test]
    fn explicit_formatted_name_wins_even_when_empty() {
        let record = ContactRecord::new("Ada")
            .with_last_name("Lovelace")
            .with_formatted_name("Countess of Lovelace");
        assert_eq!(record.resolved_formatted_name(), "Countess of Lovelace");

        let record = ContactRecord::new("Ada").with_formatted_name("");
        assert_eq!(record.resolved_formatted_name(), "");
    }

    #[test]
    fn dialable_phones_skip_empty_numbers() {
        let record = ContactRecord::new("Ada")
            .with_phone("", PhoneType::Cell)
            .with_phone("555-1234", PhoneType::Work);

        let phones: Vec<&Phone> = record.dialable_phones().collect();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].kind, PhoneType::Work);
    }

    #[test]
    fn present_treats_empty_as_absent() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some(&String::new())), None);
        assert_eq!(present(Some(&"x".to_string())), Some("x"));
    }
}
