use std::str::FromStr;

use crate::error::CoreError;

/// Telephone type tag carried on a `TEL` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PhoneType {
    #[default]
    Cell,
    Work,
    Home,
    Voice,
}

impl PhoneType {
    pub const ALL: [Self; 4] = [Self::Cell, Self::Work, Self::Home, Self::Voice];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cell => "CELL",
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Voice => "VOICE",
        }
    }

    /// ## Summary
    /// Maps a raw tag onto a phone type, never failing.
    ///
    /// Matching ignores case and surrounding whitespace. Anything that is not
    /// one of `CELL`, `WORK`, `HOME` or `VOICE` (the empty string included)
    /// becomes [`PhoneType::Cell`]. Use [`str::parse`] when unknown tags must
    /// be rejected instead.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// ## Summary
    /// Builds exactly `count` phone types from a list of raw tags.
    ///
    /// Extra tags are discarded, missing ones are filled with
    /// [`PhoneType::Cell`], and every tag goes through [`PhoneType::normalize`].
    #[must_use]
    pub fn fill<S: AsRef<str>>(raw: &[S], count: usize) -> Vec<Self> {
        (0..count)
            .map(|i| raw.get(i).map_or(Self::Cell, |t| Self::normalize(t.as_ref())))
            .collect()
    }
}

impl FromStr for PhoneType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown phone type `{tag}`")))
    }
}

impl std::fmt::Display for PhoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
