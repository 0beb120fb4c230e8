use crate::locations::LocationName;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUNS: Regex =
        Regex::new(r"[^\p{L}\p{M}\p{N}]+").expect("NON_ALPHANUMERIC_RUNS to have been built successfully");
}

/// Lowercases `name` and composes it to NFC, then collapses every run of
/// characters that are not letters, marks or digits into a single `-` and
/// trims hyphens from both ends.
///
/// ```
/// use entities::locations::slugify;
///
/// assert_eq!(slugify("  New York, NY "), "new-york-ny");
/// assert_eq!(slugify(&slugify("New York")), "new-york");
/// ```
pub fn slugify(name: &str) -> String {
    let normalized = name.to_lowercase().nfc().collect::<String>();
    NON_ALPHANUMERIC_RUNS
        .replace_all(&normalized, "-")
        .trim_matches('-')
        .to_owned()
}

/// Canonical identifier of a location. It is derived once from the name when
/// the location is created and read back verbatim afterwards.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocationSlug(String);

impl LocationSlug {
    pub fn from_stored(value: String) -> Self {
        LocationSlug(value)
    }
}

impl From<&LocationName> for LocationSlug {
    fn from(name: &LocationName) -> Self {
        LocationSlug(slugify(name.as_ref()))
    }
}

impl AsRef<str> for LocationSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocationSlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Display for LocationSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
