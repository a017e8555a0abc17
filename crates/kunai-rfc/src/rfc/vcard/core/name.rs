//! Structured name (N / FN source data).

use serde::{Deserialize, Serialize};

use crate::rfc::vcard::build::escape_text;

/// Structured name information.
///
/// All parts are plain text; nothing is normalized beyond escaping at
/// serialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Name {
    /// Family name.
    pub last: String,
    /// Given name.
    pub first: String,
    /// Additional names.
    pub middle: String,
    /// Honorific prefix (Mr., Dr., ...).
    pub prefix: String,
    /// Honorific suffix (Jr., PhD, ...).
    pub suffix: String,
}

impl Name {
    /// Creates a name from first and last parts.
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            ..Self::default()
        }
    }

    /// Returns whether neither first nor last name is set.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }

    /// Returns prefix, first, middle, last and suffix joined by spaces,
    /// skipping empty parts.
    #[must_use]
    pub fn formatted_name(&self) -> String {
        [
            &self.prefix,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Returns the escaped N value: `last;first;middle;prefix;suffix`.
    #[must_use]
    pub fn structured_name(&self) -> String {
        [
            &self.last,
            &self.first,
            &self.middle,
            &self.prefix,
            &self.suffix,
        ]
        .into_iter()
        .map(|part| escape_text(part))
        .collect::<Vec<_>>()
        .join(";")
    }
}
