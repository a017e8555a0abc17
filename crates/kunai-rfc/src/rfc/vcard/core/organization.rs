//! Organization details (ORG, TITLE, ROLE).

use serde::{Deserialize, Serialize};

/// Organization information. A contact holds at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub name: String,
    pub department: String,
    /// Job title.
    pub title: String,
    pub role: String,
}

impl Organization {
    /// Creates an organization with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
