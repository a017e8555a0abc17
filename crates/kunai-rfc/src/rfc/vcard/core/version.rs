//! vCard version.

use std::fmt;
use std::str::FromStr;

use kunai_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    #[default]
    #[serde(rename = "3.0")]
    V3,
    /// vCard 4.0 (RFC 6350).
    #[serde(rename = "4.0")]
    V4,
}

impl VCardVersion {
    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }

    /// Returns whether ANNIVERSARY may be written for this version.
    #[must_use]
    pub const fn supports_anniversary(self) -> bool {
        matches!(self, Self::V4)
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VCardVersion {
    type Err = CoreError;

    /// Accepts "3.0" / "4.0" and the bare major numbers, which is what
    /// numeric environment parsing leaves behind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" | "3" => Ok(Self::V3),
            "4.0" | "4" => Ok(Self::V4),
            other => Err(CoreError::InvalidInput(format!(
                "unsupported vCard version: {other}"
            ))),
        }
    }
}
