//! Serialization options.

use std::str::FromStr;

use kunai_core::config::VCardConfig;
use kunai_core::error::CoreError;

use crate::error::RfcResult;

/// Line terminator used for every line and fold break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`.
    #[default]
    Lf,
    /// `\r\n`, as RFC 6350 §3.2 prescribes.
    Crlf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            other => Err(CoreError::ConfigError(format!(
                "unknown line ending {other:?}, expected \"lf\" or \"crlf\""
            ))),
        }
    }
}

/// Options for [`serialize_with`](super::serialize_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    pub line_ending: LineEnding,
}

impl SerializeOptions {
    #[must_use]
    pub const fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    /// Builds options from the `vcard` configuration section.
    ///
    /// ## Errors
    /// Returns a configuration error if `line_ending` is not recognised.
    pub fn from_config(config: &VCardConfig) -> RfcResult<Self> {
        Ok(Self {
            line_ending: config.line_ending.parse()?,
        })
    }
}
