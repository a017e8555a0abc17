use thiserror::Error;

use crate::rfc::vcard::validate::ValidationError;

/// vCard building, validation, and output errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("vCard validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("I/O error while {context}: {source}")]
    IoError {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date {value:?}, expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid contact input: {0}")]
    InputError(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
