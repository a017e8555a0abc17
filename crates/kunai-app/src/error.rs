use salvo::http::StatusCode;
use thiserror::Error;

use kunai_rfc::error::RfcError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    RfcError(#[from] RfcError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status returned to the client.
    ///
    /// Client mistakes (bad body, bad date, failed validation) are `400`;
    /// everything else is `500`.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::RfcError(
                RfcError::ValidationError(_)
                | RfcError::InvalidDate { .. }
                | RfcError::InputError(_),
            ) => StatusCode::BAD_REQUEST,
            Self::RfcError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client. Server-side failures are not
    /// described.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::RfcError(RfcError::ValidationError(e)) => format!("Invalid vCard: {e}"),
            _ if self.status_code() == StatusCode::BAD_REQUEST => self.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
