//! ## Summary
//! Required-field checks run before serialization.
//!
//! Only three things are checked: a first or last name is present, and no
//! email or phone entry is empty. Addresses and URLs may be empty, and email
//! or URL syntax is never inspected.

use thiserror::Error;

use crate::rfc::vcard::core::Contact;

/// Why a contact cannot be serialized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("vcard must have at least first name or last name")]
    MissingName,

    #[error("email address cannot be empty (entry {index})")]
    EmptyEmail { index: usize },

    #[error("phone number cannot be empty (entry {index})")]
    EmptyPhone { index: usize },
}

/// ## Summary
/// Validates a contact, reporting the first problem found.
///
/// Checks run in order: name, emails, phones.
///
/// ## Errors
/// Returns the first [`ValidationError`] encountered.
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    if contact.name().is_missing() {
        return Err(ValidationError::MissingName);
    }

    if let Some(index) = contact.emails().iter().position(|e| e.address.is_empty()) {
        return Err(ValidationError::EmptyEmail { index });
    }

    if let Some(index) = contact.phones().iter().position(|p| p.number.is_empty()) {
        return Err(ValidationError::EmptyPhone { index });
    }

    Ok(())
}

impl Contact {
    /// Checks the required fields.
    ///
    /// ## Errors
    /// See [`validate_contact`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_contact(self)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
