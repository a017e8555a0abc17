//! vCard generation (RFC 2426 / RFC 6350).
//!
//! This module builds an in-memory [`Contact`] and renders it as vCard 3.0
//! or 4.0 text.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{Contact, EmailType};
//!
//! let mut card = Contact::new();
//! card.add_name("John", "Doe")
//!     .add_email("john.doe@example.com")
//!     .add_email_typed("john@work.example.com", EmailType::Work)
//!     .add_phone("+1234567890");
//!
//! let output = card.serialize().unwrap();
//! assert!(output.contains("N:Doe;John;;;"));
//! assert!(output.contains("FN:John Doe"));
//! ```
//!
//! ## Output
//!
//! Properties are always written in a fixed order (N, FN, EMAIL, TEL,
//! ADR/LABEL, ORG, TITLE, ROLE, URL, PHOTO, NOTE, BDAY, ANNIVERSARY, X-).
//! Free-text values are escaped and every line longer than 75 characters is
//! folded. Lines end with LF unless [`LineEnding::Crlf`] is selected.
//!
//! ## Thread safety
//!
//! A [`Contact`] is plain owned data. Mutation needs `&mut`, so sharing one
//! across threads while building it requires the caller's own locking.
//!
//! ## Submodules
//!
//! - [`core`] - Contact model types
//! - [`build`] - Escaping, folding, and serialization
//! - [`validate`] - Required-field checks
//! - [`input`] - Batch input accepted by [`Contact::add_contact`]
//! - [`io`] - File output and photo loading

pub mod build;
pub mod core;
pub mod input;
pub mod io;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{LineEnding, SerializeOptions, serialize, serialize_with};
pub use self::core::{
    Address, AddressType, Contact, Email, EmailType, Name, Organization, Phone, PhoneType,
    PhotoEncoding, Url, UrlType, VCardVersion,
};
pub use input::ContactInput;
pub use validate::ValidationError;
