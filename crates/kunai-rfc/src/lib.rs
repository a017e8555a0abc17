//! vCard encoding for the kunai workspace.
//!
//! See [`rfc::vcard`] for the contact model and the RFC 2426 / RFC 6350
//! serializer.

pub mod error;
pub mod rfc;
