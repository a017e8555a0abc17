//! RFC-defined formats.

pub mod vcard;
