//! vCard contact model.
//!
//! - [`Contact`] - The aggregate that gets serialized
//! - [`Name`] - N / FN source data
//! - [`Email`], [`Phone`], [`Url`] - Repeated typed entries
//! - [`Address`] - ADR / LABEL source data
//! - [`Organization`] - ORG, TITLE and ROLE source data
//! - [`PhotoEncoding`] - How a stored photo string is emitted

mod address;
mod contact;
mod entry;
mod name;
mod organization;
mod photo;
mod version;

pub use address::{Address, AddressType};
pub use contact::Contact;
pub(crate) use contact::parse_date;
pub use entry::{Email, EmailType, Phone, PhoneType, Url, UrlType};
pub use name::Name;
pub use organization::Organization;
pub use photo::PhotoEncoding;
pub use version::VCardVersion;
