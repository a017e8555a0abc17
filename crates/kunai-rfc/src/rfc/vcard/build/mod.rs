//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{Contact, LineEnding, SerializeOptions, serialize_with};
//!
//! let mut card = Contact::new();
//! card.add_name("John", "Doe");
//!
//! let options = SerializeOptions::new(LineEnding::Crlf);
//! let output = serialize_with(&card, &options).unwrap();
//! assert!(output.starts_with("BEGIN:VCARD\r\n"));
//! ```
//!
//! ## Features
//!
//! - Fixed property order
//! - Text escaping with an exact inverse ([`unescape_text`])
//! - Line folding at 75 characters (counted in code points)
//! - TYPE / PREF parameter formatting

mod escape;
mod fold;
mod options;
mod params;
mod serializer;

pub use escape::{escape_text, unescape_text};
pub use fold::{MAX_LINE_CHARS, fold_line};
pub use options::{LineEnding, SerializeOptions};
pub use params::{entry_parameters, format_type_parameter};
pub use serializer::{serialize, serialize_with};
