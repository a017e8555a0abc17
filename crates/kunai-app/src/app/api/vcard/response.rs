//! Shared rendering and response helpers for the vCard handlers.

use salvo::Response;
use salvo::http::HeaderValue;
use salvo::writing::Json;
use serde::Serialize;
use sha2::{Digest, Sha256};

use kunai_core::config::VCardConfig;
use kunai_core::constants::{VCARD_CONTENT_TYPE, VCARD_FILE_EXTENSION};
use kunai_rfc::rfc::vcard::{Contact, ContactInput, SerializeOptions, VCardVersion};

use crate::error::{AppError, AppResult};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Builds a contact from request input.
///
/// The contact starts at the configured default version; an explicit
/// `version` in the input overrides it.
///
/// ## Errors
/// Returns an error if the configured version is unknown or a date in the
/// input is malformed.
pub fn build_contact(input: ContactInput, config: &VCardConfig) -> AppResult<Contact> {
    let version: VCardVersion = config.default_version.parse()?;
    let mut contact = Contact::with_version(version);
    contact.add_contact(input)?;
    Ok(contact)
}

/// ## Summary
/// Serializes a contact with the configured line ending.
///
/// ## Errors
/// Returns the validation error for an invalid contact, or a configuration
/// error if the line ending setting is unknown.
pub fn render_contact(contact: &Contact, config: &VCardConfig) -> AppResult<String> {
    let options = SerializeOptions::from_config(config)?;
    Ok(contact.serialize_with(&options)?)
}

/// ## Summary
/// Generates an `ETag` from the rendered card.
///
/// The `ETag` is the hex-encoded SHA256 hash of the content, wrapped in quotes.
#[must_use]
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let hash = hasher.finalize();
    format!("\"{}\"", hex::encode(hash))
}

/// ## Summary
/// Derives the download filename from the contact's formatted name.
///
/// The name is lower-cased with whitespace turned into hyphens. Characters
/// that would break the `Content-Disposition` header are dropped. Falls back
/// to the configured default when nothing is left.
#[must_use]
pub fn vcard_filename(contact: &Contact, config: &VCardConfig) -> String {
    let stem: String = contact
        .formatted_name()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| !c.is_control() && !matches!(*c, '"' | '\\' | '/'))
        .collect();

    let filename = if stem.is_empty() {
        config.default_filename.clone()
    } else {
        stem
    };

    if filename.ends_with(VCARD_FILE_EXTENSION) {
        filename
    } else {
        format!("{filename}{VCARD_FILE_EXTENSION}")
    }
}

/// ## Summary
/// Writes a rendered card as a file download.
///
/// Sets `Content-Type`, `Content-Disposition` and `ETag`, then the body.
pub fn write_vcard(res: &mut Response, content: String, filename: &str, config: &VCardConfig) {
    let etag = generate_etag(content.as_bytes());
    let disposition = format!("{}; filename=\"{filename}\"", config.content_disposition);

    if res
        .add_header(
            "Content-Type",
            HeaderValue::from_static(VCARD_CONTENT_TYPE),
            true,
        )
        .is_err()
    {
        tracing::warn!("Failed to set Content-Type header");
    }

    match HeaderValue::from_str(&disposition) {
        Ok(value) => {
            if res.add_header("Content-Disposition", value, true).is_err() {
                tracing::warn!("Failed to set Content-Disposition header");
            }
        }
        Err(e) => tracing::warn!(error = %e, filename, "Invalid Content-Disposition value"),
    }

    if let Ok(etag_value) = HeaderValue::from_str(&etag)
        && res.add_header("ETag", etag_value, true).is_err()
    {
        tracing::warn!("Failed to set ETag header");
    }

    if let Err(e) = res.write_body(content) {
        tracing::error!(error = %e, "Failed to write vCard body");
    }
}

/// ## Summary
/// Renders a contact and writes it as a download, or writes the error.
pub fn respond_with_vcard(res: &mut Response, contact: &Contact, config: &VCardConfig) {
    match render_contact(contact, config) {
        Ok(content) => {
            let filename = vcard_filename(contact, config);
            tracing::debug!(filename = %filename, bytes = content.len(), "Rendered vCard");
            write_vcard(res, content, &filename, config);
        }
        Err(e) => write_error(res, &e),
    }
}

/// ## Summary
/// Writes an error as a JSON body with the matching status code.
pub fn write_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "vCard request failed");
    } else {
        tracing::warn!(error = %err, "Rejected vCard request");
    }

    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: err.public_message(),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VCardConfig {
        VCardConfig::default()
    }

    fn named(first: &str, last: &str) -> Contact {
        let mut contact = Contact::new();
        contact.add_name(first, last);
        contact
    }

    #[test]
    fn filename_from_name() {
        assert_eq!(vcard_filename(&named("John", "Doe"), &config()), "john-doe.vcf");
    }

    #[test]
    fn filename_drops_header_breaking_characters() {
        let mut contact = named("Jo\"hn", "D/oe");
        contact.add_suffix("Jr.");
        assert_eq!(vcard_filename(&contact, &config()), "john-doe-jr..vcf");
    }

    #[test]
    fn filename_falls_back_to_default() {
        assert_eq!(vcard_filename(&Contact::new(), &config()), "contact.vcf");

        let custom = VCardConfig {
            default_filename: "card".to_string(),
            ..VCardConfig::default()
        };
        assert_eq!(vcard_filename(&Contact::new(), &custom), "card.vcf");
    }

    #[test]
    fn etag_is_quoted_sha256() {
        let etag = generate_etag(b"hello");
        assert_eq!(
            etag,
            "\"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\""
        );
    }

    #[test]
    fn build_contact_uses_default_version() {
        let v4 = VCardConfig {
            default_version: "4.0".to_string(),
            ..VCardConfig::default()
        };

        let contact = build_contact(ContactInput::default(), &v4).expect("valid input");
        assert_eq!(contact.version(), VCardVersion::V4);

        let input = ContactInput {
            version: Some(VCardVersion::V3),
            ..ContactInput::default()
        };
        let contact = build_contact(input, &v4).expect("valid input");
        assert_eq!(contact.version(), VCardVersion::V3);
    }

    #[test]
    fn render_respects_line_ending() {
        let crlf = VCardConfig {
            line_ending: "crlf".to_string(),
            ..VCardConfig::default()
        };

        let output = render_contact(&named("John", "Doe"), &crlf).expect("valid contact");
        assert!(output.ends_with("END:VCARD\r\n"));
    }
}
