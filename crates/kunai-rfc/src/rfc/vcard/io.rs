//! File output and photo loading.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::SerializeOptions;
use crate::rfc::vcard::core::Contact;

/// Guesses a photo MIME type from the file extension, falling back to JPEG.
fn photo_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

impl Contact {
    /// Serializes the contact and writes it to `path`, replacing any existing
    /// file.
    ///
    /// ## Errors
    /// Returns the validation error if the contact is invalid (nothing is
    /// written), or `RfcError::IoError` if the write fails.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> RfcResult<()> {
        self.write_to_file_with(path, &SerializeOptions::default())
    }

    /// Like [`Contact::write_to_file`] with explicit serialization options.
    ///
    /// ## Errors
    /// See [`Contact::write_to_file`].
    pub fn write_to_file_with(
        &self,
        path: impl AsRef<Path>,
        options: &SerializeOptions,
    ) -> RfcResult<()> {
        let path = path.as_ref();
        let content = self.serialize_with(options)?;

        fs::write(path, content.as_bytes()).map_err(|source| RfcError::IoError {
            context: format!("writing vCard to {}", path.display()),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote vCard file");
        Ok(())
    }

    /// Loads an image file and stores it as a base64 `data:` URI photo.
    ///
    /// ## Errors
    /// Returns `RfcError::IoError` if the file cannot be read. The contact is
    /// left unchanged in that case.
    pub fn add_photo_from_file(&mut self, path: impl AsRef<Path>) -> RfcResult<&mut Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| RfcError::IoError {
            context: format!("reading photo from {}", path.display()),
            source,
        })?;

        let encoded = STANDARD.encode(&data);
        tracing::debug!(path = %path.display(), bytes = data.len(), "Loaded photo");

        Ok(self.add_photo(format!(
            "data:{};base64,{encoded}",
            photo_mime_type(path)
        )))
    }
}
