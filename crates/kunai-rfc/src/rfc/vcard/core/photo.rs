//! Photo value classification.

/// How a stored photo string is written.
///
/// The stored value has no structural type; it is classified by prefix at
/// serialization time. No further validation of the payload is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoEncoding<'a> {
    /// `http://` or `https://` URL, written as `PHOTO;VALUE=uri:`.
    Uri(&'a str),
    /// `data:` URI, written as `PHOTO;ENCODING=b:`.
    DataUri(&'a str),
    /// Anything else is taken to be raw base64 JPEG data.
    Base64(&'a str),
}

impl<'a> PhotoEncoding<'a> {
    /// Classifies a photo value by its prefix.
    #[must_use]
    pub fn sniff(value: &'a str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Uri(value)
        } else if value.starts_with("data:") {
            Self::DataUri(value)
        } else {
            Self::Base64(value)
        }
    }

    /// Returns the property name with its parameters.
    #[must_use]
    pub const fn property_prefix(self) -> &'static str {
        match self {
            Self::Uri(_) => "PHOTO;VALUE=uri",
            Self::DataUri(_) => "PHOTO;ENCODING=b",
            Self::Base64(_) => "PHOTO;ENCODING=b;TYPE=JPEG",
        }
    }

    /// Returns the value, written verbatim.
    #[must_use]
    pub const fn value(self) -> &'a str {
        match self {
            Self::Uri(v) | Self::DataUri(v) | Self::Base64(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_priority() {
        assert_eq!(
            PhotoEncoding::sniff("https://x/y.jpg"),
            PhotoEncoding::Uri("https://x/y.jpg")
        );
        assert_eq!(
            PhotoEncoding::sniff("http://x/y.jpg"),
            PhotoEncoding::Uri("http://x/y.jpg")
        );
        assert_eq!(
            PhotoEncoding::sniff("data:image/png;base64,AAAA"),
            PhotoEncoding::DataUri("data:image/png;base64,AAAA")
        );
        assert_eq!(PhotoEncoding::sniff("/9j/4AAQ"), PhotoEncoding::Base64("/9j/4AAQ"));
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert!(matches!(
            PhotoEncoding::sniff("HTTPS://x/y.jpg"),
            PhotoEncoding::Base64(_)
        ));
    }

    #[test]
    fn property_prefixes() {
        assert_eq!(
            PhotoEncoding::sniff("AAAA").property_prefix(),
            "PHOTO;ENCODING=b;TYPE=JPEG"
        );
        assert_eq!(
            PhotoEncoding::sniff("data:x").property_prefix(),
            "PHOTO;ENCODING=b"
        );
    }
}
