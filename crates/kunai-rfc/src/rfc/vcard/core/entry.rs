//! Repeated typed entries: EMAIL, TEL and URL.

use std::fmt;
use std::str::FromStr;

use kunai_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// Email address type (TYPE parameter of EMAIL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailType {
    /// Internet address. Written when no type is set.
    Internet,
    Work,
    Home,
    Mobile,
}

impl EmailType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internet => "INTERNET",
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Mobile => "MOBILE",
        }
    }
}

impl FromStr for EmailType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INTERNET" => Ok(Self::Internet),
            "WORK" => Ok(Self::Work),
            "HOME" => Ok(Self::Home),
            "MOBILE" => Ok(Self::Mobile),
            other => Err(CoreError::InvalidInput(format!("unknown email type: {other}"))),
        }
    }
}

/// Phone number type (TYPE parameter of TEL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneType {
    /// Voice line. Written when no type is set.
    Voice,
    Work,
    Home,
    Mobile,
    Fax,
}

impl PhoneType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Voice => "VOICE",
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Mobile => "MOBILE",
            Self::Fax => "FAX",
        }
    }
}

impl FromStr for PhoneType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VOICE" => Ok(Self::Voice),
            "WORK" => Ok(Self::Work),
            "HOME" => Ok(Self::Home),
            "MOBILE" => Ok(Self::Mobile),
            "FAX" => Ok(Self::Fax),
            other => Err(CoreError::InvalidInput(format!("unknown phone type: {other}"))),
        }
    }
}

/// URL type (TYPE parameter of URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrlType {
    Work,
    Home,
    Social,
}

impl UrlType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Social => "SOCIAL",
        }
    }
}

impl FromStr for UrlType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WORK" => Ok(Self::Work),
            "HOME" => Ok(Self::Home),
            "SOCIAL" => Ok(Self::Social),
            other => Err(CoreError::InvalidInput(format!("unknown URL type: {other}"))),
        }
    }
}

macro_rules! impl_display_token {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_token!(EmailType, PhoneType, UrlType);

/// An email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    /// `None` is written as `INTERNET`.
    #[serde(rename = "type", default)]
    pub email_type: Option<EmailType>,
    #[serde(default)]
    pub preferred: bool,
}

impl Email {
    /// Creates an untyped, non-preferred email entry.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            email_type: None,
            preferred: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, email_type: EmailType) -> Self {
        self.email_type = Some(email_type);
        self
    }

    #[must_use]
    pub fn with_preferred(mut self, preferred: bool) -> Self {
        self.preferred = preferred;
        self
    }
}

/// A phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    /// `None` is written as `VOICE`.
    #[serde(rename = "type", default)]
    pub phone_type: Option<PhoneType>,
    #[serde(default)]
    pub preferred: bool,
}

impl Phone {
    /// Creates an untyped, non-preferred phone entry.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            phone_type: None,
            preferred: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, phone_type: PhoneType) -> Self {
        self.phone_type = Some(phone_type);
        self
    }

    #[must_use]
    pub fn with_preferred(mut self, preferred: bool) -> Self {
        self.preferred = preferred;
        self
    }
}

/// A website or other URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub address: String,
    /// `None` omits the TYPE parameter entirely.
    #[serde(rename = "type", default)]
    pub url_type: Option<UrlType>,
    #[serde(default)]
    pub preferred: bool,
}

impl Url {
    /// Creates an untyped, non-preferred URL entry.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            url_type: None,
            preferred: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, url_type: UrlType) -> Self {
        self.url_type = Some(url_type);
        self
    }

    #[must_use]
    pub fn with_preferred(mut self, preferred: bool) -> Self {
        self.preferred = preferred;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tokens() {
        assert_eq!(EmailType::Internet.as_str(), "INTERNET");
        assert_eq!(PhoneType::Fax.to_string(), "FAX");
        assert_eq!(UrlType::Social.as_str(), "SOCIAL");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("home".parse::<EmailType>().ok(), Some(EmailType::Home));
        assert_eq!("Mobile".parse::<PhoneType>().ok(), Some(PhoneType::Mobile));
        assert_eq!(" social ".parse::<UrlType>().ok(), Some(UrlType::Social));
        assert!("pager".parse::<PhoneType>().is_err());
    }

    #[test]
    fn entry_builders() {
        let email = Email::new("a@example.com")
            .with_type(EmailType::Work)
            .with_preferred(true);
        assert_eq!(email.email_type, Some(EmailType::Work));
        assert!(email.preferred);

        let url = Url::new("https://example.com");
        assert_eq!(url.url_type, None);
        assert!(!url.preferred);
    }

    #[test]
    fn email_deserializes_with_defaults() {
        let email: Email =
            serde_json::from_str(r#"{"address":"a@example.com"}"#).expect("valid email json");
        assert_eq!(email, Email::new("a@example.com"));

        let phone: Phone = serde_json::from_str(r#"{"number":"+1","type":"FAX","preferred":true}"#)
            .expect("valid phone json");
        assert_eq!(phone.phone_type, Some(PhoneType::Fax));
        assert!(phone.preferred);
    }
}
