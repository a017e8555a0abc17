//! Postal address (ADR / LABEL source data).

use std::fmt;
use std::str::FromStr;

use kunai_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::rfc::vcard::build::escape_text;

/// Address type (TYPE parameter of ADR and LABEL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AddressType {
    Work,
    Home,
    Postal,
}

impl AddressType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Postal => "POSTAL",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WORK" => Ok(Self::Work),
            "HOME" => Ok(Self::Home),
            "POSTAL" => Ok(Self::Postal),
            other => Err(CoreError::InvalidInput(format!(
                "unknown address type: {other}"
            ))),
        }
    }
}

/// A postal address.
///
/// The post office box component of ADR is never populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    /// Apartment, suite, etc.
    pub extended: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(rename = "type")]
    pub address_type: Option<AddressType>,
    pub preferred: bool,
}

impl Address {
    /// Creates an untyped address from its common parts.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extended(mut self, extended: impl Into<String>) -> Self {
        self.extended = extended.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, address_type: AddressType) -> Self {
        self.address_type = Some(address_type);
        self
    }

    #[must_use]
    pub fn with_preferred(mut self, preferred: bool) -> Self {
        self.preferred = preferred;
        self
    }

    /// Returns whether a LABEL line should accompany the ADR line.
    ///
    /// The extended part alone does not count.
    #[must_use]
    pub fn has_label(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .any(|part| !part.is_empty())
    }

    /// Returns the escaped ADR value:
    /// `;extended;street;city;state;postal code;country`.
    #[must_use]
    pub fn structured_address(&self) -> String {
        let mut parts = vec![String::new()];
        parts.extend(
            [
                &self.extended,
                &self.street,
                &self.city,
                &self.state,
                &self.postal_code,
                &self.country,
            ]
            .into_iter()
            .map(|part| escape_text(part)),
        );
        parts.join(";")
    }

    /// Returns a human-readable, LF-separated rendering.
    ///
    /// City and state share a line as "City, State".
    #[must_use]
    pub fn formatted_address(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if !self.street.is_empty() {
            lines.push(self.street.clone());
        }
        if !self.extended.is_empty() {
            lines.push(self.extended.clone());
        }

        let locality: Vec<&str> = [self.city.as_str(), self.state.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if !locality.is_empty() {
            lines.push(locality.join(", "));
        }

        if !self.postal_code.is_empty() {
            lines.push(self.postal_code.clone());
        }
        if !self.country.is_empty() {
            lines.push(self.country.clone());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new("123 Main St", "Anytown", "CA", "12345", "USA").with_extended("Suite 4")
    }

    #[test]
    fn structured_address_order() {
        assert_eq!(
            sample().structured_address(),
            ";Suite 4;123 Main St;Anytown;CA;12345;USA"
        );
    }

    #[test]
    fn structured_address_escapes() {
        let addr = Address::new("1, Rue; Haute", "", "", "", "");
        assert_eq!(addr.structured_address(), r";;1\, Rue\; Haute;;;;");
    }

    #[test]
    fn formatted_address_lines() {
        assert_eq!(
            sample().formatted_address(),
            "123 Main St\nSuite 4\nAnytown, CA\n12345\nUSA"
        );
        let city_only = Address::new("", "Paris", "", "", "France");
        assert_eq!(city_only.formatted_address(), "Paris\nFrance");
    }

    #[test]
    fn label_requires_more_than_extended() {
        let only_extended = Address::default().with_extended("Apt 1");
        assert!(!only_extended.has_label());
        assert!(sample().has_label());
    }

    #[test]
    fn parse_address_type() {
        assert_eq!("postal".parse::<AddressType>().ok(), Some(AddressType::Postal));
        assert!("office".parse::<AddressType>().is_err());
    }
}
