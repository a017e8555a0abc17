//! Batch contact input.
//!
//! [`ContactInput`] is the plain-data shape the HTTP layer deserializes
//! request bodies into. Dates arrive as `YYYY-MM-DD` strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RfcResult;
use crate::rfc::vcard::core::parse_date;
use crate::rfc::vcard::core::{
    Address, Contact, Email, Name, Organization, Phone, Url, VCardVersion,
};

/// A complete contact description applied in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInput {
    /// Overrides the contact's version when set.
    pub version: Option<VCardVersion>,
    pub name: Name,
    pub emails: Vec<Email>,
    pub phones: Vec<Phone>,
    pub addresses: Vec<Address>,
    pub organization: Organization,
    pub urls: Vec<Url>,
    pub photo: Option<String>,
    pub note: Option<String>,
    pub birthday: Option<String>,
    pub anniversary: Option<String>,
    pub custom_properties: BTreeMap<String, String>,
}

impl ContactInput {
    /// Parses input from JSON.
    ///
    /// ## Errors
    /// Returns `RfcError::InputError` if the JSON does not match.
    pub fn from_json(json: &str) -> RfcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a new contact from this input.
    ///
    /// ## Errors
    /// See [`Contact::add_contact`].
    pub fn into_contact(self) -> RfcResult<Contact> {
        let mut contact = Contact::new();
        contact.add_contact(self)?;
        Ok(contact)
    }
}

impl Contact {
    /// Applies a batch input.
    ///
    /// ## Summary
    /// The name is replaced, sequences are appended, and the organization is
    /// replaced only when it carries a name. Photo, note, dates and version
    /// are replaced only when present. Custom properties are merged.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidDate` if a date string is malformed. Dates
    /// are checked first, so a failed call leaves the contact unchanged.
    pub fn add_contact(&mut self, input: ContactInput) -> RfcResult<&mut Self> {
        let birthday = input.birthday.as_deref().map(parse_date).transpose()?;
        let anniversary = input.anniversary.as_deref().map(parse_date).transpose()?;

        if let Some(version) = input.version {
            self.set_version(version);
        }

        self.set_name(input.name)
            .add_emails(input.emails)
            .add_phones(input.phones)
            .add_addresses(input.addresses)
            .add_urls(input.urls)
            .add_custom_properties(input.custom_properties);

        if !input.organization.name.is_empty() {
            self.set_organization(input.organization);
        }
        if let Some(photo) = input.photo.filter(|p| !p.is_empty()) {
            self.add_photo(photo);
        }
        if let Some(note) = input.note.filter(|n| !n.is_empty()) {
            self.add_note(note);
        }
        if let Some(birthday) = birthday {
            self.add_birthday(birthday);
        }
        if let Some(anniversary) = anniversary {
            self.add_anniversary(anniversary);
        }

        Ok(self)
    }
}
