//! The contact aggregate and its fluent setters.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::address::{Address, AddressType};
use super::entry::{Email, EmailType, Phone, PhoneType, Url, UrlType};
use super::name::Name;
use super::organization::Organization;
use super::version::VCardVersion;
use crate::error::{RfcError, RfcResult};

/// Date format accepted by the string date setters.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contact that can be rendered as a vCard.
///
/// ## Summary
/// Setters mutate in place and return `&mut Self` so calls can be chained.
/// Sequences keep insertion order, which is also the output order; nothing is
/// de-duplicated. `Clone` produces a fully independent copy.
///
/// Custom properties are kept sorted by name, so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    version: VCardVersion,
    name: Name,
    emails: Vec<Email>,
    phones: Vec<Phone>,
    addresses: Vec<Address>,
    organization: Organization,
    urls: Vec<Url>,
    photo: String,
    note: String,
    birthday: Option<NaiveDate>,
    anniversary: Option<NaiveDate>,
    custom_properties: BTreeMap<String, String>,
}

pub(crate) fn parse_date(value: &str) -> RfcResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        RfcError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

impl Contact {
    /// Creates an empty vCard 3.0 contact.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty contact with the given version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn set_version(&mut self, version: VCardVersion) -> &mut Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn version(&self) -> VCardVersion {
        self.version
    }

    // ------------------------------------------------------------------
    // Name
    // ------------------------------------------------------------------

    /// Sets first and last name.
    pub fn add_name(&mut self, first: impl Into<String>, last: impl Into<String>) -> &mut Self {
        self.name.first = first.into();
        self.name.last = last.into();
        self
    }

    pub fn add_middle_name(&mut self, middle: impl Into<String>) -> &mut Self {
        self.name.middle = middle.into();
        self
    }

    pub fn add_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.name.prefix = prefix.into();
        self
    }

    pub fn add_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.name.suffix = suffix.into();
        self
    }

    /// Replaces the whole name.
    pub fn set_name(&mut self, name: Name) -> &mut Self {
        self.name = name;
        self
    }

    // ------------------------------------------------------------------
    // Emails
    // ------------------------------------------------------------------

    /// Appends an `INTERNET` email address.
    pub fn add_email(&mut self, address: impl Into<String>) -> &mut Self {
        self.add_email_typed(address, EmailType::Internet)
    }

    pub fn add_email_typed(
        &mut self,
        address: impl Into<String>,
        email_type: EmailType,
    ) -> &mut Self {
        self.emails.push(Email::new(address).with_type(email_type));
        self
    }

    pub fn add_email_with_preference(
        &mut self,
        address: impl Into<String>,
        email_type: EmailType,
        preferred: bool,
    ) -> &mut Self {
        self.emails.push(
            Email::new(address)
                .with_type(email_type)
                .with_preferred(preferred),
        );
        self
    }

    pub fn add_emails(&mut self, emails: impl IntoIterator<Item = Email>) -> &mut Self {
        self.emails.extend(emails);
        self
    }

    // ------------------------------------------------------------------
    // Phones
    // ------------------------------------------------------------------

    /// Appends a `VOICE` phone number.
    pub fn add_phone(&mut self, number: impl Into<String>) -> &mut Self {
        self.add_phone_typed(number, PhoneType::Voice)
    }

    pub fn add_phone_typed(&mut self, number: impl Into<String>, phone_type: PhoneType) -> &mut Self {
        self.phones.push(Phone::new(number).with_type(phone_type));
        self
    }

    pub fn add_phone_with_preference(
        &mut self,
        number: impl Into<String>,
        phone_type: PhoneType,
        preferred: bool,
    ) -> &mut Self {
        self.phones.push(
            Phone::new(number)
                .with_type(phone_type)
                .with_preferred(preferred),
        );
        self
    }

    pub fn add_phones(&mut self, phones: impl IntoIterator<Item = Phone>) -> &mut Self {
        self.phones.extend(phones);
        self
    }

    // ------------------------------------------------------------------
    // Addresses
    // ------------------------------------------------------------------

    /// Appends an untyped address.
    pub fn add_address(
        &mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> &mut Self {
        self.addresses
            .push(Address::new(street, city, state, postal_code, country));
        self
    }

    pub fn add_address_typed(
        &mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        address_type: AddressType,
    ) -> &mut Self {
        self.addresses.push(
            Address::new(street, city, state, postal_code, country).with_type(address_type),
        );
        self
    }

    /// Appends an address that also carries an extended part (suite,
    /// apartment, ...).
    #[expect(clippy::too_many_arguments)]
    pub fn add_address_extended(
        &mut self,
        street: impl Into<String>,
        extended: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        address_type: Option<AddressType>,
    ) -> &mut Self {
        let mut address =
            Address::new(street, city, state, postal_code, country).with_extended(extended);
        address.address_type = address_type;
        self.addresses.push(address);
        self
    }

    #[expect(clippy::too_many_arguments)]
    pub fn add_address_with_preference(
        &mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        address_type: AddressType,
        preferred: bool,
    ) -> &mut Self {
        self.addresses.push(
            Address::new(street, city, state, postal_code, country)
                .with_type(address_type)
                .with_preferred(preferred),
        );
        self
    }

    pub fn add_addresses(&mut self, addresses: impl IntoIterator<Item = Address>) -> &mut Self {
        self.addresses.extend(addresses);
        self
    }

    // ------------------------------------------------------------------
    // Organization
    // ------------------------------------------------------------------

    pub fn add_organization(&mut self, name: impl Into<String>) -> &mut Self {
        self.organization.name = name.into();
        self
    }

    pub fn add_department(&mut self, department: impl Into<String>) -> &mut Self {
        self.organization.department = department.into();
        self
    }

    pub fn add_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.organization.title = title.into();
        self
    }

    pub fn add_role(&mut self, role: impl Into<String>) -> &mut Self {
        self.organization.role = role.into();
        self
    }

    /// Replaces the whole organization.
    pub fn set_organization(&mut self, organization: Organization) -> &mut Self {
        self.organization = organization;
        self
    }

    // ------------------------------------------------------------------
    // URLs
    // ------------------------------------------------------------------

    /// Appends an untyped URL.
    pub fn add_url(&mut self, address: impl Into<String>) -> &mut Self {
        self.urls.push(Url::new(address));
        self
    }

    pub fn add_url_typed(&mut self, address: impl Into<String>, url_type: UrlType) -> &mut Self {
        self.urls.push(Url::new(address).with_type(url_type));
        self
    }

    pub fn add_url_with_preference(
        &mut self,
        address: impl Into<String>,
        url_type: UrlType,
        preferred: bool,
    ) -> &mut Self {
        self.urls.push(
            Url::new(address)
                .with_type(url_type)
                .with_preferred(preferred),
        );
        self
    }

    pub fn add_urls(&mut self, urls: impl IntoIterator<Item = Url>) -> &mut Self {
        self.urls.extend(urls);
        self
    }

    // ------------------------------------------------------------------
    // Single-valued properties
    // ------------------------------------------------------------------

    /// Sets the photo: an `http(s)://` URL, a `data:` URI, or raw base64.
    pub fn add_photo(&mut self, photo: impl Into<String>) -> &mut Self {
        self.photo = photo.into();
        self
    }

    pub fn add_note(&mut self, note: impl Into<String>) -> &mut Self {
        self.note = note.into();
        self
    }

    pub fn add_birthday(&mut self, birthday: NaiveDate) -> &mut Self {
        self.birthday = Some(birthday);
        self
    }

    /// Sets the birthday from a `YYYY-MM-DD` string.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidDate` if the string is not a valid date. The
    /// contact is left unchanged in that case.
    pub fn add_birthday_from_str(&mut self, value: &str) -> RfcResult<&mut Self> {
        self.birthday = Some(parse_date(value)?);
        Ok(self)
    }

    /// Sets the anniversary. It is only written for vCard 4.0.
    pub fn add_anniversary(&mut self, anniversary: NaiveDate) -> &mut Self {
        self.anniversary = Some(anniversary);
        self
    }

    /// Sets the anniversary from a `YYYY-MM-DD` string.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidDate` if the string is not a valid date.
    pub fn add_anniversary_from_str(&mut self, value: &str) -> RfcResult<&mut Self> {
        self.anniversary = Some(parse_date(value)?);
        Ok(self)
    }

    /// Sets a custom property. Only names starting with `X-` (any case) are
    /// written; the name is upper-cased on output.
    pub fn add_custom_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.custom_properties.insert(name.into(), value.into());
        self
    }

    pub fn add_custom_properties<K, V>(
        &mut self,
        properties: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_properties.extend(
            properties
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        self
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Clears every field back to the state of [`Contact::new`], including
    /// the version.
    pub fn reset(&mut self) -> &mut Self {
        self.version = VCardVersion::default();
        self.name = Name::default();
        self.emails.clear();
        self.phones.clear();
        self.addresses.clear();
        self.organization = Organization::default();
        self.urls.clear();
        self.photo.clear();
        self.note.clear();
        self.birthday = None;
        self.anniversary = None;
        self.custom_properties.clear();
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the space-joined display name, or an empty string.
    #[must_use]
    pub fn formatted_name(&self) -> String {
        self.name.formatted_name()
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Returns the first email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.emails.first().map(|email| email.address.as_str())
    }

    #[must_use]
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Returns the first phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phones.first().map(|phone| phone.number.as_str())
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Returns the first address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.addresses.first()
    }

    #[must_use]
    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    #[must_use]
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// Returns the first URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.urls.first().map(|url| url.address.as_str())
    }

    /// Returns the photo value; empty when unset.
    #[must_use]
    pub fn photo(&self) -> &str {
        &self.photo
    }

    /// Returns the note; empty when unset.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    #[must_use]
    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    #[must_use]
    pub fn anniversary(&self) -> Option<NaiveDate> {
        self.anniversary
    }

    #[must_use]
    pub fn custom_properties(&self) -> &BTreeMap<String, String> {
        &self.custom_properties
    }

    /// Returns a custom property by its exact stored name.
    #[must_use]
    pub fn custom_property(&self, name: &str) -> Option<&str> {
        self.custom_properties.get(name).map(String::as_str)
    }
}
