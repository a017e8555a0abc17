//! vCard serialization.

use std::fmt::Write as _;

use super::escape::escape_text;
use super::fold::fold_line;
use super::options::{LineEnding, SerializeOptions};
use super::params::entry_parameters;
use crate::error::RfcResult;
use crate::rfc::vcard::core::{
    AddressType, Contact, EmailType, Name, PhoneType, PhotoEncoding, UrlType,
};

/// Output format for BDAY and ANNIVERSARY.
const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Serializes a contact with default options (LF line endings).
///
/// ## Summary
/// Validates the contact first; no text is produced for an invalid contact.
///
/// ## Errors
/// Returns the validation error unchanged if the contact is invalid, or a
/// format error if writing to the output buffer fails.
pub fn serialize(contact: &Contact) -> RfcResult<String> {
    serialize_with(contact, &SerializeOptions::default())
}

/// Serializes a contact with explicit options.
///
/// ## Errors
/// Returns the validation error unchanged if the contact is invalid, or a
/// format error if writing to the output buffer fails.
pub fn serialize_with(contact: &Contact, options: &SerializeOptions) -> RfcResult<String> {
    contact.validate()?;

    let mut writer = LineWriter::new(options.line_ending);

    writer.line("BEGIN:VCARD")?;
    writer.line(&format!("VERSION:{}", contact.version()))?;

    write_name(contact.name(), &mut writer)?;
    write_emails(contact, &mut writer)?;
    write_phones(contact, &mut writer)?;
    write_addresses(contact, &mut writer)?;
    write_organization(contact, &mut writer)?;
    write_urls(contact, &mut writer)?;
    write_photo(contact, &mut writer)?;

    if !contact.note().is_empty() {
        writer.line(&format!("NOTE:{}", escape_text(contact.note())))?;
    }

    write_dates(contact, &mut writer)?;
    write_custom_properties(contact, &mut writer)?;

    writer.line("END:VCARD")?;

    let output = writer.finish();
    tracing::trace!(bytes = output.len(), "Serialized vCard");

    Ok(output)
}

impl Contact {
    /// Renders the contact as vCard text with LF line endings.
    ///
    /// ## Errors
    /// See [`serialize`].
    pub fn serialize(&self) -> RfcResult<String> {
        serialize(self)
    }

    /// Renders the contact with explicit options.
    ///
    /// ## Errors
    /// See [`serialize_with`].
    pub fn serialize_with(&self, options: &SerializeOptions) -> RfcResult<String> {
        serialize_with(self, options)
    }

    /// Renders the contact as UTF-8 bytes.
    ///
    /// ## Errors
    /// See [`serialize`].
    pub fn serialize_bytes(&self) -> RfcResult<Vec<u8>> {
        self.serialize().map(String::into_bytes)
    }
}

/// Accumulates folded, terminated lines.
struct LineWriter {
    output: String,
    line_ending: LineEnding,
}

impl LineWriter {
    fn new(line_ending: LineEnding) -> Self {
        Self {
            output: String::new(),
            line_ending,
        }
    }

    fn line(&mut self, line: &str) -> RfcResult<()> {
        write!(
            self.output,
            "{}{}",
            fold_line(line, self.line_ending),
            self.line_ending.as_str()
        )?;
        Ok(())
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Picks the FN value: the space-joined name, else "Last, First", else
/// whichever of the two is present.
fn display_name(name: &Name) -> String {
    let formatted = name.formatted_name();
    if !formatted.is_empty() {
        return formatted;
    }

    match (name.first.is_empty(), name.last.is_empty()) {
        (false, false) => format!("{}, {}", name.last, name.first),
        (false, true) => name.first.clone(),
        (true, false) => name.last.clone(),
        (true, true) => String::new(),
    }
}

fn write_name(name: &Name, writer: &mut LineWriter) -> RfcResult<()> {
    writer.line(&format!("N:{}", name.structured_name()))?;

    let formatted = display_name(name);
    if !formatted.is_empty() {
        writer.line(&format!("FN:{}", escape_text(&formatted)))?;
    }

    Ok(())
}

fn write_emails(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    for email in contact.emails() {
        let email_type = email.email_type.unwrap_or(EmailType::Internet);
        let params = entry_parameters(Some(email_type.as_str()), email.preferred);
        writer.line(&format!("EMAIL{params}:{}", escape_text(&email.address)))?;
    }
    Ok(())
}

fn write_phones(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    for phone in contact.phones() {
        let phone_type = phone.phone_type.unwrap_or(PhoneType::Voice);
        let params = entry_parameters(Some(phone_type.as_str()), phone.preferred);
        writer.line(&format!("TEL{params}:{}", escape_text(&phone.number)))?;
    }
    Ok(())
}

fn write_addresses(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    for address in contact.addresses() {
        let params = entry_parameters(
            address.address_type.map(AddressType::as_str),
            address.preferred,
        );
        writer.line(&format!("ADR{params}:{}", address.structured_address()))?;

        if address.has_label() {
            writer.line(&format!(
                "LABEL{params}:{}",
                escape_text(&address.formatted_address())
            ))?;
        }
    }
    Ok(())
}

fn write_organization(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    let org = contact.organization();

    if !org.name.is_empty() {
        let mut value = escape_text(&org.name);
        if !org.department.is_empty() {
            value.push(';');
            value.push_str(&escape_text(&org.department));
        }
        writer.line(&format!("ORG:{value}"))?;
    }

    if !org.title.is_empty() {
        writer.line(&format!("TITLE:{}", escape_text(&org.title)))?;
    }

    if !org.role.is_empty() {
        writer.line(&format!("ROLE:{}", escape_text(&org.role)))?;
    }

    Ok(())
}

fn write_urls(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    for url in contact.urls() {
        let params = entry_parameters(url.url_type.map(UrlType::as_str), url.preferred);
        writer.line(&format!("URL{params}:{}", escape_text(&url.address)))?;
    }
    Ok(())
}

fn write_photo(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    if contact.photo().is_empty() {
        return Ok(());
    }

    // Written verbatim: URIs and base64 are not text values
    let photo = PhotoEncoding::sniff(contact.photo());
    writer.line(&format!("{}:{}", photo.property_prefix(), photo.value()))
}

fn write_dates(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    if let Some(birthday) = contact.birthday() {
        writer.line(&format!("BDAY:{}", birthday.format(DATE_OUTPUT_FORMAT)))?;
    }

    if let Some(anniversary) = contact.anniversary() {
        if contact.version().supports_anniversary() {
            writer.line(&format!(
                "ANNIVERSARY:{}",
                anniversary.format(DATE_OUTPUT_FORMAT)
            ))?;
        } else {
            tracing::debug!(
                version = %contact.version(),
                "Skipping ANNIVERSARY, not defined before vCard 4.0"
            );
        }
    }

    Ok(())
}

/// Writes `X-` properties in name order. Other names and empty values are
/// skipped.
fn write_custom_properties(contact: &Contact, writer: &mut LineWriter) -> RfcResult<()> {
    for (name, value) in contact.custom_properties() {
        let upper = name.to_uppercase();
        if !upper.starts_with("X-") {
            tracing::debug!(property = %name, "Skipping custom property without X- prefix");
            continue;
        }
        if value.is_empty() {
            continue;
        }
        writer.line(&format!("{upper}:{}", escape_text(value)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RfcError;
    use crate::rfc::vcard::core::VCardVersion;
    use crate::rfc::vcard::validate::ValidationError;

    fn john() -> Contact {
        let mut card = Contact::new();
        card.add_name("John", "Doe");
        card
    }

    fn lines(output: &str) -> Vec<&str> {
        output.lines().collect()
    }

    #[test]
    fn serialize_minimal() {
        let output = serialize(&john()).expect("valid contact");
        assert_eq!(
            output,
            "BEGIN:VCARD\nVERSION:3.0\nN:Doe;John;;;\nFN:John Doe\nEND:VCARD\n"
        );
    }

    #[test]
    fn serialize_crlf() {
        let output = serialize_with(&john(), &SerializeOptions::new(LineEnding::Crlf))
            .expect("valid contact");
        assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(output.ends_with("END:VCARD\r\n"));
        assert_eq!(output.matches('\n').count(), output.matches("\r\n").count());
    }

    #[test]
    fn serialize_invalid_returns_no_text() {
        let result = serialize(&Contact::new());
        assert!(matches!(
            result,
            Err(RfcError::ValidationError(ValidationError::MissingName))
        ));
    }

    #[test]
    fn display_name_fallbacks() {
        assert_eq!(display_name(&Name::new("John", "Doe")), "John Doe");
        assert_eq!(display_name(&Name::new("", "Doe")), "Doe");
        assert_eq!(display_name(&Name::new("John", "")), "John");
        assert_eq!(display_name(&Name::default()), "");
    }

    #[test]
    fn fn_is_escaped() {
        let mut card = Contact::new();
        card.add_name("John", "Doe").add_suffix("Jr., PhD");
        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("FN:John Doe Jr.\\, PhD\n"));
        assert!(output.contains("N:Doe;John;;;Jr.\\, PhD\n"));
    }

    #[test]
    fn email_and_phone_types() {
        let mut card = john();
        card.add_email("a@example.com")
            .add_email_with_preference("b@example.com", EmailType::Work, true)
            .add_emails([crate::rfc::vcard::core::Email::new("c@example.com")])
            .add_phone("+1")
            .add_phone_with_preference("+2", PhoneType::Mobile, true);

        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("EMAIL;TYPE=INTERNET:a@example.com\n"));
        assert!(output.contains("EMAIL;TYPE=WORK;PREF=1:b@example.com\n"));
        assert!(output.contains("EMAIL;TYPE=INTERNET:c@example.com\n"));
        assert!(output.contains("TEL;TYPE=VOICE:+1\n"));
        assert!(output.contains("TEL;TYPE=MOBILE;PREF=1:+2\n"));
    }

    #[test]
    fn address_with_label() {
        let mut card = john();
        card.add_address_with_preference(
            "123 Main St",
            "Anytown",
            "CA",
            "12345",
            "USA",
            AddressType::Home,
            true,
        );

        let output = serialize(&card).expect("valid contact");
        let lines = lines(&output);
        let adr = lines
            .iter()
            .position(|l| l.starts_with("ADR"))
            .expect("ADR line");
        assert_eq!(
            lines[adr],
            "ADR;TYPE=HOME;PREF=1:;;123 Main St;Anytown;CA;12345;USA"
        );
        assert_eq!(
            lines[adr + 1],
            "LABEL;TYPE=HOME;PREF=1:123 Main St\\nAnytown\\, CA\\n12345\\nUSA"
        );
    }

    #[test]
    fn address_without_label() {
        let mut card = john();
        card.add_address_extended("", "Suite 4", "", "", "", "", None);

        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("ADR:;Suite 4;;;;;\n"));
        assert!(!output.contains("LABEL"));
    }

    #[test]
    fn organization_lines() {
        let mut card = john();
        card.add_organization("Acme, Inc.")
            .add_department("R&D")
            .add_title("Engineer")
            .add_role("Lead");

        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("ORG:Acme\\, Inc.;R&D\n"));
        assert!(output.contains("TITLE:Engineer\n"));
        assert!(output.contains("ROLE:Lead\n"));
    }

    #[test]
    fn organization_requires_name_for_org_line() {
        let mut card = john();
        card.add_department("R&D").add_title("Engineer");

        let output = serialize(&card).expect("valid contact");
        assert!(!output.contains("ORG:"));
        assert!(output.contains("TITLE:Engineer\n"));
    }

    #[test]
    fn url_without_type_has_no_type_parameter() {
        let mut card = john();
        card.add_url("https://example.com")
            .add_url_typed("https://social.example.com/jd", UrlType::Social);

        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("URL:https://example.com\n"));
        assert!(output.contains("URL;TYPE=SOCIAL:https://social.example.com/jd\n"));
    }

    #[test]
    fn photo_variants() {
        let mut card = john();

        card.add_photo("https://x/y.jpg");
        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("PHOTO;VALUE=uri:https://x/y.jpg\n"));

        card.add_photo("data:image/jpeg;base64,AAAA");
        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("PHOTO;ENCODING=b:data:image/jpeg;base64,AAAA\n"));

        card.add_photo("AAAA");
        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("PHOTO;ENCODING=b;TYPE=JPEG:AAAA\n"));
    }

    #[test]
    fn note_is_escaped() {
        let mut card = john();
        card.add_note("Line1\nLine2; with special, chars");

        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("NOTE:Line1\\nLine2\\; with special\\, chars\n"));
    }

    #[test]
    fn anniversary_only_for_v4() {
        let mut card = john();
        card.add_birthday_from_str("1990-01-15")
            .expect("valid date")
            .add_anniversary_from_str("2015-06-20")
            .expect("valid date");

        let v3 = serialize(&card).expect("valid contact");
        assert!(v3.contains("BDAY:1990-01-15\n"));
        assert!(!v3.contains("ANNIVERSARY"));

        card.set_version(VCardVersion::V4);
        let v4 = serialize(&card).expect("valid contact");
        assert!(v4.contains("VERSION:4.0\n"));
        assert!(v4.contains("ANNIVERSARY:2015-06-20\n"));
    }

    #[test]
    fn custom_properties_filtered_and_sorted() {
        let mut card = john();
        card.add_custom_property("x-twitter", "@jd")
            .add_custom_property("X-SKYPE", "john;doe")
            .add_custom_property("NICKNAME", "JD")
            .add_custom_property("X-EMPTY", "");

        let output = serialize(&card).expect("valid contact");
        let custom: Vec<&str> = lines(&output)
            .into_iter()
            .filter(|l| l.starts_with("X-") || l.starts_with("NICKNAME"))
            .collect();
        assert_eq!(custom, ["X-SKYPE:john\\;doe", "X-TWITTER:@jd"]);
    }

    #[test]
    fn long_lines_are_folded() {
        let mut card = john();
        card.add_note("X".repeat(100));

        let output = serialize(&card).expect("valid contact");
        assert!(output.contains("\n "));
        assert!(output.replace("\n ", "").contains(&format!("NOTE:{}", "X".repeat(100))));
    }

    #[test]
    fn property_order_is_fixed() {
        let mut card = Contact::with_version(VCardVersion::V4);
        card.add_custom_property("X-A", "1")
            .add_anniversary_from_str("2015-06-20")
            .expect("valid date")
            .add_birthday_from_str("1990-01-15")
            .expect("valid date")
            .add_note("n")
            .add_photo("https://p")
            .add_url("https://u")
            .add_role("r")
            .add_title("t")
            .add_organization("o")
            .add_address("s", "c", "st", "p", "co")
            .add_phone("+1")
            .add_email("e@example.com")
            .add_name("John", "Doe");

        let output = serialize(&card).expect("valid contact");
        let names: Vec<&str> = lines(&output)
            .into_iter()
            .map(|l| l.split([':', ';']).next().unwrap_or_default())
            .collect();

        assert_eq!(
            names,
            [
                "BEGIN",
                "VERSION",
                "N",
                "FN",
                "EMAIL",
                "TEL",
                "ADR",
                "LABEL",
                "ORG",
                "TITLE",
                "ROLE",
                "URL",
                "PHOTO",
                "NOTE",
                "BDAY",
                "ANNIVERSARY",
                "X-A",
                "END"
            ]
        );
    }

    #[test]
    fn serialization_is_repeatable() {
        let mut card = john();
        card.add_email("a@example.com")
            .add_custom_property("X-B", "2")
            .add_custom_property("X-A", "1");

        let first = serialize(&card).expect("valid contact");
        let second = serialize(&card).expect("valid contact");
        assert_eq!(first, second);
    }
}
