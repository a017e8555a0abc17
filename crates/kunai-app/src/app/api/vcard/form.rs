use std::sync::Arc;

use salvo::{Depot, Request, Response, handler};

use kunai_rfc::rfc::vcard::{Contact, EmailType, PhoneType, UrlType, VCardVersion};

use super::response::{respond_with_vcard, write_error};
use crate::config::{Settings, get_config_from_depot};
use crate::error::AppResult;

/// Request fields accepted by the form endpoint.
#[derive(Debug, Default)]
struct FormFields {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    email_type: Option<String>,
    phone: Option<String>,
    phone_type: Option<String>,
    organization: Option<String>,
    department: Option<String>,
    title: Option<String>,
    role: Option<String>,
    url: Option<String>,
    url_type: Option<String>,
    note: Option<String>,
}

/// Reads a non-empty field from the form body, falling back to the query
/// string.
async fn field(req: &mut Request, key: &str) -> Option<String> {
    let from_form = req.form::<String>(key).await.filter(|v| !v.is_empty());
    from_form.or_else(|| req.query::<String>(key).filter(|v| !v.is_empty()))
}

impl FormFields {
    async fn from_request(req: &mut Request) -> Self {
        Self {
            first_name: field(req, "firstName").await,
            last_name: field(req, "lastName").await,
            email: field(req, "email").await,
            email_type: field(req, "emailType").await,
            phone: field(req, "phone").await,
            phone_type: field(req, "phoneType").await,
            organization: field(req, "organization").await,
            department: field(req, "department").await,
            title: field(req, "title").await,
            role: field(req, "role").await,
            url: field(req, "url").await,
            url_type: field(req, "urlType").await,
            note: field(req, "note").await,
        }
    }

    /// Builds the contact. Unrecognised type names fall back to `WORK`.
    fn into_contact(self, version: VCardVersion) -> Contact {
        let mut contact = Contact::with_version(version);

        if self.first_name.is_some() || self.last_name.is_some() {
            contact.add_name(
                self.first_name.unwrap_or_default(),
                self.last_name.unwrap_or_default(),
            );
        }

        if let Some(email) = self.email {
            let email_type = self
                .email_type
                .and_then(|t| t.parse().ok())
                .unwrap_or(EmailType::Work);
            contact.add_email_typed(email, email_type);
        }

        if let Some(phone) = self.phone {
            let phone_type = self
                .phone_type
                .and_then(|t| parse_phone_type(&t))
                .unwrap_or(PhoneType::Work);
            contact.add_phone_typed(phone, phone_type);
        }

        if let Some(organization) = self.organization {
            contact.add_organization(organization);
        }
        if let Some(department) = self.department {
            contact.add_department(department);
        }
        if let Some(title) = self.title {
            contact.add_title(title);
        }
        if let Some(role) = self.role {
            contact.add_role(role);
        }

        if let Some(url) = self.url {
            let url_type = self
                .url_type
                .and_then(|t| t.parse().ok())
                .unwrap_or(UrlType::Work);
            contact.add_url_typed(url, url_type);
        }

        if let Some(note) = self.note {
            contact.add_note(note);
        }

        contact
    }
}

/// `cell` is accepted as an alias for `mobile`.
fn parse_phone_type(value: &str) -> Option<PhoneType> {
    if value.eq_ignore_ascii_case("cell") {
        Some(PhoneType::Mobile)
    } else {
        value.parse().ok()
    }
}

fn settings_and_version(depot: &Depot) -> AppResult<(Arc<Settings>, VCardVersion)> {
    let settings = get_config_from_depot(depot)?;
    let version = settings.vcard.default_version.parse()?;
    Ok((settings, version))
}

/// ## Summary
/// GET|POST /api/vcard/form - Builds a vCard from form fields or query
/// parameters and returns it as a file download.
///
/// ## Errors
/// Returns HTTP 400 if neither `firstName` nor `lastName` is given.
/// Returns HTTP 500 if configuration is missing or invalid.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_vcard_from_form(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let (settings, version) = match settings_and_version(depot) {
        Ok(v) => v,
        Err(e) => {
            write_error(res, &e);
            return;
        }
    };

    let contact = FormFields::from_request(req).await.into_contact(version);
    respond_with_vcard(res, &contact, &settings.vcard);
}
