use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};
use serde::Serialize;

use kunai_rfc::rfc::vcard::{Contact, ContactInput};

use super::response::{build_contact, render_contact, write_error};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Rendered card together with the contact it was built from
#[derive(Debug, Serialize)]
pub struct VCardJsonResponse {
    pub vcard: String,
    pub data: Contact,
}

fn render_json(input: ContactInput, depot: &Depot) -> AppResult<VCardJsonResponse> {
    let settings = get_config_from_depot(depot)?;
    let contact = build_contact(input, &settings.vcard)?;
    let vcard = render_contact(&contact, &settings.vcard)?;
    Ok(VCardJsonResponse {
        vcard,
        data: contact,
    })
}

/// ## Summary
/// POST /api/vcard/json - Builds a vCard from a JSON contact and returns the
/// text alongside the structured contact.
///
/// ## Errors
/// Same as `POST /api/vcard`.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_vcard_json(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let input: ContactInput = match req.parse_json().await {
        Ok(input) => input,
        Err(e) => {
            write_error(res, &AppError::BadRequest(e.to_string()));
            return;
        }
    };

    match render_json(input, depot) {
        Ok(body) => res.render(Json(body)),
        Err(e) => write_error(res, &e),
    }
}
