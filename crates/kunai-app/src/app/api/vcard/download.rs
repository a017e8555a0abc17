use salvo::{Depot, Request, Response, handler};

use kunai_rfc::rfc::vcard::ContactInput;

use super::response::{build_contact, respond_with_vcard, write_error};
use crate::config::get_config_from_depot;
use crate::error::AppError;

/// ## Summary
/// POST /api/vcard - Builds a vCard from a JSON contact and returns it as a
/// file download.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, an invalid date, or a contact
/// without a name. Returns HTTP 500 if configuration is missing or invalid.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_vcard(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            write_error(res, &e);
            return;
        }
    };

    let input: ContactInput = match req.parse_json().await {
        Ok(input) => input,
        Err(e) => {
            write_error(res, &AppError::BadRequest(e.to_string()));
            return;
        }
    };

    match build_contact(input, &settings.vcard) {
        Ok(contact) => respond_with_vcard(res, &contact, &settings.vcard),
        Err(e) => write_error(res, &e),
    }
}
