//! vCard generation endpoints.
//!
//! - `POST /api/vcard` - JSON contact in, vCard file out
//! - `POST /api/vcard/json` - JSON contact in, vCard text and contact data out
//! - `GET|POST /api/vcard/form` - Form fields or query parameters in, vCard file out

mod download;
mod form;
mod json;
mod response;

use salvo::Router;

use kunai_core::constants::VCARD_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(VCARD_ROUTE_COMPONENT)
        .post(download::create_vcard)
        .push(Router::with_path("json").post(json::create_vcard_json))
        .push(
            Router::with_path("form")
                .get(form::create_vcard_from_form)
                .post(form::create_vcard_from_form),
        )
}
