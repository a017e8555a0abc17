use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use super::*;

#[handler]
async fn echo_filename(depot: &mut Depot, res: &mut Response) {
    match get_config_from_depot(depot) {
        Ok(settings) => res.render(settings.vcard.default_filename.clone()),
        Err(e) => {
            tracing::error!(error = %e, "Settings missing");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

#[tokio::test]
async fn config_handler_injects_settings() {
    let mut settings = Settings::default();
    settings.vcard.default_filename = "card.vcf".to_string();

    let router = Router::new()
        .hoop(ConfigHandler { settings })
        .push(Router::with_path("echo").get(echo_filename));
    let service = Service::new(router);

    let mut resp = TestClient::get("http://127.0.0.1:5800/echo")
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(resp.take_string().await.ok().as_deref(), Some("card.vcf"));
}

#[tokio::test]
async fn missing_config_is_invariant_violation() {
    let router = Router::new().push(Router::with_path("echo").get(echo_filename));
    let service = Service::new(router);

    let resp = TestClient::get("http://127.0.0.1:5800/echo")
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
}
