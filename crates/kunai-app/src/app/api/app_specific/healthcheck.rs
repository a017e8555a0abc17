use salvo::{Router, handler};

#[handler]
async fn healthcheck() -> &'static str {
    "OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthcheck)
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use salvo::prelude::*;
    use salvo::test::{ResponseExt, TestClient};

    use crate::app::api::routes;

    #[tokio::test]
    async fn healthcheck_returns_ok() {
        let service = Service::new(Router::new().push(routes()));

        let mut resp = TestClient::get("http://127.0.0.1:5800/api/app/healthcheck")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        assert_eq!(resp.take_string().await.ok().as_deref(), Some("OK"));
    }
}
