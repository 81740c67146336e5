//! Integration tests for the liveness endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_json, get_request, test_app, test_config};

    /// Health never needs credentials
    #[tokio::test]
    async fn it_reports_health_without_credentials() {
        let app = test_app(test_config(None, None));

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn it_serves_a_banner() {
        let app = test_app(test_config(None, None));

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert!(body["message"].as_str().unwrap().contains("running"));
    }

    #[tokio::test]
    async fn it_returns_not_found_for_unknown_routes() {
        let app = test_app(test_config(None, None));

        let response = app.oneshot(get_request("/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
