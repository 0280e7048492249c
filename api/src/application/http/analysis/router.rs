use super::handlers::analyze_image::{__path_analyze_image, analyze_image};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, http::StatusCode, routing::post};
use utoipa::OpenApi;

/// Request body limit; leaves headroom over the validated image length.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_image))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze-image", state.args.server.root_path),
            post(analyze_image).options(|| async { StatusCode::OK }),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{HeaderValue, Method, StatusCode, header};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::application::http::{
        analysis::validators::MAX_IMAGE_LEN,
        server::http_server::{router, state},
        test::{completion, serve_args, spawn_provider},
    };

    const IMAGE: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQ";

    async fn server_with_reply(content: &str) -> TestServer {
        let provider_url = spawn_provider(StatusCode::OK, completion(content)).await;
        server_for(provider_url)
    }

    fn server_for(provider_url: String) -> TestServer {
        let app = router(state(Arc::new(serve_args(provider_url)))).unwrap();
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_missing_image_returns_400() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server.post("/api/analyze-image").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "No image provided" })
        );
    }

    #[tokio::test]
    async fn test_oversized_image_returns_400() {
        let server = server_for("http://127.0.0.1:9".to_string());
        let image = "a".repeat(MAX_IMAGE_LEN as usize + 1);

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": image }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Image too large" })
        );
    }

    #[tokio::test]
    async fn test_empty_image_returns_400() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_reply_is_returned() {
        let server = server_with_reply(
            r#"{"objectName": "Glass Jar", "classification": "reusable", "confidence": 98,
                "materials": ["Soda-lime Glass"],
                "environmentalImpact": {"carbonFootprint": "Low", "recyclability": "Very High", "biodegradability": "Never"},
                "disposalTips": ["Remove labels"], "reuseSuggestions": ["Candle holder"],
                "educationalFacts": ["Glass is infinitely recyclable"]}"#,
        )
        .await;

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": IMAGE }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["objectName"], "Glass Jar");
        assert_eq!(body["classification"], "reusable");
        assert_eq!(body["confidence"], 98);
        assert_eq!(body["environmentalImpact"]["recyclability"], "Very High");
        assert!(body.get("id").is_none());
        assert!(body.get("timestamp").is_none());
    }

    #[tokio::test]
    async fn test_unknown_classification_is_normalized() {
        let server = server_with_reply(
            r#"{"objectName": "Banana Peel", "classification": "compostable", "confidence": 90}"#,
        )
        .await;

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": IMAGE }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["classification"], "non-recyclable");
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_defaults() {
        let server = server_with_reply(
            r#"{"objectName": "Tin Can", "classification": "recyclable", "confidence": 120}"#,
        )
        .await;

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": IMAGE }))
            .await;

        assert_eq!(response.json::<Value>()["confidence"], 75);
    }

    #[tokio::test]
    async fn test_prose_reply_is_repaired() {
        let server = server_with_reply(
            "This looks like a ceramic coffee mug with a chipped handle, probably glazed stoneware.",
        )
        .await;

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": IMAGE }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["objectName"], "Detected Item");
        assert_eq!(body["confidence"], 75);
        assert_eq!(body["classification"], "non-recyclable");
        let facts = body["educationalFacts"].as_array().unwrap();
        assert!(facts.iter().any(|fact| {
            fact.as_str()
                .is_some_and(|fact| fact.starts_with("This looks like a ceramic coffee mug"))
        }));
    }

    #[tokio::test]
    async fn test_provider_error_returns_500_with_details() {
        let provider_url = spawn_provider(
            StatusCode::UNAUTHORIZED,
            json!({ "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" } }),
        )
        .await;
        let server = server_for(provider_url);

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": IMAGE }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Failed to analyze image", "details": "Incorrect API key provided" })
        );
    }

    #[tokio::test]
    async fn test_unreachable_provider_returns_500() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server
            .post("/api/analyze-image")
            .json(&json!({ "image": IMAGE }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Failed to analyze image");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_unreadable_body_returns_500() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server.post("/api/analyze-image").text("not json").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["error"], "Failed to analyze image");
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server
            .method(Method::OPTIONS, "/api/analyze-image")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("https://app.ecoscan.example"),
            )
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("POST"),
            )
            .add_header(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                HeaderValue::from_static("authorization,x-client-info,apikey,content-type"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_bare_options_returns_200() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server.method(Method::OPTIONS, "/api/analyze-image").await;

        response.assert_status_ok();
    }
}
