pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route(
            "/api/v1/screenings",
            post(handlers::handle_screen_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/screenings/text",
            post(handlers::handle_screen_text),
        )
        // Read-only reference data
        .route("/api/v1/taxonomy", get(handlers::handle_get_taxonomy))
        .route("/api/v1/roles", get(handlers::handle_get_roles))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use bytes::Bytes;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::errors::AppError;
    use crate::screening::extractor::{PdfTextExtractor, TextExtractor};

    const BOUNDARY: &str = "screener-test-boundary";

    /// Returns the upload as UTF-8 so router tests need no real PDF.
    struct Utf8Extractor;

    #[async_trait]
    impl TextExtractor for Utf8Extractor {
        async fn extract(&self, document: Bytes) -> Result<String, AppError> {
            Ok(String::from_utf8_lossy(&document).into_owned())
        }
    }

    fn app(extractor: Arc<dyn TextExtractor>) -> Router {
        build_router(AppState {
            config: Config::default(),
            extractor,
        })
    }

    fn multipart_request(field: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"resume.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/screenings")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = app(Arc::new(PdfTextExtractor))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_screen_text_returns_report() {
        let request = Request::post("/api/v1/screenings/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text": "Surgery, anatomy and patient care"}"#))
            .unwrap();
        let response = app(Arc::new(PdfTextExtractor))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["counts"]["health_medical"], 3);
        assert_eq!(body["total"], 3);
        assert_eq!(body["source"], "text");
        assert!(body["matches"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_is_extracted_and_screened() {
        let resume = "software engineering react docker kubernetes aws azure agile scrum \
                      django flask python java english english english english english \
                      english english english";
        let response = app(Arc::new(Utf8Extractor))
            .oneshot(multipart_request("file", resume))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["source"], "pdf");
        assert_eq!(body["matches"][0]["role"], "Software Engineer");
        assert_eq!(body["matches"][0]["rank"], 1);
        assert_eq!(body["headline"], "Found 1 matching role(s)");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_rejected() {
        let response = app(Arc::new(Utf8Extractor))
            .oneshot(multipart_request("attachment", "python"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "VALIDATION_ERROR"
        );
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_rejected() {
        let response = app(Arc::new(PdfTextExtractor))
            .oneshot(multipart_request("file", "just some text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_taxonomy_lists_sixteen_categories() {
        let response = app(Arc::new(PdfTextExtractor))
            .oneshot(Request::get("/api/v1/taxonomy").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 16);
        assert_eq!(categories[3]["category"], "programming");
        assert_eq!(categories[3]["keywords"][1], "java");
    }

    #[tokio::test]
    async fn test_roles_lists_nine_rules_in_order() {
        let response = app(Arc::new(PdfTextExtractor))
            .oneshot(Request::get("/api/v1/roles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        let rules = body.as_array().unwrap();
        assert_eq!(rules.len(), 9);
        assert_eq!(rules[0]["role"], "Junior Data Scientist");
        assert_eq!(rules[0]["eligibility"].as_array().unwrap().len(), 3);
        assert_eq!(rules[8]["role"], "General Surgeon");
        assert_eq!(rules[2]["eligibility"][0][0]["metric"]["kind"], "total");
        assert_eq!(rules[2]["eligibility"][0][1]["metric"]["category"], "software");
    }
}
