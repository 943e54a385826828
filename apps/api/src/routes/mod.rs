pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::generation::handlers as generation;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume record
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/resume", put(resume::handle_put_resume))
        .route("/api/v1/resume/experience", post(resume::handle_add_experience))
        .route(
            "/api/v1/resume/experience/:id",
            patch(resume::handle_patch_experience),
        )
        .route(
            "/api/v1/resume/experience/:id",
            delete(resume::handle_remove_experience),
        )
        .route("/api/v1/resume/education", post(resume::handle_add_education))
        .route(
            "/api/v1/resume/education/:id",
            patch(resume::handle_patch_education),
        )
        .route(
            "/api/v1/resume/education/:id",
            delete(resume::handle_remove_education),
        )
        .route("/api/v1/resume/projects", post(resume::handle_add_project))
        .route(
            "/api/v1/resume/projects/:id",
            patch(resume::handle_patch_project),
        )
        .route(
            "/api/v1/resume/projects/:id",
            delete(resume::handle_remove_project),
        )
        // Generation
        .route("/api/v1/resume/generate", post(generation::handle_generate))
        // Generated document
        .route("/api/v1/document", get(document::handle_get_document))
        .route("/api/v1/document", put(document::handle_put_document))
        .route("/api/v1/document/mode", put(document::handle_set_mode))
        .route("/api/v1/document/preview", get(document::handle_preview))
        .route("/api/v1/document/export", get(document::handle_export))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::errors::AppError;
    use crate::generation::ResumeGenerator;
    use crate::models::resume::ResumeRecord;

    struct StubGenerator;

    #[async_trait]
    impl ResumeGenerator for StubGenerator {
        async fn generate(&self, record: &ResumeRecord) -> Result<String, AppError> {
            Ok(format!("# {}\n\n## Experience", record.full_name))
        }
    }

    fn test_app() -> Router {
        build_router(AppState {
            session: crate::session::SessionStore::new(),
            generator: Arc::new(StubGenerator),
        })
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_app()
            .oneshot(empty_request(Method::GET, "/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "architect-api");
    }

    #[tokio::test]
    async fn test_add_then_get_experience_entry() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(empty_request(Method::POST, "/api/v1/resume/experience"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let entry = json_body(response).await;
        let id = entry["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(empty_request(Method::GET, "/api/v1/resume"))
            .await
            .unwrap();
        let record = json_body(response).await;
        assert_eq!(record["experience"][0]["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_patch_experience_updates_single_field() {
        let app = test_app();

        let created = json_body(
            app.clone()
                .oneshot(empty_request(Method::POST, "/api/v1/resume/experience"))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PATCH,
                &format!("/api/v1/resume/experience/{id}"),
                serde_json::json!({"company": "Acme"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let patched = json_body(response).await;
        assert_eq!(patched["company"], "Acme");
        assert_eq!(patched["role"], "");
    }

    #[tokio::test]
    async fn test_delete_unknown_entry_returns_404() {
        let response = test_app()
            .oneshot(empty_request(
                Method::DELETE,
                &format!("/api/v1/resume/education/{}", Uuid::new_v4()),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_generate_then_preview_flow() {
        let app = test_app();

        let record = serde_json::json!({"fullName": "Jane Doe"});
        app.clone()
            .oneshot(json_request(Method::PUT, "/api/v1/resume", record))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(empty_request(Method::POST, "/api/v1/resume/generate"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["markdown"], "# Jane Doe\n\n## Experience");

        let response = app
            .oneshot(empty_request(Method::GET, "/api/v1/document/preview"))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h1>Jane Doe</h1>"));
    }

    #[tokio::test]
    async fn test_mode_toggle_roundtrip() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/v1/document/mode",
                serde_json::json!({"mode": "edit"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert_eq!(doc["mode"], "edit");

        let doc = json_body(
            app.oneshot(empty_request(Method::GET, "/api/v1/document"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(doc["mode"], "edit");
    }
}
