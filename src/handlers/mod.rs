//! # HTTP Request Handlers
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `ceremony`: the two buttons and the capability probe
//!
//! Handlers only translate between HTTP and the ceremonies in
//! `crate::webauthn`; the ceremonies never see a request or response.

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub mod ceremony;
pub mod health;

/// API routes, without static files or middleware layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/capability", get(ceremony::capability))
        .route("/api/register", post(ceremony::register))
        .route("/api/sign-in", post(ceremony::sign_in))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::credentials::find_credential_id;
    use crate::db::MemoryStore;
    use crate::webauthn::capability::CapabilityProbe;
    use crate::webauthn::requests::RequestBuilder;
    use crate::webauthn::testing::MockPlatform;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedProbe(bool);

    #[async_trait]
    impl CapabilityProbe for FixedProbe {
        async fn is_available(&self) -> bool {
            self.0
        }
    }

    fn test_state(available: bool) -> (AppState, Arc<MockPlatform>, Arc<MemoryStore>) {
        let platform = Arc::new(MockPlatform::new());
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            store: store.clone(),
            platform: platform.clone(),
            probe: Arc::new(FixedProbe(available)),
            requests: Arc::new(RequestBuilder::from_config(&Config::default())),
        };
        (state, platform, store)
    }

    async fn call(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _, _) = test_state(true);
        let (status, body) = call(router(state), "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_sign_in_before_register_alerts_missing_credential() {
        let (state, platform, _) = test_state(true);
        let (status, body) = call(router(state), "POST", "/api/sign-in").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No registered credential found.");
        assert_eq!(platform.assertion_calls(), 0);
    }

    #[tokio::test]
    async fn test_register_then_sign_in() {
        let (state, platform, store) = test_state(true);
        let app = router(state);

        let (status, body) = call(app.clone(), "POST", "/api/register").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Registration successful");
        assert_eq!(
            find_credential_id(store.as_ref()).await.unwrap(),
            Some(vec![1; 16])
        );

        let (status, body) = call(app, "POST", "/api/sign-in").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Sign-in successful");
        assert_eq!(platform.assertion_calls(), 1);
    }

    #[tokio::test]
    async fn test_platform_failures_use_generic_alerts() {
        let (state, platform, store) = test_state(true);
        let app = router(state);

        platform.fail_create(true);
        let (status, body) = call(app.clone(), "POST", "/api/register").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Registration failed");
        assert_eq!(store.len(), 0);

        platform.fail_create(false);
        call(app.clone(), "POST", "/api/register").await;
        platform.fail_get(true);
        let (status, body) = call(app, "POST", "/api/sign-in").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Sign-in failed");
    }

    #[tokio::test]
    async fn test_capability_warning_is_advisory() {
        let (state, _, _) = test_state(false);
        let app = router(state);

        let (status, body) = call(app.clone(), "GET", "/api/capability").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false);
        assert_eq!(body["message"], "Bluetooth not available on this device.");

        // Ceremonies still run
        let (status, _) = call(app, "POST", "/api/register").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_capability_available_has_no_message() {
        let (state, _, _) = test_state(true);
        let (_, body) = call(router(state), "GET", "/api/capability").await;

        assert_eq!(body["available"], true);
        assert!(body["message"].is_null());
    }
}
