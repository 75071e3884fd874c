//! Integration tests for bearer-token attachment.

mod common;

use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use ayumart_client::auth::StaticCredentials;
use ayumart_client::{CatalogApi, ClientConfig, Storefront};

/// Fake backend that records the `Authorization` header of the last
/// request to `/industries`.
async fn spawn_capturing_backend() -> (String, Arc<Mutex<Option<String>>>) {
    let captured: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let cap = captured.clone();

    let app = Router::new().route(
        "/industries",
        get(move |headers: HeaderMap| {
            let cap = cap.clone();
            async move {
                *cap.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                Json(json!([{"name": "Ayurveda", "count": 200}]))
            }
        }),
    );

    (common::spawn_backend(app).await, captured)
}

// ---------------------------------------------------------------------------
// Test: a stored token is attached as a bearer header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn token_is_attached_as_bearer_header() {
    let (base_url, captured) = spawn_capturing_backend().await;

    let config = ClientConfig::with_base_url(&base_url);
    let api = CatalogApi::new(&config, Arc::new(StaticCredentials::new("secret-token")));
    let storefront = Storefront::new(api);

    let outcome = storefront.fetch_industries().await;
    assert!(!outcome.is_degraded());

    let header = captured.lock().unwrap().clone();
    assert_eq!(header.as_deref(), Some("Bearer secret-token"));
}

// ---------------------------------------------------------------------------
// Test: without a token the request goes out unauthenticated
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let (base_url, captured) = spawn_capturing_backend().await;

    let storefront = common::storefront_at(&base_url);

    let outcome = storefront.fetch_industries().await;
    assert!(!outcome.is_degraded());

    assert_eq!(captured.lock().unwrap().clone(), None);
}
