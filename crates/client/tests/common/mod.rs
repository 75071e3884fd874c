//! Shared fake-backend harness for client integration tests.
//!
//! The unit under test is an HTTP *client*, so instead of driving a
//! router in-process with `tower::oneshot`, these tests serve a real
//! `axum` app on an ephemeral loopback port and point the client at it.

use std::sync::Arc;

use axum::Router;

use ayumart_client::auth::Anonymous;
use ayumart_client::{CatalogApi, ClientConfig, Storefront};

/// Serve `app` on an ephemeral loopback port; returns the base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });
    format!("http://{addr}")
}

/// A loopback URL with nothing listening on it, for transport-failure
/// tests: the port is bound, then released before the client connects.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Build an unauthenticated [`Storefront`] against a base URL.
pub fn storefront_at(base_url: &str) -> Storefront {
    let config = ClientConfig::with_base_url(base_url);
    Storefront::new(CatalogApi::new(&config, Arc::new(Anonymous)))
}
