//! Integration tests for the page view-models: parameter handling,
//! degraded views, and stale-response suppression.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;

use ayumart_client::auth::Anonymous;
use ayumart_client::{CatalogApi, ClientConfig, Storefront};
use ayumart_pages::{
    CategoriesPage, CategoriesState, HomePage, HomeState, ImageStage, ProductsPage, ProductsState,
};

/// Serve `app` on an ephemeral loopback port; returns the base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });
    format!("http://{addr}")
}

/// A loopback URL with nothing listening, for degraded-path tests.
fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn storefront_at(base_url: &str) -> Arc<Storefront> {
    let config = ClientConfig::with_base_url(base_url);
    Arc::new(Storefront::new(CatalogApi::new(&config, Arc::new(Anonymous))))
}

/// Fake backend that counts every request it receives, whatever the
/// route, and answers every one with an empty JSON array.
async fn spawn_counting_backend() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().fallback(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Json(json!([]))
        }
    });

    (spawn_backend(app).await, hits)
}

// ---------------------------------------------------------------------------
// Test: no industry parameter -> no network traffic at all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_industry_issues_zero_requests() {
    let (base_url, hits) = spawn_counting_backend().await;
    let mut page = CategoriesPage::new(storefront_at(&base_url));

    page.select_industry(None, 1).await;

    assert_matches!(page.state(), CategoriesState::NoIndustrySelected);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: selecting an industry commits a fresh view
// ---------------------------------------------------------------------------

#[tokio::test]
async fn selecting_industry_commits_fresh_view() {
    let app = Router::new()
        .route(
            "/categories",
            get(|| async { Json(json!([{"name": "Shampoo", "count": 24}])) }),
        )
        .route(
            "/products",
            get(|| async { Json(json!({"count": 200})) }),
        );
    let base_url = spawn_backend(app).await;
    let mut page = CategoriesPage::new(storefront_at(&base_url));

    page.select_industry(Some("Ayurveda"), 1).await;

    let view = match page.state() {
        CategoriesState::Ready(view) => view,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert_eq!(view.industry, "Ayurveda");
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].category.name, "Shampoo");
    assert_eq!(view.total_products, 200);
    assert!(!view.degraded);
    assert_eq!(view.notice(), None);
}

// ---------------------------------------------------------------------------
// Test: backend down -> degraded view over the Ayurveda mock
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_backend_commits_degraded_mock_view() {
    let mut page = CategoriesPage::new(storefront_at(&unreachable_base_url()));

    page.select_industry(Some("Ayurveda"), 1).await;

    let view = match page.state() {
        CategoriesState::Ready(view) => view,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert!(view.degraded);
    assert_eq!(view.cards.len(), 9);
    assert_eq!(view.notice(), Some("Failed to load categories"));
    assert_eq!(
        view.total_products,
        ayumart_core::mock::product_count_for("Ayurveda")
    );
}

// ---------------------------------------------------------------------------
// Test: stale response is dropped, newest selection wins
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stale_response_cannot_overwrite_newer_selection() {
    let app = Router::new()
        .route(
            "/categories",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let industry = params.get("industry").cloned().unwrap_or_default();
                Json(json!([{"name": format!("{industry} Special"), "count": 5}]))
            }),
        )
        .route("/products", get(|| async { Json(json!({"count": 10})) }));
    let base_url = spawn_backend(app).await;
    let mut page = CategoriesPage::new(storefront_at(&base_url));

    // A then B; A's response arrives after B's was committed.
    let request_a = page.begin_select(Some("Ayurveda"), 1).expect("request A");
    let request_b = page.begin_select(Some("Fashion"), 1).expect("request B");

    let load_b = page.load(request_b).await;
    assert!(page.commit(load_b));

    let load_a = page.load(request_a).await;
    assert!(!page.commit(load_a), "stale load must be dropped");

    let view = match page.state() {
        CategoriesState::Ready(view) => view,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert_eq!(view.industry, "Fashion");
    assert_eq!(view.cards[0].category.name, "Fashion Special");
}

// ---------------------------------------------------------------------------
// Test: home page assembles industries plus a capped featured strip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_assembles_landing_view() {
    let app = Router::new()
        .route(
            "/industries",
            get(|| async { Json(json!([{"name": "Ayurveda", "count": 220}])) }),
        )
        .route(
            "/products",
            get(|| async {
                Json(json!([
                    {"name": "P1", "price": 10.0},
                    {"name": "P2", "price": 11.0},
                    {"name": "P3", "price": 12.0},
                    {"name": "P4", "price": 13.0},
                    {"name": "P5", "price": 14.0},
                ]))
            }),
        );
    let base_url = spawn_backend(app).await;
    let mut page = HomePage::new(storefront_at(&base_url));

    assert_matches!(page.state(), HomeState::Loading);
    page.refresh().await;

    let view = match page.state() {
        HomeState::Ready(view) => view,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert_eq!(view.industries.len(), 1);
    assert_eq!(view.featured.len(), ayumart_pages::home::FEATURED_LIMIT);
    assert!(!view.degraded);
}

// ---------------------------------------------------------------------------
// Test: product cards run image fallback on the category name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_card_image_falls_back_through_resolver() {
    let app = Router::new().route(
        "/products",
        get(|| async {
            Json(json!([{
                "name": "Amla Hair Oil",
                "price": 240.0,
                "category": "Hair Oil",
                "product_images": [{"url": "https://cdn.example.com/broken.jpg"}],
            }]))
        }),
    );
    let base_url = spawn_backend(app).await;
    let mut page = ProductsPage::new(storefront_at(&base_url));

    page.select_industry(Some("Ayurveda")).await;

    let mut view = match page.state() {
        ProductsState::Ready(view) => view.clone(),
        other => panic!("expected Ready, got {other:?}"),
    };
    let card = &mut view.cards[0];
    assert_eq!(card.image.src(), Some("https://cdn.example.com/broken.jpg"));

    // Primary fails -> resolver icon for the category.
    card.image.on_load_error();
    assert_eq!(card.image.stage(), ImageStage::Fallback);
    assert_eq!(card.image.src(), Some("/assets/icons/hair-oil.svg"));

    // Fallback fails too -> placeholder, no loop.
    card.image.on_load_error();
    assert_eq!(card.image.stage(), ImageStage::Unavailable);
    assert_eq!(card.image.message(), Some("Image unavailable"));
}
