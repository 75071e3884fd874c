//! `ayumart-cli` -- terminal storefront browser.
//!
//! Drives the page view-models against the catalog backend and renders
//! them as text. Backend failures never fail the command: pages degrade
//! to the mock catalog and the output is annotated instead.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                        | Description                      |
//! |------------------------|----------|--------------------------------|----------------------------------|
//! | `AYUMART_API_URL`      | no       | `http://localhost:3000/api/v1` | Catalog API base URL             |
//! | `AYUMART_TIMEOUT_SECS` | no       | `30`                           | Transport timeout per request    |
//! | `AYUMART_API_TOKEN`    | no       | --                             | Bearer token for authenticated calls |
//!
//! # Usage
//!
//! ```text
//! ayumart-cli home
//! ayumart-cli categories <industry> [page]
//! ayumart-cli products [industry]
//! ```

use std::sync::Arc;

use ayumart_client::auth::EnvCredentials;
use ayumart_client::{CatalogApi, ClientConfig, Storefront};
use ayumart_core::catalog::count_label;
use ayumart_pages::products::ProductCard;
use ayumart_pages::{
    CategoriesPage, CategoriesState, HomePage, HomeState, ProductsPage, ProductsState,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ayumart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::debug!(base_url = %config.base_url, "Using catalog API");

    let storefront = Arc::new(Storefront::new(CatalogApi::new(
        &config,
        Arc::new(EnvCredentials),
    )));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("home") => render_home(storefront).await,
        Some("categories") => {
            let industry = args.get(1).map(String::as_str);
            let page = args.get(2).and_then(|p| p.parse().ok()).unwrap_or(1);
            render_categories(storefront, industry, page).await;
        }
        Some("products") => {
            render_products(storefront, args.get(1).map(String::as_str)).await;
        }
        _ => {
            tracing::error!(
                "Usage: ayumart-cli <home | categories <industry> [page] | products [industry]>"
            );
            std::process::exit(2);
        }
    }
}

async fn render_home(storefront: Arc<Storefront>) {
    let mut page = HomePage::new(storefront);
    page.refresh().await;

    if let HomeState::Ready(view) = page.state() {
        if view.degraded {
            println!("(showing fallback catalog data)");
        }
        println!("Industries");
        for industry in &view.industries {
            println!("  {:<24} {}", industry.name, count_label(industry.count));
        }
        println!();
        println!("Featured products");
        for card in &view.featured {
            print_product(card);
        }
    }
}

async fn render_categories(storefront: Arc<Storefront>, industry: Option<&str>, page_no: u32) {
    let mut page = CategoriesPage::new(storefront);
    page.select_industry(industry, page_no).await;

    match page.state() {
        CategoriesState::NoIndustrySelected => {
            println!("No industry selected.");
        }
        CategoriesState::Loading => {}
        CategoriesState::Ready(view) => {
            if let Some(notice) = view.notice() {
                println!("({notice} -- showing fallback catalog data)");
            }
            println!(
                "Categories in {} (page {}, {} products total)",
                view.industry, view.page, view.total_products
            );
            for card in &view.cards {
                println!(
                    "  {:<24} {}",
                    card.category.name,
                    count_label(card.category.count)
                );
            }
        }
    }
}

async fn render_products(storefront: Arc<Storefront>, industry: Option<&str>) {
    let mut page = ProductsPage::new(storefront);
    page.select_industry(industry).await;

    match page.state() {
        ProductsState::Loading => {}
        ProductsState::Ready(view) => {
            if let Some(notice) = view.notice() {
                println!("({notice} -- showing fallback catalog data)");
            }
            match &view.industry {
                Some(name) => println!("Products in {name}"),
                None => println!("All products"),
            }
            for card in &view.cards {
                print_product(card);
            }
        }
    }
}

fn print_product(card: &ProductCard) {
    let product = &card.product;
    let discount = if product.discount > 0 {
        format!(" (-{}%)", product.discount)
    } else {
        String::new()
    };
    println!(
        "  {:<28} Rs {:>8.2}{}  {:.1}/5 ({} reviews)  [{}]",
        product.name, product.price, discount, product.rating, product.reviews, product.category
    );
}
