//! Product listing page.
//!
//! Renders product cards, optionally scoped to one industry. Each card
//! pairs the normalized product with its own [`ImageSlot`], so image
//! fallback runs per card, independent of the page load. Loads use the
//! same begin/load/commit cycle as the category browser.

use std::sync::Arc;

use ayumart_core::catalog::Product;
use ayumart_client::Storefront;

use crate::image_slot::ImageSlot;
use crate::sequence::{RequestSequence, RequestTicket};

/// Inline notice rendered when the view holds mock data.
pub const DEGRADED_NOTICE: &str = "Failed to load products";

/// One rendered product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub product: Product,
    pub image: ImageSlot,
}

impl ProductCard {
    /// Build a card; the image slot falls back through the resolver on
    /// the product's *category* name.
    pub fn new(product: Product) -> Self {
        let image = ImageSlot::new(product.image.clone(), product.category.clone());
        Self { product, image }
    }
}

/// Render state of the product listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsState {
    Loading,
    Ready(ProductsView),
}

/// The committed product listing view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsView {
    /// Industry scope, `None` for the full listing.
    pub industry: Option<String>,
    pub cards: Vec<ProductCard>,
    pub degraded: bool,
}

impl ProductsView {
    pub fn notice(&self) -> Option<&'static str> {
        self.degraded.then_some(DEGRADED_NOTICE)
    }
}

/// An in-flight load.
#[derive(Debug)]
pub struct ProductsRequest {
    industry: Option<String>,
    ticket: RequestTicket,
}

/// A finished load, ready to commit.
#[derive(Debug)]
pub struct ProductsLoad {
    view: ProductsView,
    ticket: RequestTicket,
}

/// View-model for the product listing page.
pub struct ProductsPage {
    storefront: Arc<Storefront>,
    sequence: RequestSequence,
    state: ProductsState,
}

impl ProductsPage {
    pub fn new(storefront: Arc<Storefront>) -> Self {
        Self {
            storefront,
            sequence: RequestSequence::new(),
            state: ProductsState::Loading,
        }
    }

    pub fn state(&self) -> &ProductsState {
        &self.state
    }

    /// React to an industry scope change; the page enters `Loading`.
    pub fn begin_select(&mut self, industry: Option<&str>) -> ProductsRequest {
        self.state = ProductsState::Loading;
        ProductsRequest {
            industry: industry.map(str::to_string),
            ticket: self.sequence.begin(),
        }
    }

    /// Run the fetch for a request without touching page state.
    pub async fn load(&self, request: ProductsRequest) -> ProductsLoad {
        let outcome = self
            .storefront
            .fetch_products(request.industry.as_deref())
            .await;

        let degraded = outcome.is_degraded();
        let cards = outcome.into_value().into_iter().map(ProductCard::new).collect();

        ProductsLoad {
            view: ProductsView {
                industry: request.industry,
                cards,
                degraded,
            },
            ticket: request.ticket,
        }
    }

    /// Commit a finished load, unless a newer selection superseded it.
    pub fn commit(&mut self, load: ProductsLoad) -> bool {
        if !load.ticket.is_current() {
            tracing::debug!("Dropping stale products response");
            return false;
        }
        self.state = ProductsState::Ready(load.view);
        true
    }

    /// Convenience for the common path: begin, load, commit.
    pub async fn select_industry(&mut self, industry: Option<&str>) {
        let request = self.begin_select(industry);
        let load = self.load(request).await;
        self.commit(load);
    }
}
