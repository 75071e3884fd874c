//! Home landing page.
//!
//! Assembles the industry tiles and a short featured-product strip from
//! two resilient fetches. The page has no URL parameter, so there is no
//! request sequencing here; each refresh simply replaces the view.

use std::sync::Arc;

use ayumart_core::catalog::Industry;
use ayumart_client::Storefront;

use crate::products::ProductCard;

/// Number of products shown in the featured strip.
pub const FEATURED_LIMIT: usize = 4;

/// Render state of the landing page.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeState {
    Loading,
    Ready(HomeView),
}

/// The committed landing view.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub industries: Vec<Industry>,
    pub featured: Vec<ProductCard>,
    /// Whether any part of the view came from the mock catalog.
    pub degraded: bool,
}

/// View-model for the landing page.
pub struct HomePage {
    storefront: Arc<Storefront>,
    state: HomeState,
}

impl HomePage {
    pub fn new(storefront: Arc<Storefront>) -> Self {
        Self {
            storefront,
            state: HomeState::Loading,
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// Load (or reload) the landing view.
    pub async fn refresh(&mut self) {
        self.state = HomeState::Loading;

        let industries = self.storefront.fetch_industries().await;
        let products = self.storefront.fetch_products(None).await;

        let degraded = industries.is_degraded() || products.is_degraded();
        let featured = products
            .into_value()
            .into_iter()
            .take(FEATURED_LIMIT)
            .map(ProductCard::new)
            .collect();

        self.state = HomeState::Ready(HomeView {
            industries: industries.into_value(),
            featured,
            degraded,
        });
    }
}
