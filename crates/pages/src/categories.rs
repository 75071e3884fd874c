//! Category browser page.
//!
//! Driven by an optional industry URL parameter. Without a selected
//! industry the page renders its "no industry selected" state and issues
//! no network calls at all; with one it loads a page of categories plus
//! the industry's aggregate product count. Loads go through the
//! begin/load/commit cycle so a stale response can never overwrite a
//! newer selection.

use std::sync::Arc;

use ayumart_core::catalog::Category;
use ayumart_core::pagination;
use ayumart_client::Storefront;

use crate::image_slot::ImageSlot;
use crate::sequence::{RequestSequence, RequestTicket};

/// Inline notice rendered when the view holds mock data.
pub const DEGRADED_NOTICE: &str = "Failed to load categories";

/// One rendered category card.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub category: Category,
    pub image: ImageSlot,
}

impl CategoryCard {
    fn new(category: Category) -> Self {
        let image = ImageSlot::new(category.image.clone(), category.name.clone());
        Self { category, image }
    }
}

/// Render state of the category browser.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesState {
    /// No industry in the URL; nothing to fetch.
    NoIndustrySelected,
    /// A load is in flight.
    Loading,
    /// A committed view, fresh or degraded.
    Ready(CategoriesView),
}

/// The committed category browser view.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoriesView {
    pub industry: String,
    pub cards: Vec<CategoryCard>,
    /// Aggregate product count across the whole industry.
    pub total_products: u64,
    pub page: u32,
    /// Whether any part of the view came from the mock catalog.
    pub degraded: bool,
}

impl CategoriesView {
    /// Inline notice to render, when degraded.
    pub fn notice(&self) -> Option<&'static str> {
        self.degraded.then_some(DEGRADED_NOTICE)
    }
}

/// An in-flight load, created by [`CategoriesPage::begin_select`].
#[derive(Debug)]
pub struct CategoriesRequest {
    industry: String,
    page: u32,
    ticket: RequestTicket,
}

/// A finished load, ready to commit.
#[derive(Debug)]
pub struct CategoriesLoad {
    view: CategoriesView,
    ticket: RequestTicket,
}

/// View-model for the category browser page.
pub struct CategoriesPage {
    storefront: Arc<Storefront>,
    sequence: RequestSequence,
    state: CategoriesState,
}

impl CategoriesPage {
    pub fn new(storefront: Arc<Storefront>) -> Self {
        Self {
            storefront,
            sequence: RequestSequence::new(),
            state: CategoriesState::NoIndustrySelected,
        }
    }

    pub fn state(&self) -> &CategoriesState {
        &self.state
    }

    /// React to an industry parameter change.
    ///
    /// With no industry the page settles immediately on
    /// [`CategoriesState::NoIndustrySelected`] and returns `None` — no
    /// request is issued. Otherwise the page enters `Loading` and the
    /// returned request must be passed to [`CategoriesPage::load`].
    pub fn begin_select(
        &mut self,
        industry: Option<&str>,
        page: u32,
    ) -> Option<CategoriesRequest> {
        match industry {
            None => {
                self.state = CategoriesState::NoIndustrySelected;
                None
            }
            Some(name) => {
                self.state = CategoriesState::Loading;
                Some(CategoriesRequest {
                    industry: name.to_string(),
                    page: pagination::clamp_page(page),
                    ticket: self.sequence.begin(),
                })
            }
        }
    }

    /// Run the fetches for a request. Does not touch page state; the
    /// result is applied by [`CategoriesPage::commit`].
    pub async fn load(&self, request: CategoriesRequest) -> CategoriesLoad {
        let categories = self
            .storefront
            .fetch_categories(
                &request.industry,
                request.page,
                pagination::DEFAULT_CATEGORY_LIMIT,
            )
            .await;
        let total = self.storefront.fetch_product_count(&request.industry).await;

        let degraded = categories.is_degraded() || total.is_degraded();
        let cards = categories
            .into_value()
            .into_iter()
            .map(CategoryCard::new)
            .collect();

        CategoriesLoad {
            view: CategoriesView {
                industry: request.industry,
                cards,
                total_products: total.into_value(),
                page: request.page,
                degraded,
            },
            ticket: request.ticket,
        }
    }

    /// Commit a finished load, unless a newer selection superseded it.
    ///
    /// Returns whether the view was applied; a stale load is dropped.
    pub fn commit(&mut self, load: CategoriesLoad) -> bool {
        if !load.ticket.is_current() {
            tracing::debug!(
                industry = %load.view.industry,
                "Dropping stale categories response"
            );
            return false;
        }
        self.state = CategoriesState::Ready(load.view);
        true
    }

    /// Convenience for the common path: begin, load, commit.
    pub async fn select_industry(&mut self, industry: Option<&str>, page: u32) {
        if let Some(request) = self.begin_select(industry, page) {
            let load = self.load(request).await;
            self.commit(load);
        }
    }
}
