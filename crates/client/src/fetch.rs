//! Resilient fetch layer: every call resolves to renderable data.
//!
//! [`Storefront`] wraps [`CatalogApi`] with the fetch-or-mock policy the
//! listing pages rely on: one request per call, no retry, and on any
//! failure the hard-coded mock catalog is substituted so a page never
//! renders empty because the backend is down. Unlike the raw API layer,
//! nothing here returns `Result` — the degraded branch is carried in the
//! outcome type instead.

use ayumart_core::catalog::{Category, Industry, Product};
use ayumart_core::{mock, pagination};

use crate::api::{ApiError, CatalogApi};
use crate::normalize;

// ---------------------------------------------------------------------------
// FetchOutcome
// ---------------------------------------------------------------------------

/// Result of a resilient fetch: real backend data, or the mock fallback
/// together with the failure that forced it.
///
/// Callers that only render can treat both branches alike via
/// [`FetchOutcome::value`]; callers that surface a degraded-data notice
/// branch on [`FetchOutcome::is_degraded`].
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Normalized data from a successful backend response.
    Fresh(T),
    /// Mock fallback data substituted after a failure.
    Degraded {
        value: T,
        /// The failure that was masked.
        reason: ApiError,
    },
}

impl<T> FetchOutcome<T> {
    /// The renderable payload, regardless of branch.
    pub fn value(&self) -> &T {
        match self {
            FetchOutcome::Fresh(value) => value,
            FetchOutcome::Degraded { value, .. } => value,
        }
    }

    /// Consume the outcome, yielding the payload.
    pub fn into_value(self) -> T {
        match self {
            FetchOutcome::Fresh(value) => value,
            FetchOutcome::Degraded { value, .. } => value,
        }
    }

    /// Whether the payload is mock fallback data.
    pub fn is_degraded(&self) -> bool {
        matches!(self, FetchOutcome::Degraded { .. })
    }

    /// The masked failure, when degraded.
    pub fn degraded_reason(&self) -> Option<&ApiError> {
        match self {
            FetchOutcome::Fresh(_) => None,
            FetchOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}

// ---------------------------------------------------------------------------
// Storefront
// ---------------------------------------------------------------------------

/// The fetch surface consumed by pages.
pub struct Storefront {
    api: CatalogApi,
}

impl Storefront {
    pub fn new(api: CatalogApi) -> Self {
        Self { api }
    }

    /// Fetch the industry list, degrading to the mock industries.
    pub async fn fetch_industries(&self) -> FetchOutcome<Vec<Industry>> {
        match self.api.list_industries().await {
            Ok(raw) => FetchOutcome::Fresh(normalize::industries(raw)),
            Err(e) => {
                tracing::warn!(error = %e, "Industry fetch failed, serving mock catalog");
                FetchOutcome::Degraded {
                    value: mock::industries(),
                    reason: e,
                }
            }
        }
    }

    /// Fetch one page of an industry's categories, degrading to that
    /// industry's mock list (generic when no specific mock exists).
    ///
    /// Page and limit are clamped into the supported ranges before the
    /// request goes out.
    pub async fn fetch_categories(
        &self,
        industry: &str,
        page: u32,
        limit: u32,
    ) -> FetchOutcome<Vec<Category>> {
        let page = pagination::clamp_page(page);
        let limit = pagination::clamp_limit(limit);

        match self.api.list_categories(industry, page, limit).await {
            Ok(raw) => FetchOutcome::Fresh(normalize::categories(raw)),
            Err(e) => {
                tracing::warn!(
                    industry,
                    page,
                    error = %e,
                    "Category fetch failed, serving mock catalog"
                );
                FetchOutcome::Degraded {
                    value: mock::categories_for(industry),
                    reason: e,
                }
            }
        }
    }

    /// Fetch the aggregate product count for an industry, degrading to
    /// the sum of the industry's mock category counts.
    pub async fn fetch_product_count(&self, industry: &str) -> FetchOutcome<u64> {
        match self.api.count_products(industry).await {
            Ok(aggregate) => FetchOutcome::Fresh(aggregate.count),
            Err(e) => {
                tracing::warn!(
                    industry,
                    error = %e,
                    "Product count fetch failed, serving mock total"
                );
                FetchOutcome::Degraded {
                    value: mock::product_count_for(industry),
                    reason: e,
                }
            }
        }
    }

    /// Fetch product listings, degrading to the mock products.
    pub async fn fetch_products(&self, industry: Option<&str>) -> FetchOutcome<Vec<Product>> {
        match self.api.list_products(industry).await {
            Ok(raw) => FetchOutcome::Fresh(normalize::products(raw)),
            Err(e) => {
                tracing::warn!(
                    industry = industry.unwrap_or("<all>"),
                    error = %e,
                    "Product fetch failed, serving mock catalog"
                );
                FetchOutcome::Degraded {
                    value: mock::products(),
                    reason: e,
                }
            }
        }
    }
}
