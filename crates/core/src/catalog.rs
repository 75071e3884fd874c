//! Storefront entity types and normalization helpers.
//!
//! Defines the display shapes for industries, categories, and products,
//! plus the deterministic name-to-image-path derivation and the cosmetic
//! product-count synthesis used when the backend omits a count.

use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Derived image paths
// ---------------------------------------------------------------------------

/// Prefix for image paths derived from an entity name.
pub const DERIVED_IMAGE_PREFIX: &str = "/assets/categories/";

/// File extension for derived image paths.
pub const DERIVED_IMAGE_EXT: &str = ".jpg";

// ---------------------------------------------------------------------------
// Synthesized counts
// ---------------------------------------------------------------------------

/// Inclusive lower bound for a synthesized product count.
pub const SYNTH_COUNT_MIN: u32 = 10;

/// Inclusive upper bound for a synthesized product count.
pub const SYNTH_COUNT_MAX: u32 = 59;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A top-level product vertical (e.g. "Ayurveda").
///
/// Same display shape as [`Category`], one grouping level above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    pub id: u32,
    pub name: String,
    /// Non-empty image path: the backend URL or a derived fallback.
    pub image: String,
    /// Displayed as "N+ Products". Synthesized when the backend omits it.
    pub count: u32,
}

/// A grouping of products within an industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Non-empty image path: the backend URL or a derived fallback.
    pub image: String,
    /// Displayed as "N+ Products". Synthesized when the backend omits it.
    pub count: u32,
}

/// A single product listing card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Discount percentage in `0..=100`; `0` means no discount.
    pub discount: u8,
    /// Mean review rating in `0.0..=5.0`; `0.0` when unreviewed.
    pub rating: f32,
    /// Number of reviews behind [`Product::rating`].
    pub reviews: u32,
    pub category: String,
    /// Non-empty image path: the first backend image or a derived fallback.
    pub image: String,
}

impl Product {
    /// Price after applying the discount percentage.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - f64::from(self.discount) / 100.0)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Derive an image path from an entity name.
///
/// Convention: `{prefix}{slug}{ext}` where the slug is the trimmed,
/// lower-cased name with spaces replaced by hyphens.
///
/// # Examples
///
/// ```
/// use ayumart_core::catalog::derived_image_path;
///
/// assert_eq!(derived_image_path("Hair Oil"), "/assets/categories/hair-oil.jpg");
/// assert_eq!(derived_image_path("Soap"), "/assets/categories/soap.jpg");
/// ```
pub fn derived_image_path(name: &str) -> String {
    format!(
        "{}{}{}",
        DERIVED_IMAGE_PREFIX,
        name.trim().to_lowercase().replace(' ', "-"),
        DERIVED_IMAGE_EXT
    )
}

/// Synthesize a plausible product count in
/// `[SYNTH_COUNT_MIN, SYNTH_COUNT_MAX]`.
///
/// Purely cosmetic; not stable across repeated calls.
pub fn synthesize_count() -> u32 {
    rand::rng().random_range(SYNTH_COUNT_MIN..=SYNTH_COUNT_MAX)
}

/// Format a count the way listing cards display it.
pub fn count_label(count: u32) -> String {
    format!("{count}+ Products")
}
