//! Domain core for the AyuMart storefront.
//!
//! Pure, I/O-free building blocks shared by the client and page layers:
//! entity types and normalization helpers, the category icon resolver,
//! hard-coded fallback catalog data, and pagination defaults.

pub mod catalog;
pub mod icon;
pub mod mock;
pub mod pagination;
