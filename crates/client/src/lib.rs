//! REST client for the AyuMart storefront backend.
//!
//! Layered in two halves:
//!
//! - [`api::CatalogApi`] is the raw HTTP surface: one method per backend
//!   endpoint, returning `Result` with a full error taxonomy.
//! - [`fetch::Storefront`] is what pages consume: every call resolves to
//!   a renderable [`fetch::FetchOutcome`], degrading to the mock catalog
//!   on any failure instead of surfacing an error.

pub mod api;
pub mod auth;
pub mod config;
pub mod fetch;
pub mod normalize;

pub use api::{ApiError, CatalogApi};
pub use auth::CredentialStore;
pub use config::ClientConfig;
pub use fetch::{FetchOutcome, Storefront};
