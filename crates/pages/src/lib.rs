//! Page view-models for the AyuMart storefront.
//!
//! Each page owns its render state and drives the resilient fetch layer:
//! state transitions never fail, every failure path lands in a
//! renderable view. Pages that react to URL parameters guard against
//! out-of-order responses with a per-page request sequence, so a stale
//! fetch can never overwrite newer state.

pub mod categories;
pub mod home;
pub mod image_slot;
pub mod products;
pub mod sequence;

pub use categories::{CategoriesPage, CategoriesState, CategoriesView, CategoryCard};
pub use home::{HomePage, HomeState, HomeView};
pub use image_slot::{ImageSlot, ImageStage};
pub use products::{ProductCard, ProductsPage, ProductsState, ProductsView};
pub use sequence::{RequestSequence, RequestTicket};
