#![forbid(unsafe_code)]

//! Travel-catalog demo: three reorderable collections on one engine.
//!
//! # Role in Lineup
//! The reference integration. The original admin product repeated the same
//! reorder plumbing in every view; here the tours, gallery-categories, and
//! gallery-subcategories screens are three instances of the same
//! [`CollectionView`](app::CollectionView), parameterized only by their
//! record type and backend.
//!
//! # How it fits in the system
//! `collections` defines the domain records, `store` an in-memory backend
//! honoring the real API's reorder contract, and `app` the view wiring. The
//! binary is a small line-driven console for poking at it: drag, filter,
//! inject a failure, watch the rollback.

pub mod app;
pub mod collections;
pub mod store;

pub use app::{CatalogApp, CollectionView};
pub use collections::{CatalogRecord, GalleryCategory, GallerySubcategory, Tour, TourStatus};
pub use store::InMemoryCollection;
