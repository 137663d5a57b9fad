//! # Trolley Catalog
//!
//! Catalog queries for Trolley: stock and product lookups against a remote
//! catalog service.
//!
//! ## Overview
//!
//! The cart facade needs two read-only views of the catalog: current stock
//! levels and product details. Both are expressed as traits so the facade
//! never depends on a concrete transport. [`HttpCatalog`] is the primary
//! implementation, [`MemoryCatalog`] serves tests.
//!
//! ## Key Types
//!
//! - [`StockQuery`] - Async trait for stock level lookups
//! - [`ProductQuery`] - Async trait for product detail lookups
//! - [`HttpCatalog`] - REST client implementing both traits
//! - [`MemoryCatalog`] - Seeded in-memory catalog for tests

pub mod error;
pub mod http;
pub mod memory;
pub mod traits;

pub use error::{CatalogError, Result};
pub use http::HttpCatalog;
pub use memory::MemoryCatalog;
pub use traits::{ProductQuery, StockQuery};
