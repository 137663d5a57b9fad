//! Catalog query traits: the abstract interface for stock and product lookups.
//!
//! These traits allow the cart facade to be transport-agnostic.
//! Implementations include HTTP (primary) and in-memory (for tests).

use async_trait::async_trait;
use trolley_core::{ProductId, ProductInfo, Stock};

use crate::error::Result;

/// Query the available stock for a product.
///
/// # Design Notes
///
/// - **Fresh reads**: every call hits the backing catalog. There is no
///   caching layer; stock changes between calls are expected.
/// - **Missing products**: an id the catalog does not know yields
///   [`CatalogError::NotFound`](crate::CatalogError::NotFound).
#[async_trait]
pub trait StockQuery: Send + Sync {
    /// Fetch the current stock level for `id`.
    async fn stock(&self, id: ProductId) -> Result<Stock>;
}

/// Query the catalog details for a product.
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Fetch title, price and image for `id`.
    async fn product(&self, id: ProductId) -> Result<ProductInfo>;
}
