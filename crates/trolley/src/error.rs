//! Error types for the cart facade.

use thiserror::Error;
use trolley_catalog::CatalogError;
use trolley_core::{CoreError, ProductId, SnapshotError};
use trolley_store::StoreError;

/// Errors that can occur during cart operations.
///
/// Business-rule rejections ([`OutOfStock`](CartError::OutOfStock),
/// [`NotInCart`](CartError::NotInCart)) are distinct variants so callers
/// can react to them without parsing notice text.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds the available stock.
    #[error("product {product} out of stock: requested {requested}, available {available}")]
    OutOfStock {
        /// The product whose stock ran out.
        product: ProductId,
        /// The quantity the operation asked for.
        requested: u32,
        /// The quantity the catalog reports as available.
        available: u32,
    },

    /// The operation targets a product the cart does not hold.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// Catalog query error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Snapshot store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Snapshot encoding error.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Cart state error.
    #[error("cart state error: {0}")]
    State(#[from] CoreError),
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
