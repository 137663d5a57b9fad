//! Error types for the cart core.

use thiserror::Error;

use crate::types::ProductId;

/// Violations of the cart's structural invariants.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An entry for this product already exists.
    #[error("product {0} is already in the cart")]
    DuplicateProduct(ProductId),

    /// No entry for this product exists.
    #[error("product {0} is not in the cart")]
    UnknownProduct(ProductId),

    /// Cart amounts are always at least 1.
    #[error("invalid amount {amount} for product {product}")]
    InvalidAmount {
        /// The product the request addressed.
        product: ProductId,
        /// The rejected amount.
        amount: u32,
    },
}

/// Errors from the snapshot codec.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The cart could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    /// The stored value is not valid snapshot JSON.
    #[error("failed to decode snapshot: {0}")]
    Decode(String),

    /// The stored value parsed but violates cart invariants.
    #[error("snapshot violates cart invariants: {0}")]
    Invalid(#[from] CoreError),
}
