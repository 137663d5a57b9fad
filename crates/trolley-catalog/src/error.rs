//! Error types for the catalog module.

use thiserror::Error;
use trolley_core::ProductId;

/// Errors that can occur when querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Could not reach the catalog service.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Catalog answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The catalog has no entry for this product.
    #[error("product {0} not found in catalog")]
    NotFound(ProductId),

    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
