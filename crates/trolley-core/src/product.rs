//! Catalog wire types: product metadata and stock levels.
//!
//! Field names follow the catalog REST payloads (`GET /products/{id}` and
//! `GET /stock/{id}`), which is also the shape persisted in snapshots.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Product metadata as served by the catalog.
///
/// Price and image are opaque display data; the kernel stores and returns
/// them but never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price in the storefront's display currency.
    pub price: f64,
    /// Image URL.
    pub image: String,
}

/// Authoritative available quantity for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// The product this stock level belongs to.
    pub id: ProductId,
    /// Units currently available at the source of truth.
    pub amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_info_matches_catalog_payload() {
        let json = r#"{"id":1,"title":"Hover Sneaker","price":179.9,"image":"https://cdn.example/sneaker.jpg"}"#;
        let product: ProductInfo = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Hover Sneaker");
        assert_eq!(product.price, 179.9);
        assert_eq!(product.image, "https://cdn.example/sneaker.jpg");
    }

    #[test]
    fn test_stock_matches_catalog_payload() {
        let json = r#"{"id":3,"amount":5}"#;
        let stock: Stock = serde_json::from_str(json).unwrap();

        assert_eq!(stock.id, ProductId::new(3));
        assert_eq!(stock.amount, 5);
    }
}
