//! In-memory implementation of the catalog query traits.
//!
//! This is primarily for testing. Products and stock levels are seeded
//! up front and can be adjusted while a test runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use trolley_core::{ProductId, ProductInfo, Stock};

use crate::error::{CatalogError, Result};
use crate::traits::{ProductQuery, StockQuery};

/// In-memory catalog implementation.
///
/// Thread-safe via RwLock. Clones are handles to the same catalog, so a
/// test can keep one handle and adjust stock after giving the other away.
#[derive(Clone)]
pub struct MemoryCatalog {
    inner: Arc<RwLock<MemoryCatalogInner>>,
}

struct MemoryCatalogInner {
    /// Product details by id.
    products: HashMap<ProductId, ProductInfo>,

    /// Stock levels by id.
    stock: HashMap<ProductId, u32>,
}

impl MemoryCatalog {
    /// Create a new empty in-memory catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryCatalogInner {
                products: HashMap::new(),
                stock: HashMap::new(),
            })),
        }
    }

    /// Add a product to the catalog with an initial stock level.
    pub fn insert(&self, product: ProductInfo, stock_amount: u32) {
        let mut inner = self.inner.write().unwrap();
        inner.stock.insert(product.id, stock_amount);
        inner.products.insert(product.id, product);
    }

    /// Adjust the stock level of a known product.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        let mut inner = self.inner.write().unwrap();
        inner.stock.insert(id, amount);
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StockQuery for MemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock> {
        let inner = self.inner.read().unwrap();
        inner
            .stock
            .get(&id)
            .map(|&amount| Stock { id, amount })
            .ok_or(CatalogError::NotFound(id))
    }
}

#[async_trait]
impl ProductQuery for MemoryCatalog {
    async fn product(&self, id: ProductId) -> Result<ProductInfo> {
        let inner = self.inner.read().unwrap();
        inner
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> ProductInfo {
        ProductInfo {
            id: ProductId::new(id),
            title: format!("product {}", id),
            price: 10.0,
            image: format!("https://cdn.example/{}.jpg", id),
        }
    }

    #[tokio::test]
    async fn test_insert_then_query() {
        let catalog = MemoryCatalog::new();
        catalog.insert(product(1), 5);

        let stock = catalog.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock.amount, 5);

        let info = catalog.product(ProductId::new(1)).await.unwrap();
        assert_eq!(info.title, "product 1");
    }

    #[tokio::test]
    async fn test_set_stock_changes_later_reads() {
        let catalog = MemoryCatalog::new();
        catalog.insert(product(1), 5);
        catalog.set_stock(ProductId::new(1), 2);

        let stock = catalog.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock.amount, 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let catalog = MemoryCatalog::new();
        let handle = catalog.clone();

        catalog.insert(product(1), 5);
        handle.set_stock(ProductId::new(1), 1);

        let stock = catalog.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock.amount, 1);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let catalog = MemoryCatalog::new();

        assert!(matches!(
            catalog.stock(ProductId::new(9)).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            catalog.product(ProductId::new(9)).await,
            Err(CatalogError::NotFound(_))
        ));
    }
}
