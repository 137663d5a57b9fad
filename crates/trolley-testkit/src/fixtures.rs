//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use trolley::{CartConfig, CartStore, Notifier};
use trolley_catalog::{CatalogError, MemoryCatalog, ProductQuery, StockQuery};
use trolley_core::{ProductId, ProductInfo, Stock};
use trolley_store::{MemoryStore, SnapshotStore, StoreError};

/// Notifier that records every notice for later assertions.
///
/// Clones share the same message log.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices seen so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// The most recent notice, if any.
    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Store whose writes always fail.
///
/// Reads serve the optional seeded snapshot, an empty slot by default, so
/// hydration still works. Useful for asserting that a failed snapshot write
/// leaves the cart untouched, whether the cart started empty or populated.
#[derive(Default)]
pub struct FailingStore {
    snapshot: Option<String>,
}

impl FailingStore {
    /// A failing store that hydrates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// A failing store that hydrates the given snapshot text.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
        }
    }
}

#[async_trait]
impl SnapshotStore for FailingStore {
    async fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.snapshot.clone())
    }

    async fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Task("write disabled".to_string()))
    }
}

/// Catalog whose queries always fail, as if the service were down.
pub struct FailingCatalog;

#[async_trait]
impl StockQuery for FailingCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        Err(CatalogError::Connection(format!(
            "catalog down, cannot fetch stock for {}",
            id
        )))
    }
}

#[async_trait]
impl ProductQuery for FailingCatalog {
    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError> {
        Err(CatalogError::Connection(format!(
            "catalog down, cannot fetch product {}",
            id
        )))
    }
}

/// A test fixture with in-memory store, catalog and recording notifier.
pub struct TestFixture {
    pub store: MemoryStore,
    pub catalog: MemoryCatalog,
    pub notifier: RecordingNotifier,
    pub config: CartConfig,
}

impl TestFixture {
    /// Create a fresh fixture with empty components.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            catalog: MemoryCatalog::new(),
            notifier: RecordingNotifier::new(),
            config: CartConfig::default(),
        }
    }

    /// Seed the catalog with a product and its stock level.
    pub fn stock_product(&self, id: u64, title: &str, price: f64, stock: u32) {
        self.catalog.insert(product_info(id, title, price), stock);
    }

    /// Open a cart store over the fixture's components.
    ///
    /// Clone `catalog` and `notifier` handles off the fixture first if the
    /// test needs to steer stock or read notices afterwards.
    pub async fn open(self) -> CartStore<MemoryStore, MemoryCatalog, RecordingNotifier> {
        CartStore::open(self.store, self.catalog, self.notifier, self.config).await
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a ProductInfo with a derived image URL.
pub fn product_info(id: u64, title: &str, price: f64) -> ProductInfo {
    ProductInfo {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        image: format!("https://cdn.example/products/{}.jpg", id),
    }
}

/// Generate `count` distinct products with ids starting at 1.
pub fn sample_products(count: usize) -> Vec<ProductInfo> {
    const PRICES: [f64; 5] = [9.9, 19.9, 49.9, 99.9, 179.9];

    (1..=count as u64)
        .map(|i| {
            product_info(
                i,
                &format!("Sample Product {}", i),
                PRICES[(i as usize - 1) % PRICES.len()],
            )
        })
        .collect()
}
