//! The CartStore: unified API for cart state.
//!
//! The CartStore brings together cart state, snapshot persistence, and
//! catalog queries into a cohesive interface for building storefronts.

use trolley_catalog::{ProductQuery, StockQuery};
use trolley_core::{snapshot, Cart, CartItem, ProductId};
use trolley_store::SnapshotStore;

use crate::error::{CartError, Result};
use crate::notify::{self, Notifier};

/// Default snapshot slot for the serialized cart.
pub const CART_SNAPSHOT_KEY: &str = "trolley:cart";

/// Configuration for the CartStore.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key of the snapshot slot holding the serialized cart.
    pub snapshot_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            snapshot_key: CART_SNAPSHOT_KEY.to_string(),
        }
    }
}

/// The main CartStore struct.
///
/// Provides a unified API for:
/// - Adding, removing and re-quantifying cart entries
/// - Persisting the cart as a snapshot after every successful mutation
/// - Validating requested quantities against live stock levels
/// - Surfacing failures as user notices
///
/// Every failure is returned as a typed [`CartError`] and mirrored to the
/// injected [`Notifier`], so callers can branch on the outcome while the
/// UI still shows the familiar notice.
///
/// Mutations take `&mut self`: one operation completes its queries, its
/// snapshot write and its in-memory commit before another can start.
pub struct CartStore<S: SnapshotStore, C: StockQuery + ProductQuery, N: Notifier> {
    /// The snapshot storage backend.
    store: S,
    /// Catalog queries for stock levels and product details.
    catalog: C,
    /// Sink for user-facing error notices.
    notifier: N,
    /// Configuration.
    config: CartConfig,
    /// The live cart.
    cart: Cart,
}

impl<S: SnapshotStore, C: StockQuery + ProductQuery, N: Notifier> CartStore<S, C, N> {
    /// Open a cart store, hydrating the cart from its snapshot slot.
    ///
    /// Hydration never fails: a missing slot yields an empty cart, and an
    /// unreadable snapshot is discarded with a warning rather than
    /// poisoning the session.
    pub async fn open(store: S, catalog: C, notifier: N, config: CartConfig) -> Self {
        let cart = match store.read(&config.snapshot_key).await {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(
                        "Discarding unreadable cart snapshot under {:?}: {}",
                        config.snapshot_key,
                        e
                    );
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read cart snapshot under {:?}: {}",
                    config.snapshot_key,
                    e
                );
                Cart::new()
            }
        };

        Self {
            store,
            catalog,
            notifier,
            config,
            cart,
        }
    }

    /// The live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The cart entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cart Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add one unit of a product to the cart.
    ///
    /// A product already in the cart has its amount incremented, but only
    /// after the catalog confirms stock beyond the held amount. A new
    /// product is fetched from the catalog and appended with amount 1.
    pub async fn add_product(&mut self, id: ProductId) -> Result<()> {
        match self.try_add_product(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notify(&err, notify::NOTICE_ADD_FAILED);
                Err(err)
            }
        }
    }

    /// Remove a product's entry from the cart.
    pub async fn remove_product(&mut self, id: ProductId) -> Result<()> {
        match self.try_remove_product(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notify(&err, notify::NOTICE_REMOVE_FAILED);
                Err(err)
            }
        }
    }

    /// Set a product's held amount to exactly `amount`.
    ///
    /// An `amount` of zero is ignored: no change, no notice.
    pub async fn update_product_amount(&mut self, id: ProductId, amount: u32) -> Result<()> {
        match self.try_update_amount(id, amount).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notify(&err, notify::NOTICE_UPDATE_FAILED);
                Err(err)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    async fn try_add_product(&mut self, id: ProductId) -> Result<()> {
        let mut next = self.cart.clone();

        if let Some(held) = next.amount_of(id) {
            let stock = self.catalog.stock(id).await?;
            if stock.amount <= held {
                return Err(CartError::OutOfStock {
                    product: id,
                    requested: held.saturating_add(1),
                    available: stock.amount,
                });
            }
            next.increment(id)?;
        } else {
            let product = self.catalog.product(id).await?;
            next.add_new(product)?;
        }

        self.persist_and_commit(next).await
    }

    async fn try_remove_product(&mut self, id: ProductId) -> Result<()> {
        let mut next = self.cart.clone();

        if next.remove(id).is_none() {
            return Err(CartError::NotInCart(id));
        }

        self.persist_and_commit(next).await
    }

    async fn try_update_amount(&mut self, id: ProductId, amount: u32) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        // Stock is queried before the presence check, so a catalog failure
        // surfaces even for a product the cart does not hold.
        let stock = self.catalog.stock(id).await?;

        if !self.cart.contains(id) {
            return Err(CartError::NotInCart(id));
        }

        if stock.amount < amount {
            return Err(CartError::OutOfStock {
                product: id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        next.set_amount(id, amount)?;

        self.persist_and_commit(next).await
    }

    /// Write the successor cart to the snapshot slot, then swap it in.
    ///
    /// The snapshot write precedes the in-memory commit: a failed write
    /// leaves the observable cart unchanged.
    async fn persist_and_commit(&mut self, next: Cart) -> Result<()> {
        let encoded = snapshot::encode(&next)?;
        self.store.write(&self.config.snapshot_key, &encoded).await?;
        self.cart = next;
        Ok(())
    }

    /// Mirror a failure to the notifier.
    ///
    /// Out-of-stock rejections keep their specific notice; everything else
    /// collapses into the per-operation fallback.
    fn notify(&self, err: &CartError, fallback: &str) {
        let message = match err {
            CartError::OutOfStock { .. } => notify::NOTICE_OUT_OF_STOCK,
            _ => fallback,
        };
        self.notifier.notify_error(message);
    }
}
