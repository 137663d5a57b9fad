//! # Trolley
//!
//! The unified API for Trolley - client-side cart state with snapshot
//! persistence and stock-aware mutations.
//!
//! ## Overview
//!
//! Trolley provides a small, storage- and transport-agnostic library for:
//!
//! - **Cart state**: an ordered list of products with held quantities
//! - **Snapshots**: the cart serialized to a keyed slot after every
//!   successful mutation, and hydrated from it on open
//! - **Stock validation**: requested quantities checked against a live
//!   catalog before the cart changes
//! - **Notices**: failures mirrored to a user-facing notification sink
//!
//! ## Key Concepts
//!
//! - **Persist-then-commit**: the snapshot write always happens before the
//!   in-memory cart changes, so the slot never trails a visible mutation.
//! - **Typed outcomes**: out-of-stock and not-in-cart rejections are
//!   distinct error variants, not just notice strings.
//! - **Injected capabilities**: storage, catalog and notifier are passed
//!   in at construction; there are no ambient singletons.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trolley::{CartConfig, CartStore, TracingNotifier};
//! use trolley::catalog::HttpCatalog;
//! use trolley::core::ProductId;
//! use trolley::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("trolley.db").unwrap();
//!     let catalog = HttpCatalog::new("http://localhost:3333").unwrap();
//!
//!     let mut cart =
//!         CartStore::open(store, catalog, TracingNotifier, CartConfig::default()).await;
//!
//!     cart.add_product(ProductId::new(1)).await.unwrap();
//!     cart.update_product_amount(ProductId::new(1), 3).await.unwrap();
//!
//!     for item in cart.items() {
//!         println!("{} x{}", item.product.title, item.amount);
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `trolley::core` - Core cart types and the snapshot codec
//! - `trolley::store` - Snapshot persistence and SQLite
//! - `trolley::catalog` - Stock and product queries

pub mod cart;
pub mod error;
pub mod notify;

// Re-export component crates
pub use trolley_catalog as catalog;
pub use trolley_core as core;
pub use trolley_store as store;

// Re-export main types for convenience
pub use cart::{CartConfig, CartStore, CART_SNAPSHOT_KEY};
pub use error::{CartError, Result};
pub use notify::{Notifier, TracingNotifier};

// Re-export commonly used core types
pub use trolley_core::{Cart, CartItem, ProductId, ProductInfo, Stock};
