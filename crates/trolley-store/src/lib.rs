//! # Trolley Store
//!
//! Snapshot persistence for Trolley. Provides a trait-based interface for
//! keyed snapshot slots with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts snapshot persistence behind the
//! [`SnapshotStore`] trait, allowing the cart facade to be storage-agnostic.
//! The primary implementation is [`SqliteStore`], with [`MemoryStore`] for
//! testing.
//!
//! ## Key Types
//!
//! - [`SnapshotStore`] - The async trait for snapshot slot operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trolley_store::{SnapshotStore, SqliteStore};
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("trolley.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     store.write("cart", "[]").await.unwrap();
//!     let snapshot = store.read("cart").await.unwrap();
//!     assert_eq!(snapshot.as_deref(), Some("[]"));
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Opaque values**: snapshots are stored and returned verbatim
//! - **Last writer wins**: a write replaces the slot's previous value
//! - **Versioned schema**: migrations run on open and are idempotent

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::SnapshotStore;
