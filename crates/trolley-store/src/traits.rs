//! SnapshotStore trait: the abstract interface for snapshot persistence.
//!
//! This trait allows the cart facade to be storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;

use crate::error::Result;

/// The SnapshotStore trait: async interface for keyed snapshot slots.
///
/// A snapshot store holds one serialized value per key and replaces it
/// wholesale on write. All methods are async to support both sync (SQLite)
/// and async backends. For SQLite, we use `spawn_blocking` internally to
/// avoid blocking the runtime.
///
/// # Design Notes
///
/// - **Opaque values**: The store never interprets the stored string.
///   Encoding and validation live with the caller.
/// - **Last writer wins**: A write replaces whatever the slot held before.
/// - **No delete**: Callers overwrite a slot with its empty form instead
///   of removing it.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the snapshot stored under `key`.
    ///
    /// Returns `None` if the slot has never been written.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous snapshot.
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}
