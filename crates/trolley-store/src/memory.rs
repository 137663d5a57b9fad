//! In-memory implementation of the SnapshotStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::SnapshotStore;

/// In-memory snapshot store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a slot directly, bypassing the async interface.
    ///
    /// Useful for setting up hydration scenarios in tests.
    pub fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.write().unwrap().insert(key.into(), value.into());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().unwrap();
        Ok(slots.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().unwrap();
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();

        assert_eq!(store.read("cart").await.unwrap(), None);

        store.write("cart", "[]").await.unwrap();
        assert_eq!(store.read("cart").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryStore::new();

        store.write("cart", "first").await.unwrap();
        store.write("cart", "second").await.unwrap();

        assert_eq!(
            store.read("cart").await.unwrap(),
            Some("second".to_string())
        );
    }

    #[tokio::test]
    async fn test_memory_store_keys_are_independent() {
        let store = MemoryStore::new();

        store.write("a", "1").await.unwrap();
        store.write("b", "2").await.unwrap();

        assert_eq!(store.read("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(store.read("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_seed_shows_up_in_reads() {
        let store = MemoryStore::new();
        store.seed("cart", "[1]");

        assert_eq!(store.read("cart").await.unwrap(), Some("[1]".to_string()));
    }
}
