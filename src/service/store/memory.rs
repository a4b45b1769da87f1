//! In-memory implementation of the key-value store.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::base::types::{Res, Void};

use super::{GenericKvStore, KvStore};

impl KvStore {
    /// Creates an empty, process-local store.
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(MemoryKvStore::default()),
        }
    }
}

#[derive(Default)]
struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl GenericKvStore for MemoryKvStore {
    async fn ping(&self) -> Void {
        Ok(())
    }

    async fn get(&self, key: &str) -> Res<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Void {
        self.entries.write().await.insert(key.to_string(), value.to_string());

        Ok(())
    }

    async fn delete(&self, key: &str) -> Void {
        self.entries.write().await.remove(key);

        Ok(())
    }
}

// Tests.
