//! Key-value storage for message mappings.
//!
//! The relay only ever needs single-key reads, writes and deletes, so the
//! `GenericKvStore` trait is deliberately small. Redis backs it in production;
//! an in-memory implementation backs tests and local runs.

pub mod memory;
pub mod redis;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Res, Void};

// Traits.

/// Generic key-value store trait that clients must implement.
#[async_trait]
pub trait GenericKvStore: Send + Sync + 'static {
    /// Check that the store is reachable.
    async fn ping(&self) -> Void;

    /// Get the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Res<Option<String>>;

    /// Store `value` under `key` with no expiry, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Void;

    /// Delete `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Void;
}

// Structs.

/// Key-value store client for pr-relay.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct KvStore {
    inner: Arc<dyn GenericKvStore>,
}

impl Deref for KvStore {
    type Target = dyn GenericKvStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl KvStore {
    pub fn new(inner: Arc<dyn GenericKvStore>) -> Self {
        Self { inner }
    }
}
