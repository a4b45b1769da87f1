//! Redis implementation of the key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use fred::{
    prelude::{Client, ClientLike, KeysInterface},
    types::config::{Config as RedisConfig, ServerConfig},
};
use tracing::{info, instrument};

use crate::base::{
    config::{Config, split_host_port},
    types::{Res, Void},
};

use super::{GenericKvStore, KvStore};

impl KvStore {
    /// Connects to Redis and verifies the connection with a `PING`.
    pub async fn redis(config: &Config) -> Res<Self> {
        let store = RedisKvStore::new(config).await?;
        Ok(Self { inner: Arc::new(store) })
    }
}

/// Redis store implementation.
#[derive(Clone)]
struct RedisKvStore {
    client: Client,
}

impl RedisKvStore {
    #[instrument(name = "RedisKvStore::new", skip_all)]
    async fn new(config: &Config) -> Res<Self> {
        let (host, port) = split_host_port(&config.redis_addr)?;

        let redis_config = RedisConfig {
            server: ServerConfig::new_centralized(host, port),
            password: (!config.redis_pass.is_empty()).then(|| config.redis_pass.clone()),
            database: Some(0),
            ..Default::default()
        };

        let client = Client::new(redis_config, None, None, None);
        client.connect();
        client.wait_for_connect().await.map_err(|e| anyhow::anyhow!("Error connecting to Redis: {}", e))?;

        let store = Self { client };
        store.ping().await?;

        info!("Connected to Redis at {}.", config.redis_addr);

        Ok(store)
    }
}

#[async_trait]
impl GenericKvStore for RedisKvStore {
    async fn ping(&self) -> Void {
        let _: String = self.client.ping(None).await.map_err(|e| anyhow::anyhow!("Error pinging Redis: {}", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Res<Option<String>> {
        Ok(self.client.get::<Option<String>, _>(key).await?)
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> Void {
        self.client.set::<(), _, _>(key, value, None, None, false).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Void {
        let _: i64 = self.client.del(key).await?;

        Ok(())
    }
}

// Tests.
