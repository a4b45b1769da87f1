//! Runtime services and shared state for pr-relay.

use crate::{
    prelude::*,
    server,
    service::{chat::ChatClient, store::KvStore},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the chat client, key-value store, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
    /// The key-value store instance.
    pub store: KvStore,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the chat client.
        let chat = ChatClient::discord(&config).await?;

        // Initialize the store.
        let store = KvStore::redis(&config).await?;

        info!("{} is now running.", chat.bot_username());

        Ok(Self { config, chat, store })
    }

    pub async fn start(&self) -> Void {
        server::serve(self.clone()).await
    }
}
