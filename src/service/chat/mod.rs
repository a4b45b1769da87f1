//! Chat service integration for pr-relay.
//!
//! This module provides the narrow slice of a chat platform the relay needs:
//! - Posting a message to a channel
//! - Deleting a previously posted message
//!
//! It defines the `GenericChatClient` trait that can be implemented for different
//! chat services, with a default implementation for Discord.

pub mod discord;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Res, Void};

// Traits.

/// Generic "chat" trait that clients must implement.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Get the bot's display name.
    fn bot_username(&self) -> &str;

    /// Send a message to a channel.
    ///
    /// Returns the platform's id for the newly created message, which is what
    /// a later [`GenericChatClient::delete_message`] needs.
    async fn send_message(&self, channel_id: &str, text: &str) -> Res<String>;

    /// Delete a message from a channel.
    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
