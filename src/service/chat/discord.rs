//! Discord implementation of the chat client, over the REST API.

use std::sync::Arc;

use anyhow::Context;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{Res, Void},
};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the discord implementation.

impl ChatClient {
    /// Creates a new Discord chat client.
    ///
    /// The bot token is verified before this returns, so a bad token fails startup
    /// rather than every later request.
    pub async fn discord(config: &Config) -> Res<Self> {
        let client = DiscordChatClient::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Wire types.

#[derive(Debug, Deserialize)]
struct DiscordUser {
    username: String,
}

#[derive(Debug, Serialize)]
struct DiscordCreateMessage<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct DiscordMessage {
    id: String,
}

// Structs.

/// Discord client implementation.
#[derive(Clone)]
struct DiscordChatClient {
    api_base: String,
    bot_username: String,
    client: reqwest::Client,
}

impl DiscordChatClient {
    /// Create a new Discord chat client.
    #[instrument(name = "DiscordChatClient::new", skip_all)]
    async fn new(config: &Config) -> Res<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bot {}", config.discord_bot_token)).context("Discord bot token is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        let api_base = config.discord_api_base.trim_end_matches('/').to_string();

        // Get the bot's user, which also proves the token works.

        let bot_user: DiscordUser = client
            .get(format!("{api_base}/users/@me"))
            .send()
            .await
            .context("Error creating Discord session")?
            .error_for_status()
            .context("Error opening Discord session")?
            .json()
            .await?;

        info!("Discord bot user: {}", bot_user.username);

        Ok(Self {
            api_base,
            bot_username: bot_user.username,
            client,
        })
    }

    fn messages_url(&self, channel_id: &str) -> String {
        format!("{}/channels/{}/messages", self.api_base, channel_id)
    }
}

#[async_trait::async_trait]
impl GenericChatClient for DiscordChatClient {
    fn bot_username(&self) -> &str {
        &self.bot_username
    }

    #[instrument(skip(self))]
    async fn send_message(&self, channel_id: &str, text: &str) -> Res<String> {
        let message: DiscordMessage = self
            .client
            .post(self.messages_url(channel_id))
            .json(&DiscordCreateMessage { content: text })
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?
            .json()
            .await?;

        Ok(message.id)
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Void {
        // An empty id would hit the collection route instead of a message.
        if message_id.is_empty() {
            return Err(anyhow::anyhow!("Failed to delete message: no message id"));
        }

        self.client
            .delete(format!("{}/{}", self.messages_url(channel_id), message_id))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to delete message: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Failed to delete message: {}", e))?;

        Ok(())
    }
}

// Tests.
