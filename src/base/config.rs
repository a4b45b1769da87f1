//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::Path, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default Redis address.
fn default_redis_addr() -> String {
    "localhost:6379".to_string()
}

/// Default HTTP listen address.
fn default_listen_addr() -> String {
    "0.0.0.0:8888".to_string()
}

/// Default Discord REST API base.
fn default_discord_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

/// Configuration for the pr-relay application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Discord bot token (`DISCORD_BOT_TOKEN`).
    pub discord_bot_token: String,
    /// Discord channel that pull requests are announced in (`DISCORD_CHANNEL_ID`).
    pub discord_channel_id: String,
    /// Discord REST API base URL (`DISCORD_API_BASE`).
    #[serde(default = "default_discord_api_base")]
    pub discord_api_base: String,
    /// Redis password (`REDIS_PASS`).
    ///
    /// Empty means the server does not require `AUTH`.
    #[serde(default)]
    pub redis_pass: String,
    /// Redis `host:port` (`REDIS_ADDR`).
    #[serde(default = "default_redis_addr")]
    pub redis_addr: String,
    /// Address the webhook server binds to (`LISTEN_ADDR`).
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        }

        // Environment last, so it wins over the file.
        cfg = cfg.add_source(config::Environment::default());

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    fn validate(&self) -> Res<()> {
        if self.discord_bot_token.is_empty() {
            return Err(anyhow::anyhow!("DISCORD_BOT_TOKEN must be set."));
        }

        if self.discord_channel_id.is_empty() {
            return Err(anyhow::anyhow!("DISCORD_CHANNEL_ID must be set."));
        }

        split_host_port(&self.redis_addr)?;

        Ok(())
    }
}

/// Split a `host:port` address.
pub fn split_host_port(addr: &str) -> Res<(&str, u16)> {
    let (host, port) = addr.rsplit_once(':').ok_or_else(|| anyhow::anyhow!("Address `{}` must be of the form `host:port`.", addr))?;

    if host.is_empty() {
        return Err(anyhow::anyhow!("Address `{}` is missing a host.", addr));
    }

    let port = port.parse::<u16>().map_err(|e| anyhow::anyhow!("Address `{}` has an invalid port: {}", addr, e))?;

    Ok((host, port))
}

// Tests.
