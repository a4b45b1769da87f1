//! Library root for `pr-relay`.
//!
//! Pr-relay mirrors a repository's pull requests into a Discord channel:
//! - Announces each pull request when it is opened
//! - Deletes the announcement once the pull request is closed
//!
//! GitHub delivers events to a small axum server, Discord is reached over its
//! REST API, and Redis remembers which message belongs to which pull request.
//! Each external service sits behind a trait so it can be swapped for tests.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod server;
pub mod service;

use rustls::crypto;

use crate::prelude::*;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the pr-relay runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with chat and store clients
/// - Serves the webhook endpoint until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting pr-relay ...");

    // Start the crypto provider.
    crypto::ring::default_provider().install_default().map_err(|_| anyhow!("Failed to install the rustls crypto provider."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
