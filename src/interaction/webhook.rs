//! Entry point for raw GitHub webhook deliveries.

use crate::{
    base::types::{Outcome, PullRequestEvent},
    interaction::pull_request::handle_pull_request,
    prelude::*,
    runtime::Runtime,
};

/// Decodes a webhook body and hands it to the correlator, logging the outcome.
///
/// The outcome is also returned so callers (and tests) can inspect it.
#[instrument(skip_all)]
pub async fn handle_webhook(body: &[u8], runtime: &Runtime) -> Outcome {
    let outcome = match PullRequestEvent::from_slice(body) {
        Ok(event) => handle_pull_request(&event, &runtime.config.discord_channel_id, &runtime.chat, &runtime.store).await,
        Err(e) => Outcome::Malformed { error: e.to_string() },
    };

    outcome.log();

    outcome
}
