//! Correlates pull request lifecycle events with Discord messages.
//!
//! An `opened` event announces the pull request and remembers the message id
//! under the pull request id; a `closed` event looks that id back up, deletes
//! the message, and forgets the mapping.

use tracing::Instrument;

use crate::{
    base::types::{Action, Outcome, PullRequestEvent},
    prelude::*,
    service::{chat::ChatClient, store::KvStore},
};

/// Handles one pull request event.
///
/// Never fails: every partial failure is folded into the returned [`Outcome`].
#[instrument(skip_all, fields(action = %event.action.as_str(), pull_request = event.pull_request.id))]
pub async fn handle_pull_request(event: &PullRequestEvent, channel_id: &str, chat: &ChatClient, store: &KvStore) -> Outcome {
    debug!(
        repository = %event.repository.name,
        title = %event.pull_request.title,
        author = %event.pull_request.user.login,
        url = %event.pull_request.html_url,
        "Received pull request event."
    );

    if !matches!(event.action, Action::Opened | Action::Closed) {
        return Outcome::Ignored {
            action: event.action.as_str().to_string(),
        };
    }

    // GitHub ids start at 1; a zero here means the id was missing from the payload.
    if event.pull_request.id == 0 {
        return Outcome::MissingId {
            action: event.action.as_str().to_string(),
        };
    }

    match event.action {
        Action::Opened => handle_opened(event, channel_id, chat, store).in_current_span().await,
        _ => handle_closed(event, channel_id, chat, store).in_current_span().await,
    }
}

async fn handle_opened(event: &PullRequestEvent, channel_id: &str, chat: &ChatClient, store: &KvStore) -> Outcome {
    let key = event.mapping_key();

    let message_id = match chat.send_message(channel_id, &event.announcement()).await {
        Ok(message_id) => message_id,
        Err(e) => return Outcome::SendFailed { key, error: e.to_string() },
    };

    // A second `opened` for the same id overwrites the mapping and orphans the earlier message.
    match store.set(&key, &message_id).await {
        Ok(()) => Outcome::Posted { key, message_id },
        Err(e) => Outcome::MappingFailed {
            key,
            message_id,
            error: e.to_string(),
        },
    }
}

async fn handle_closed(event: &PullRequestEvent, channel_id: &str, chat: &ChatClient, store: &KvStore) -> Outcome {
    let key = event.mapping_key();

    // A miss (or a failed lookup) still goes through the delete with an empty id.
    let (message_id, lookup_error) = match store.get(&key).await {
        Ok(message_id) => (message_id.unwrap_or_default(), None),
        Err(e) => (String::new(), Some(e.to_string())),
    };

    let delete_error = chat.delete_message(channel_id, &message_id).await.err().map(|e| e.to_string());

    let unmap_error = store.delete(&key).await.err().map(|e| e.to_string());

    Outcome::Removed {
        key,
        message_id,
        lookup_error,
        delete_error,
        unmap_error,
    }
}
