use serde::{Deserialize, Deserializer};
use tracing::{error, info, warn};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

// Webhook payload.

/// A GitHub `pull_request` webhook delivery.
///
/// Only the fields the relay cares about are decoded; everything is optional
/// in the payload and falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PullRequestEvent {
    pub action: Action,
    pub repository: Repository,
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    pub id: u64,
    pub user: User,
    pub html_url: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    pub login: String,
}

impl PullRequestEvent {
    /// Decode a raw webhook body.
    pub fn from_slice(body: &[u8]) -> Res<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The store key correlating this pull request with its chat message.
    pub fn mapping_key(&self) -> String {
        self.pull_request.id.to_string()
    }

    /// The chat message announcing this pull request.
    pub fn announcement(&self) -> String {
        format!("{}: {}", self.repository.name, self.pull_request.html_url)
    }
}

/// The `action` field of a pull request delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Action {
    Opened,
    Closed,
    Other(String),
    #[default]
    Missing,
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Opened => "opened",
            Action::Closed => "closed",
            Action::Other(action) => action,
            Action::Missing => "",
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let action = Option::<String>::deserialize(deserializer)?;

        Ok(match action.as_deref() {
            Some("opened") => Action::Opened,
            Some("closed") => Action::Closed,
            Some("") | None => Action::Missing,
            Some(other) => Action::Other(other.to_string()),
        })
    }
}

// Outcomes.

/// The result of handling one webhook delivery.
///
/// Handling is best-effort: nothing here is ever returned to the caller as an error,
/// but every partial failure is recorded so it can be logged (and asserted on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The body could not be decoded.
    Malformed { error: String },
    /// The action is neither `opened` nor `closed`.
    Ignored { action: String },
    /// The pull request id was absent (or zero), so there is nothing to correlate on.
    MissingId { action: String },
    /// The announcement was sent and the mapping stored.
    Posted { key: String, message_id: String },
    /// The announcement could not be sent; no mapping was written.
    SendFailed { key: String, error: String },
    /// The announcement was sent, but the mapping could not be stored.
    MappingFailed { key: String, message_id: String, error: String },
    /// The close path ran to completion; each step's error is recorded, if any.
    Removed {
        key: String,
        message_id: String,
        lookup_error: Option<String>,
        delete_error: Option<String>,
        unmap_error: Option<String>,
    },
}

impl Outcome {
    /// Whether every side effect the delivery asked for actually happened.
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Ignored { .. } | Outcome::Posted { .. } => true,
            Outcome::Removed { lookup_error, delete_error, unmap_error, .. } => lookup_error.is_none() && delete_error.is_none() && unmap_error.is_none(),
            Outcome::Malformed { .. } | Outcome::MissingId { .. } | Outcome::SendFailed { .. } | Outcome::MappingFailed { .. } => false,
        }
    }

    /// Emit a log line describing the outcome.
    pub fn log(&self) {
        match self {
            Outcome::Malformed { error } => error!("Error decoding webhook body: {}", error),
            Outcome::Ignored { action } => info!(action = %action, "Ignoring pull request action."),
            Outcome::MissingId { action } => warn!(action = %action, "Pull request has no id; skipping."),
            Outcome::Posted { key, message_id } => info!(key = %key, message_id = %message_id, "Posted pull request message."),
            Outcome::SendFailed { key, error } => error!(key = %key, "Error sending message to Discord: {}", error),
            Outcome::MappingFailed { key, message_id, error } => error!(key = %key, message_id = %message_id, "Message sent, but storing the mapping failed: {}", error),
            Outcome::Removed {
                key,
                message_id,
                lookup_error,
                delete_error,
                unmap_error,
            } => {
                if let Some(e) = lookup_error {
                    error!(key = %key, "Error looking up message mapping: {}", e);
                }

                if let Some(e) = delete_error {
                    warn!(key = %key, message_id = %message_id, "Error deleting Discord message: {}", e);
                }

                if let Some(e) = unmap_error {
                    error!(key = %key, "Error removing message mapping: {}", e);
                }

                if self.is_success() {
                    info!(key = %key, message_id = %message_id, "Removed pull request message.");
                }
            }
        }
    }
}

// Tests.
