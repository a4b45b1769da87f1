//! Event handling for pr-relay.
//!
//! This module turns inbound webhook deliveries into chat and store actions:
//! - Decoding raw GitHub webhook bodies
//! - Announcing opened pull requests and retracting closed ones

pub mod pull_request;
pub mod webhook;
