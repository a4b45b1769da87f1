//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by pr-relay:
//! - Chat services (e.g., Discord)
//! - Key-value stores (e.g., Redis)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod store;
