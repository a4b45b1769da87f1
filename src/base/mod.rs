//! Core components, types, and utilities for pr-relay.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Webhook payload types and handling outcomes.
//! - Common result types.

pub mod config;
pub mod types;
