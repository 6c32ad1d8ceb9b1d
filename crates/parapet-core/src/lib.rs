//! Core types, traits, errors, config, events, and tracing for the Parapet
//! scan engine.
//!
//! This crate carries no analysis logic. It defines the vocabulary shared by
//! the engine and its callers: findings and severities, per-subsystem error
//! enums, the event handler/dispatcher pair, TOML configuration, and tracing
//! setup.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
