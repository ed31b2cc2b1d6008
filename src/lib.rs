//! Library crate for snooker-scorer-back, exposing modules for binaries and integration tests.

#![warn(missing_docs)]

/// Runtime configuration loaded from disk.
pub mod config;
/// Persistence of finished matches.
pub mod dao;
/// Request and response payloads of the REST API.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP routes.
pub mod routes;
/// Business logic behind the routes.
pub mod services;
/// Shared application state and the scoring engine.
pub mod state;
