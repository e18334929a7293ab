//! # Buchregal Backend Library
//!
//! Buchregal is a small in-memory book catalog exposed over a REST API,
//! together with an exclusive simulated maintenance task that holds back
//! ordinary requests while it runs.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Modern web framework for HTTP server and routing
//! - **Tokio**: Async runtime for concurrent request handling
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`catalog`]: Book model, field validation and the ordered in-memory store
//! - [`config`]: Application configuration management
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Application usage counters
//! - [`middleware`]: HTTP middleware for timing, CORS and the request gate
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`task`]: The Idle/Running guard for the exclusive maintenance task

pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod task;

#[cfg(test)]
mod tests;
