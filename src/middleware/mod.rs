//! Middleware components for HTTP request processing.
//!
//! Cross-cutting concerns of the API surface: the request gate that holds
//! ordinary requests back while the maintenance task runs, per-request
//! timing, and permissive CORS handling.

pub mod cors;
pub mod gate;
pub mod timing;
