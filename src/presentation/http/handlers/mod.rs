//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod aggregate;
pub mod auth;
pub mod log;
