//! # Domain Layer
//!
//! Contracts the services depend on, independent of any HTTP framework or
//! client library.
//!
//! - **gateways**: downstream service traits and their error type

pub mod gateways;

pub use gateways::{AuthGateway, DownstreamError, LogGateway};
