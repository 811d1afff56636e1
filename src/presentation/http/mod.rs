//! HTTP Presentation
//!
//! Routers and handlers for the three service roles.

pub mod handlers;
pub mod routes;
