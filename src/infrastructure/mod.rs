//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - HTTP clients for the downstream auth and log services

pub mod downstream;
