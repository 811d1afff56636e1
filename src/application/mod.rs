//! Application Layer
//!
//! Contains the logic of the three services. Handlers in the presentation
//! layer call into here; downstream access goes through domain gateways.

pub mod services;
