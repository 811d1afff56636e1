//! # Multi Service Library
//!
//! Three small HTTP services wired together over plain HTTP:
//!
//! - **auth**: `POST /` acknowledges any JSON payload
//! - **log**: `GET /` reports when the request was logged
//! - **api**: `GET /` calls auth, then log, and renders both replies as HTML.
//!   A failed call is replaced by failure text; the response is always 200.
//!
//! ## Module Structure
//!
//! ```text
//! multi_service/
//! +-- config/         Configuration management
//! +-- domain/         Downstream gateway traits and errors
//! +-- application/    Auth, log and aggregator services
//! +-- infrastructure/ reqwest-backed gateways
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Downstream contracts
pub mod domain;

// Application layer - Service logic
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
