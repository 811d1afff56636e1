//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Plain environment variables (`SERVICE_ROLE`, `AUTH_ADDR`, `LOG_ADDR`, ...)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use multi_service::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("{} service will listen on {}", settings.service.role, settings.server_addr());
//! ```

mod settings;

pub use settings::*;
