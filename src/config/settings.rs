//! Application settings and configuration structures.

use std::fmt;
use std::net::{AddrParseError, SocketAddr};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Scheme prepended to the configured upstream addresses.
pub const UPSTREAM_SCHEME: &str = "http://";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Which service this process serves
    pub service: ServiceSettings,

    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Addresses of the services the aggregator calls
    pub upstream: UpstreamSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Response security headers
    pub security: SecuritySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Role selection.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub role: ServiceRole,
}

/// The three services a process instance can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceRole {
    /// `POST /` acknowledges a JSON payload
    Auth,
    /// `GET /` reports the time the request was logged
    Log,
    /// `GET /` aggregates the auth and log services
    Api,
}

impl ServiceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceRole::Auth => "auth",
            ServiceRole::Log => "log",
            ServiceRole::Api => "api",
        }
    }
}

impl fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on (0 picks an ephemeral port)
    pub port: u16,
}

/// Upstream service addresses, as `host[:port][/path]` without a scheme.
///
/// Read once at startup. An empty address is accepted and yields a target
/// URL of just `http://`, which every request to it fails on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSettings {
    /// Auth service address (`AUTH_ADDR`)
    pub auth_addr: String,

    /// Log service address (`LOG_ADDR`)
    pub log_addr: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env). Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

/// Security headers configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecuritySettings {
    /// Send Strict-Transport-Security (only meaningful behind HTTPS)
    pub enable_hsts: bool,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. `APP__` prefixed environment variables
    /// 5. Plain environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the server address is not a valid socket address.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("service.role", "api")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("upstream.auth_addr", "")?
            .set_default("upstream.log_addr", "")?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("security.enable_hsts", false)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=5000 -> server.port = 5000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("service.role", std::env::var("SERVICE_ROLE").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("upstream.auth_addr", std::env::var("AUTH_ADDR").ok())?
            .set_override_option("upstream.log_addr", std::env::var("LOG_ADDR").ok())?
            .set_override_option(
                "cors.allowed_origins",
                std::env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|origins| split_origins(&origins)),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.server.socket_addr().map_err(|e| {
                    ConfigError::Message(format!(
                        "Invalid server address '{}': {}",
                        settings.server_addr(),
                        e
                    ))
                })?;
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl UpstreamSettings {
    /// Target URL of the auth service.
    pub fn auth_url(&self) -> String {
        format!("{}{}", UPSTREAM_SCHEME, self.auth_addr)
    }

    /// Target URL of the log service.
    pub fn log_url(&self) -> String {
        format!("{}{}", UPSTREAM_SCHEME, self.log_addr)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
