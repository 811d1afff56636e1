//! Log Service
//!
//! Stamps each request with the local wall-clock time. Nothing is persisted.

use std::sync::Arc;

use chrono::{DateTime, Local};

/// Prefix of every log reply.
pub const LOGGED_PREFIX: &str = "request logged at: ";

/// `2026-10-18 09:41:07.123456`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Log service
#[derive(Clone)]
pub struct LogService {
    clock: Arc<dyn Clock>,
}

impl LogService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Record a request and return the reply text.
    pub fn record(&self) -> String {
        let logged_at = self.clock.now();
        tracing::info!(logged_at = %logged_at.to_rfc3339(), "Request logged");
        format!("{}{}", LOGGED_PREFIX, format_timestamp(&logged_at))
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

/// Render a timestamp the way log replies show it.
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
