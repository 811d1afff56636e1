//! Authentication Service
//!
//! Acknowledges whatever payload it is handed. There is no credential check.

use serde_json::Value;

/// Prefix of every acknowledgement.
pub const ACKNOWLEDGEMENT_PREFIX: &str = "authenticated user: ";

/// Build the acknowledgement for a payload.
///
/// The payload is rendered as compact JSON, so identical payloads always
/// produce identical acknowledgements.
pub fn acknowledge(payload: &Value) -> String {
    format!("{}{}", ACKNOWLEDGEMENT_PREFIX, payload)
}
