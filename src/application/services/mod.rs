//! Application Services
//!
//! ## Available Services
//!
//! - **auth_service**: payload acknowledgement
//! - **log_service**: request timestamping
//! - **AggregatorService**: sequential auth + log calls with failure substitution

pub mod aggregator_service;
pub mod auth_service;
pub mod log_service;

pub use aggregator_service::{Aggregate, AggregatorService, AggregatorServiceImpl};
pub use log_service::{Clock, LogService, SystemClock};
