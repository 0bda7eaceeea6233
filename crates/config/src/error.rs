//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define the error raised when a worker configuration snapshot cannot be
//!   interpreted as the expected shape.
//!
//! Does NOT handle:
//! - Missing or empty binding groups (absence of data is not an error; it
//!   yields an inventory with zero entries).
//!
//! Invariants:
//! - Every variant names the worker it concerns, so a multi-worker install
//!   failure points at the offending configuration.

use thiserror::Error;

/// Errors that can occur while resolving worker configurations into
/// binding inventories.
#[derive(Error, Debug)]
pub enum ConfigResolutionError {
    /// The snapshot is structurally malformed: it could not be deserialized
    /// into the expected worker configuration shape.
    #[error("Failed to interpret configuration for {worker}")]
    Malformed {
        worker: String,
        #[source]
        source: serde_json::Error,
    },
}
