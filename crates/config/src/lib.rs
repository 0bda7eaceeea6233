//! Worker binding configuration for the dev-server bindings shortcut.
//!
//! This crate turns resolved worker configuration snapshots into normalized
//! binding inventories suitable for display. Configuration file discovery,
//! parsing, and environment merging happen upstream; this crate only
//! interprets the resolved result.

pub mod aggregate;
mod error;
pub mod inventory;
pub mod types;

pub use aggregate::{build, inventory};
pub use error::ConfigResolutionError;
pub use inventory::{BindingEntry, BindingInventory, BindingKind, FALLBACK_WORKER_LABEL};
pub use types::WorkerConfig;
