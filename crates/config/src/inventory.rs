//! The normalized binding inventory model.
//!
//! Responsibilities:
//! - Define `BindingKind`, `BindingEntry`, and `BindingInventory`: the
//!   display-oriented view of one worker's declared bindings, independent of
//!   the source configuration format.
//!
//! Does NOT handle:
//! - Building inventories from configuration (see `aggregate`).
//! - Table layout or column widths (see the dev crate's renderer).
//!
//! Invariants:
//! - Inventories are built once per render invocation and never mutated.
//! - Entry order is declaration order; display names need not be unique.

use std::fmt;

/// Worker label used when a configuration has no `name`.
pub const FALLBACK_WORKER_LABEL: &str = "worker";

/// The closed set of binding categories.
///
/// Adding a kind is a deliberate schema change, not runtime extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Store,
    Queue,
    Timer,
    ServiceLink,
    Metadata,
    Asset,
    Analytics,
    Other,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::Queue => write!(f, "queue"),
            Self::Timer => write!(f, "timer"),
            Self::ServiceLink => write!(f, "service-link"),
            Self::Metadata => write!(f, "metadata"),
            Self::Asset => write!(f, "asset"),
            Self::Analytics => write!(f, "analytics"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One declared binding, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    pub kind: BindingKind,
    /// The environment-accessible name, optionally annotated with a resource
    /// identifier, e.g. `env.KV (id-123)`.
    pub display_name: String,
    /// Short human label for the resource category, e.g. `KV Namespace`.
    pub resource_description: String,
}

impl BindingEntry {
    pub fn new(
        kind: BindingKind,
        display_name: impl Into<String>,
        resource_description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
            resource_description: resource_description.into(),
        }
    }

    /// Build the `env.<BINDING>` display name with an optional annotation.
    pub fn env_name(binding: &str, annotation: Option<&str>) -> String {
        match annotation {
            Some(annotation) => format!("env.{binding} ({annotation})"),
            None => format!("env.{binding}"),
        }
    }
}

/// The ordered, display-only list of one worker's declared bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInventory {
    /// The worker's configured name, or [`FALLBACK_WORKER_LABEL`].
    pub worker_label: String,
    pub entries: Vec<BindingEntry>,
}

impl BindingInventory {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
