//! Per-group binding declaration shapes.
//!
//! Each struct mirrors one binding group as it appears in a resolved worker
//! configuration snapshot. Groups are either a single declaration or an
//! ordered sequence; ordering within a group is preserved all the way into
//! the rendered table.

use serde::{Deserialize, Serialize};

/// A key-value namespace binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvNamespace {
    pub binding: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// A Hyperdrive connection binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperdriveBinding {
    pub binding: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// A scheduled-timer ("hello world") binding.
///
/// `enable_timer` defaults to false; a disabled timer is still a declared
/// binding and must remain visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloWorldBinding {
    pub binding: String,
    #[serde(default)]
    pub enable_timer: bool,
}

/// An Analytics Engine dataset binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsDataset {
    pub binding: String,
    #[serde(default)]
    pub dataset: Option<String>,
}

/// The images binding (single declaration group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesBinding {
    pub binding: String,
}

/// Asset directory configuration. Only the optional binding name matters
/// for the inventory; serving options live upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default)]
    pub binding: Option<String>,
}

/// The `unsafe` configuration block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnsafeConfig {
    #[serde(default)]
    pub metadata: Vec<UnsafeMetadataBinding>,
}

/// One raw metadata binding. Whatever other fields the declaration carries
/// are opaque; the inventory collapses each declaration into a single
/// synthetic entry keyed by `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsafeMetadataBinding {
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// The queues block. Only producers surface as env bindings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(default)]
    pub producers: Vec<QueueProducer>,
}

/// A queue producer binding. The `queue` identifier is normalized into the
/// common display shape, so the renderer needs no queue-specific casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueProducer {
    pub binding: String,
    pub queue: String,
}

/// A service-to-service link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBinding {
    pub binding: String,
    pub service: String,
}

/// A tail consumer; identified by the consuming service name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailConsumer {
    pub service: String,
}
