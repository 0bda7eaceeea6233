//! Top-level worker configuration shape.
//!
//! Responsibilities:
//! - Define `WorkerConfig`, the typed view of one resolved worker settings
//!   snapshot, exposing every binding group the inventory cares about.
//!
//! Does NOT handle:
//! - File discovery, JSONC parsing, or environment overrides (upstream).
//! - Binding validity or runtime reachability; declarations are taken as-is.
//!
//! Invariants:
//! - Every binding group is optional. A snapshot with no groups at all is a
//!   valid configuration that declares zero bindings.
//! - Unknown top-level keys are ignored; the snapshot is an opaque settings
//!   object and only the fields below are interpreted.

use serde::{Deserialize, Serialize};

use super::groups::{
    AnalyticsDataset, AssetsConfig, HelloWorldBinding, HyperdriveBinding, ImagesBinding,
    KvNamespace, QueueConfig, ServiceBinding, TailConsumer, UnsafeConfig,
};

/// One worker's resolved configuration, reduced to the fields that declare
/// bindings. Field order here fixes the order binding groups appear in the
/// rendered inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Configured worker name; inventories fall back to a sentinel when unset.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub kv_namespaces: Vec<KvNamespace>,

    #[serde(default)]
    pub hyperdrive: Vec<HyperdriveBinding>,

    /// Scheduled-timer bindings. Disabled timers stay visible in the
    /// inventory with an explicit disabled annotation.
    #[serde(default)]
    pub hello_world: Vec<HelloWorldBinding>,

    #[serde(default)]
    pub analytics_engine_datasets: Vec<AnalyticsDataset>,

    #[serde(default)]
    pub images: Option<ImagesBinding>,

    /// Asset directory binding; contributes an entry only when a binding
    /// name is configured.
    #[serde(default)]
    pub assets: Option<AssetsConfig>,

    #[serde(default, rename = "unsafe")]
    pub unsafe_config: Option<UnsafeConfig>,

    #[serde(default)]
    pub queues: Option<QueueConfig>,

    #[serde(default)]
    pub services: Vec<ServiceBinding>,

    /// Message-relay consumers; these have no `env` handle of their own.
    #[serde(default)]
    pub tail_consumers: Vec<TailConsumer>,
}

impl WorkerConfig {
    /// True if no binding group declares anything.
    pub fn declares_no_bindings(&self) -> bool {
        self.kv_namespaces.is_empty()
            && self.hyperdrive.is_empty()
            && self.hello_world.is_empty()
            && self.analytics_engine_datasets.is_empty()
            && self.images.is_none()
            && self.assets.as_ref().is_none_or(|a| a.binding.is_none())
            && self
                .unsafe_config
                .as_ref()
                .is_none_or(|u| u.metadata.is_empty())
            && self.queues.as_ref().is_none_or(|q| q.producers.is_empty())
            && self.services.is_empty()
            && self.tail_consumers.is_empty()
    }
}
