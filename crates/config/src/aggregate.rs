//! Aggregation of worker configuration snapshots into binding inventories.
//!
//! Responsibilities:
//! - Deserialize each snapshot into a `WorkerConfig` and flatten its binding
//!   groups into one ordered `BindingInventory`.
//! - Preserve input order: the primary worker first, then auxiliaries.
//!
//! Does NOT handle:
//! - Table layout (see the dev crate's renderer).
//! - Deciding whether a binding is valid or reachable at runtime.
//!
//! Invariants:
//! - A snapshot that declares no bindings yields an inventory with zero
//!   entries, never an error.
//! - Disabled or partially-specified bindings stay visible with an explicit
//!   annotation instead of being dropped.
//! - Group order is fixed by the `WorkerConfig` field order; entries within
//!   a group keep their source order.

use serde_json::Value;

use crate::error::ConfigResolutionError;
use crate::inventory::{BindingEntry, BindingInventory, BindingKind, FALLBACK_WORKER_LABEL};
use crate::types::WorkerConfig;

/// Resolve a primary snapshot plus its ordered auxiliaries into an ordered
/// inventory set, primary first.
///
/// Fails only when a snapshot is structurally malformed; the error names the
/// worker whose configuration could not be interpreted.
pub fn build(
    primary: &Value,
    auxiliaries: &[Value],
) -> Result<Vec<BindingInventory>, ConfigResolutionError> {
    let mut inventories = Vec::with_capacity(1 + auxiliaries.len());
    inventories.push(resolve(primary, 0)?);
    for (position, snapshot) in auxiliaries.iter().enumerate() {
        inventories.push(resolve(snapshot, position + 1)?);
    }
    Ok(inventories)
}

fn resolve(snapshot: &Value, position: usize) -> Result<BindingInventory, ConfigResolutionError> {
    let config: WorkerConfig =
        serde_json::from_value(snapshot.clone()).map_err(|source| {
            ConfigResolutionError::Malformed {
                worker: snapshot_label(snapshot, position),
                source,
            }
        })?;
    Ok(inventory(&config))
}

/// Best-effort worker label for error context, recovered from the raw
/// snapshot so a malformed configuration can still be named.
fn snapshot_label(snapshot: &Value, position: usize) -> String {
    if let Some(name) = snapshot.get("name").and_then(Value::as_str) {
        return name.to_owned();
    }
    if position == 0 {
        "the primary worker".to_owned()
    } else {
        format!("auxiliary worker {position}")
    }
}

/// Flatten one typed configuration into its binding inventory.
pub fn inventory(config: &WorkerConfig) -> BindingInventory {
    let worker_label = config
        .name
        .clone()
        .unwrap_or_else(|| FALLBACK_WORKER_LABEL.to_owned());

    let mut entries = Vec::new();

    for kv in &config.kv_namespaces {
        entries.push(BindingEntry::new(
            BindingKind::Store,
            BindingEntry::env_name(&kv.binding, kv.id.as_deref()),
            "KV Namespace",
        ));
    }

    for hyperdrive in &config.hyperdrive {
        entries.push(BindingEntry::new(
            BindingKind::Store,
            BindingEntry::env_name(&hyperdrive.binding, hyperdrive.id.as_deref()),
            "Hyperdrive Config",
        ));
    }

    for timer in &config.hello_world {
        let description = if timer.enable_timer {
            "Hello World"
        } else {
            "Hello World (disabled)"
        };
        entries.push(BindingEntry::new(
            BindingKind::Timer,
            BindingEntry::env_name(&timer.binding, None),
            description,
        ));
    }

    for dataset in &config.analytics_engine_datasets {
        entries.push(BindingEntry::new(
            BindingKind::Analytics,
            BindingEntry::env_name(&dataset.binding, dataset.dataset.as_deref()),
            "Analytics Engine Dataset",
        ));
    }

    if let Some(images) = &config.images {
        entries.push(BindingEntry::new(
            BindingKind::Asset,
            BindingEntry::env_name(&images.binding, None),
            "Images",
        ));
    }

    if let Some(assets) = &config.assets
        && let Some(binding) = &assets.binding
    {
        entries.push(BindingEntry::new(
            BindingKind::Asset,
            BindingEntry::env_name(binding, None),
            "Assets",
        ));
    }

    if let Some(unsafe_config) = &config.unsafe_config {
        // One synthetic entry per declared metadata binding, not one per
        // raw field.
        for metadata in &unsafe_config.metadata {
            entries.push(BindingEntry::new(
                BindingKind::Metadata,
                BindingEntry::env_name(&metadata.name, metadata.key.as_deref()),
                "Unsafe Metadata",
            ));
        }
    }

    if let Some(queues) = &config.queues {
        for producer in &queues.producers {
            entries.push(BindingEntry::new(
                BindingKind::Queue,
                BindingEntry::env_name(&producer.binding, Some(&producer.queue)),
                "Queue",
            ));
        }
    }

    for service in &config.services {
        entries.push(BindingEntry::new(
            BindingKind::ServiceLink,
            BindingEntry::env_name(&service.binding, Some(&service.service)),
            "Worker",
        ));
    }

    for consumer in &config.tail_consumers {
        entries.push(BindingEntry::new(
            BindingKind::Other,
            consumer.service.clone(),
            "Tail Consumer",
        ));
    }

    tracing::debug!(
        worker = %worker_label,
        entries = entries.len(),
        "aggregated worker bindings"
    );
    for entry in &entries {
        tracing::trace!(
            worker = %worker_label,
            kind = %entry.kind,
            binding = %entry.display_name,
            "declared binding"
        );
    }

    BindingInventory {
        worker_label,
        entries,
    }
}
