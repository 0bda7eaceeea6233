//! Test helpers for composer testing.
//!
//! Provides a buffering log sink, a recording host double, and inventory
//! providers backed by in-memory configuration snapshots.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bindings_dev::{ExtensionPoints, InventoryProvider, LogSink, ShortcutOptions};
use serde_json::Value;

/// A sink that buffers every message for later inspection.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All buffered messages, in write order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages joined with newlines, with trailing whitespace trimmed per
    /// line; alignment-only padding is irrelevant to readers.
    pub fn normalized(&self) -> String {
        let joined = self.messages.lock().unwrap().join("\n");
        joined
            .split('\n')
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl LogSink for BufferSink {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

/// A host double whose banner writes one line to `sink` and whose registrar
/// records every options object it receives.
pub fn recording_host(sink: BufferSink) -> (ExtensionPoints, Arc<Mutex<Vec<ShortcutOptions>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&calls);
    let host = ExtensionPoints::new(
        move || sink.info("dev server running"),
        move |options| recorded.lock().unwrap().push(options),
    );
    (host, calls)
}

/// Provider over a fixed snapshot list: first entry is the primary worker.
pub fn fixed_provider(snapshots: Vec<Value>) -> InventoryProvider {
    Arc::new(move || match snapshots.split_first() {
        Some((primary, auxiliaries)) => bindings_config::build(primary, auxiliaries),
        None => Ok(Vec::new()),
    })
}

/// Provider over a mutable snapshot list, for simulating config reloads.
pub fn live_provider(snapshots: Arc<Mutex<Vec<Value>>>) -> InventoryProvider {
    Arc::new(move || {
        let snapshots = snapshots.lock().unwrap();
        match snapshots.split_first() {
            Some((primary, auxiliaries)) => bindings_config::build(primary, auxiliaries),
            None => Ok(Vec::new()),
        }
    })
}

/// Invoke the action of the shortcut registered under `key` in the most
/// recent registrar call. Panics if no such shortcut was registered.
pub fn run_shortcut(calls: &Arc<Mutex<Vec<ShortcutOptions>>>, key: char) {
    let calls = calls.lock().unwrap();
    let options = calls.last().expect("no shortcut registration recorded");
    let shortcut = options
        .custom_shortcuts
        .iter()
        .find(|s| s.key == key)
        .unwrap_or_else(|| panic!("no shortcut registered under {key:?}"));
    (shortcut.action)();
}
