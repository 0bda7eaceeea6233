//! Dev-server integration for the worker bindings shortcut.
//!
//! Given the inventories produced by `bindings-config`, this crate renders
//! them as aligned text tables and composes a `b` keyboard shortcut onto a
//! host development server's extension points without discarding whatever
//! shortcuts or banner text the host already registered.

pub mod render;
pub mod shortcuts;
mod sink;

pub use render::{labelled_heading, render, singular_heading};
pub use shortcuts::{
    ComposerConfig, ExtensionPoints, HintGating, Hook, InventoryProvider, SHORTCUT_DESCRIPTION,
    SHORTCUT_HINT, SHORTCUT_KEY, Shortcut, ShortcutOptions, install,
};
pub use sink::{LogSink, TracingSink};
