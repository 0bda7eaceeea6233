//! Composition of the bindings shortcut onto a host dev server.
//!
//! Responsibilities:
//! - Model the host's extension surface (`ExtensionPoints`): a startup-banner
//!   printer and a shortcut registrar, each a replaceable callback slot.
//! - Wrap both so existing behavior still runs, then append the `b` shortcut
//!   and its banner hint.
//!
//! Does NOT handle:
//! - Reading keyboard input or dispatching shortcuts (the host's job).
//! - Building inventories (see `bindings-config`); the composer only holds a
//!   provider it re-queries on every keypress.
//!
//! Invariants:
//! - Wrapping never removes or reorders caller-supplied shortcuts.
//! - Each hook carries a wrapper marker; a second `install` on the same host
//!   is a no-op, so the `b` shortcut can never be registered twice.
//! - The `b` action re-fetches the inventory set on every invocation, so
//!   configuration reloads become visible without reinstalling.

use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bindings_config::{BindingInventory, ConfigResolutionError};

use crate::render::{labelled_heading, render, singular_heading};
use crate::sink::LogSink;

/// The key the bindings shortcut is registered under.
pub const SHORTCUT_KEY: char = 'b';

/// Description shown in the host's interactive shortcut menu.
pub const SHORTCUT_DESCRIPTION: &str = "list worker bindings";

/// Hint line appended to the host's startup banner.
pub const SHORTCUT_HINT: &str = "press b + enter to list configured Cloudflare bindings";

/// Yields the current inventory set. Called once at install time and again
/// on every shortcut invocation.
pub type InventoryProvider =
    Arc<dyn Fn() -> Result<Vec<BindingInventory>, ConfigResolutionError> + Send + Sync>;

/// One entry in the host's interactive shortcut menu.
pub struct Shortcut {
    pub key: char,
    pub description: String,
    pub action: Box<dyn Fn() + Send>,
}

impl std::fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortcut")
            .field("key", &self.key)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Options the host passes when (re)binding its shortcut menu.
#[derive(Debug, Default)]
pub struct ShortcutOptions {
    /// Whether the host wants the shortcut menu printed.
    pub print: bool,
    pub custom_shortcuts: Vec<Shortcut>,
}

/// A replaceable host callback slot. The `composed` marker records whether
/// this composer has already wrapped the slot, which is what makes `install`
/// idempotent.
pub struct Hook<F: ?Sized> {
    slot: Box<F>,
    composed: bool,
}

impl<F: ?Sized> Hook<F> {
    pub fn new(slot: Box<F>) -> Self {
        Self {
            slot,
            composed: false,
        }
    }

    /// True once this composer has wrapped the slot.
    pub fn is_composed(&self) -> bool {
        self.composed
    }
}

/// The two host extension points this core composes onto. The host remains
/// free to register its own shortcuts and banner lines; wrapping only
/// appends behavior.
pub struct ExtensionPoints {
    pub banner: Hook<dyn FnMut() + Send>,
    pub shortcuts: Hook<dyn FnMut(ShortcutOptions) + Send>,
}

impl ExtensionPoints {
    pub fn new<B, R>(banner: B, registrar: R) -> Self
    where
        B: FnMut() + Send + 'static,
        R: FnMut(ShortcutOptions) + Send + 'static,
    {
        Self {
            banner: Hook::new(Box::new(banner)),
            shortcuts: Hook::new(Box::new(registrar)),
        }
    }

    /// Print the startup banner through the current slot contents.
    pub fn print_banner(&mut self) {
        (self.banner.slot)();
    }

    /// Bind the shortcut menu through the current slot contents.
    pub fn bind_shortcuts(&mut self, options: ShortcutOptions) {
        (self.shortcuts.slot)(options);
    }
}

/// Whether the banner hint is emitted unconditionally or only after the host
/// has asked for the shortcut menu to be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintGating {
    /// Emit the hint whenever the wrapped banner runs.
    #[default]
    Always,
    /// Emit the hint only while the most recent registration asked for the
    /// shortcut menu to be printed.
    OnPrintRequest,
}

/// Composer configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposerConfig {
    pub hint_gating: HintGating,
}

/// Wrap the host's banner printer and shortcut registrar so that, on top of
/// everything the host already does, the banner hints at the `b` shortcut
/// and the shortcut menu gains a `b` entry that prints the current binding
/// tables to `sink`.
///
/// A provider error aborts the install with nothing wrapped. An empty
/// inventory set makes the install a complete no-op, banner included.
pub fn install(
    host: &mut ExtensionPoints,
    provider: InventoryProvider,
    sink: Arc<dyn LogSink>,
    config: ComposerConfig,
) -> Result<(), ConfigResolutionError> {
    if provider()?.is_empty() {
        return Ok(());
    }
    if host.banner.is_composed() || host.shortcuts.is_composed() {
        return Ok(());
    }

    // Shared between the two wrappers so OnPrintRequest gating can observe
    // the most recent registration's print flag.
    let print_requested = Arc::new(AtomicBool::new(false));

    let hint_provider = Arc::clone(&provider);
    let hint_sink = Arc::clone(&sink);
    let hint_flag = Arc::clone(&print_requested);
    let mut original_banner: Box<dyn FnMut() + Send> =
        mem::replace(&mut host.banner.slot, Box::new(|| {}));
    host.banner.slot = Box::new(move || {
        original_banner();
        let gated_off = config.hint_gating == HintGating::OnPrintRequest
            && !hint_flag.load(Ordering::Relaxed);
        if gated_off {
            return;
        }
        // Re-check the live set: a reload may have emptied it since install.
        if matches!(hint_provider(), Ok(set) if !set.is_empty()) {
            hint_sink.info(SHORTCUT_HINT);
        }
    });
    host.banner.composed = true;

    let mut original_registrar: Box<dyn FnMut(ShortcutOptions) + Send> =
        mem::replace(&mut host.shortcuts.slot, Box::new(|_| {}));
    host.shortcuts.slot = Box::new(move |mut options: ShortcutOptions| {
        print_requested.store(options.print, Ordering::Relaxed);
        let action_provider = Arc::clone(&provider);
        let action_sink = Arc::clone(&sink);
        options.custom_shortcuts.push(Shortcut {
            key: SHORTCUT_KEY,
            description: SHORTCUT_DESCRIPTION.to_owned(),
            action: Box::new(move || print_bindings(&action_provider, action_sink.as_ref())),
        });
        original_registrar(options);
    });
    host.shortcuts.composed = true;

    Ok(())
}

/// The `b` action: re-fetch the current inventory set and write one rendered
/// block per worker to the sink, in set order. The single leading blank line
/// before the first block is the block's own leading newline.
fn print_bindings(provider: &InventoryProvider, sink: &dyn LogSink) {
    let inventories = match provider() {
        Ok(inventories) => inventories,
        Err(error) => {
            tracing::error!(%error, "failed to resolve worker bindings");
            return;
        }
    };

    let singular = inventories.len() == 1;
    for inventory in &inventories {
        let heading = if singular {
            singular_heading()
        } else {
            labelled_heading(&inventory.worker_label)
        };
        sink.info(&render(inventory, &heading));
    }
}
