//! Minimal fake dev server wiring the bindings shortcut end to end.
//!
//! Type `b` + enter to print the binding tables, anything else to see the
//! pass-through behavior, and `q` + enter to quit. The real host (process
//! model, file watching) is out of scope; this just exercises the composer.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use bindings_dev::{
    ComposerConfig, ExtensionPoints, InventoryProvider, LogSink, Shortcut, ShortcutOptions,
    install,
};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sink writing straight to stdout, like a dev server's console logger.
struct StdoutSink;

impl LogSink for StdoutSink {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let snapshots = vec![
        json!({
            "name": "demo-worker",
            "kv_namespaces": [{ "binding": "KV", "id": "demo-kv-id" }],
            "hello_world": [{ "binding": "HELLO_WORLD" }],
            "queues": { "producers": [{ "binding": "JOBS", "queue": "demo-jobs" }] },
        }),
        json!({
            "name": "demo-auxiliary",
            "services": [{ "binding": "SERVICE", "service": "demo-worker" }],
        }),
    ];
    let provider: InventoryProvider = Arc::new(move || {
        let (primary, auxiliaries) = snapshots.split_first().expect("primary snapshot");
        bindings_config::build(primary, auxiliaries)
    });

    let shortcuts: Arc<Mutex<Vec<Shortcut>>> = Arc::new(Mutex::new(Vec::new()));
    let registered = Arc::clone(&shortcuts);
    let mut host = ExtensionPoints::new(
        || println!("dev server listening on http://localhost:5173"),
        move |options: ShortcutOptions| {
            if options.print {
                for shortcut in &options.custom_shortcuts {
                    println!("  press {} + enter to {}", shortcut.key, shortcut.description);
                }
            }
            *registered.lock().unwrap() = options.custom_shortcuts;
        },
    );

    install(
        &mut host,
        provider,
        Arc::new(StdoutSink),
        ComposerConfig::default(),
    )?;

    host.print_banner();
    host.bind_shortcuts(ShortcutOptions {
        print: true,
        custom_shortcuts: vec![Shortcut {
            key: 'q',
            description: "quit".to_owned(),
            action: Box::new(|| {}),
        }],
    });

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "q" => break,
            key => {
                let shortcuts = shortcuts.lock().unwrap();
                match shortcuts
                    .iter()
                    .find(|s| key.chars().next() == Some(s.key) && key.len() == 1)
                {
                    Some(shortcut) => (shortcut.action)(),
                    None => println!("unknown shortcut {key:?}"),
                }
            }
        }
    }

    Ok(())
}
