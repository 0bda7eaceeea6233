//! The logging-sink seam.
//!
//! The host owns the output channel; this core only writes preformatted text
//! blocks to it. Sink failures are not caught here, since the core has no
//! fallback output channel.

/// Where rendered binding tables and shortcut hints are written.
pub trait LogSink: Send + Sync {
    /// Write one informational message. Messages may span multiple lines.
    fn info(&self, message: &str);
}

/// Sink backed by the `tracing` infrastructure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
