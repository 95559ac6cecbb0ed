//! Diagnostics emitted while inlining.
//!
//! The transform never logs directly. It reports through an [`InlineObserver`],
//! which the CLI backs with [`TracingObserver`] and tests replace with a recorder.

/// Receives diagnostics from the inliner. Every method defaults to a no-op.
pub trait InlineObserver {
    /// The buffer does not contain the include marker.
    fn marker_missing(&self) {}

    /// Discovery matched no files for `wildcard`.
    fn no_templates(&self, _wildcard: &str) {}

    /// A template is about to be inlined. Only reported in debug mode.
    fn processing_template(&self, _name: &str) {}

    /// A parameters block was removed. Only reported in debug mode.
    fn docs_removed(&self, _matched: &str) {}
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl InlineObserver for TracingObserver {
    fn marker_missing(&self) {
        tracing::warn!("No include marker found.");
    }

    fn no_templates(&self, wildcard: &str) {
        tracing::warn!("No templates found at {wildcard}");
    }

    fn processing_template(&self, name: &str) {
        tracing::info!("Processing template {name}");
    }

    fn docs_removed(&self, matched: &str) {
        tracing::info!("Removed docs {matched}");
    }
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl InlineObserver for SilentObserver {}
