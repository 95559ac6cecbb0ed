//! Core library for knockout-templates.
//!
//! Finds the `<!-- Gulp Knockout Templates -->` marker in an HTML buffer and
//! replaces it with every template file under a directory, each wrapped in a
//! `<script type="text/html" id="...">` block for Knockout's template binding.
//!
//! - [`config`] — settings, defaults, and the JSON config file
//! - [`discovery`] — template enumeration and naming
//! - [`docs`] — `<!-- parameters: ... -->` block removal
//! - [`inliner`] — the marker splice
//! - [`observer`] — diagnostics seam
//! - [`plugin`] — the record-level entry point used by build pipelines

pub mod config;
pub mod discovery;
pub mod docs;
pub mod error;
pub mod inliner;
pub mod observer;
pub mod plugin;
