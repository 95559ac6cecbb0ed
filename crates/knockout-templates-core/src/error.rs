//! Unified error types for knockout-templates.

use std::path::PathBuf;
use thiserror::Error;

/// Name reported on the host error channel for plugin-level failures.
pub const PLUGIN_NAME: &str = "knockout-templates";

/// All errors that can occur while inlining templates.
#[derive(Error, Debug)]
pub enum KnockoutError {
    // --- Configuration ---

    /// The configuration file (`knockout.config.json`) could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but is not valid settings JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `init` refused to overwrite an existing configuration file.
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),

    // --- Input ---

    /// A streamed record was handed to the plugin. Only buffered contents are supported.
    #[error("{plugin}: Currently streams are not supported.")]
    StreamsNotSupported { plugin: &'static str },

    // --- Templates ---

    /// The glob built from `path` and `suffix` is not a valid pattern.
    #[error("invalid template pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Walking the template directory failed part-way.
    #[error("template discovery failed under {root}: {message}")]
    Discovery { root: PathBuf, message: String },

    /// A discovered template could not be read.
    #[error("failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KnockoutError {
    /// The plugin error raised for streamed input.
    pub fn streams_not_supported() -> Self {
        Self::StreamsNotSupported {
            plugin: PLUGIN_NAME,
        }
    }
}

/// Alias for `Result<T, KnockoutError>`.
pub type Result<T> = std::result::Result<T, KnockoutError>;
