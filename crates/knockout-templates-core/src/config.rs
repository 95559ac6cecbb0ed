//! Inliner settings: the partial, user-facing form and the resolved form.
//!
//! [`InlineSettings`] mirrors `knockout.config.json`. Every key is optional;
//! [`InlineSettings::resolve`] fills the gaps with the documented defaults and
//! yields a [`ResolvedSettings`] that the rest of the crate works with.
//!
//! ```text
//! {
//!   "debug": false,
//!   "removeDocs": true,
//!   "suffix": ".tmpl.html",
//!   "path": "./templates/",
//!   "defaultPath": "./templates/"
//! }
//! ```
//!
//! `defaultPath` falls back to the resolved `path`, so setting only `path` keeps
//! template names relative to it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KnockoutError, Result};

/// Default file name looked up by the CLI.
pub const CONFIG_FILE: &str = "knockout.config.json";

/// Default template file suffix.
pub const DEFAULT_SUFFIX: &str = ".tmpl.html";

/// Default template search root.
pub const DEFAULT_PATH: &str = "./";

/// Settings as supplied by a caller or a config file. Absent keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InlineSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_docs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_path: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSettings {
    /// Emit per-template diagnostics.
    pub debug: bool,
    /// Strip the first `<!-- parameters: ... -->` block from each template.
    pub remove_docs: bool,
    /// Template file suffix, also removed from template names.
    pub suffix: String,
    /// Directory searched for templates.
    pub path: String,
    /// Prefix removed from template paths to form template names.
    pub default_path: String,
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        InlineSettings::resolve(None)
    }
}

/// Return the configured value when present, otherwise `default`.
pub fn resolve_option<T: Clone>(configured: Option<&T>, default: T) -> T {
    configured.cloned().unwrap_or(default)
}

impl InlineSettings {
    /// Resolve optional settings into concrete values.
    ///
    /// `None` and `Some(&InlineSettings::default())` resolve identically.
    pub fn resolve(settings: Option<&InlineSettings>) -> ResolvedSettings {
        let debug = resolve_option(settings.and_then(|s| s.debug.as_ref()), false);
        let remove_docs = resolve_option(settings.and_then(|s| s.remove_docs.as_ref()), false);
        let suffix = resolve_option(
            settings.and_then(|s| s.suffix.as_ref()),
            DEFAULT_SUFFIX.to_string(),
        );
        let path = resolve_option(
            settings.and_then(|s| s.path.as_ref()),
            DEFAULT_PATH.to_string(),
        );
        let default_path = resolve_option(settings.and_then(|s| s.default_path.as_ref()), path.clone());

        ResolvedSettings {
            debug,
            remove_docs,
            suffix,
            path,
            default_path,
        }
    }

    /// Overlay `other` on top of `self`; keys present in `other` win.
    pub fn merge(self, other: InlineSettings) -> InlineSettings {
        InlineSettings {
            debug: other.debug.or(self.debug),
            remove_docs: other.remove_docs.or(self.remove_docs),
            suffix: other.suffix.or(self.suffix),
            path: other.path.or(self.path),
            default_path: other.default_path.or(self.default_path),
        }
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| KnockoutError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| KnockoutError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load settings from `path` if the file exists, otherwise return empty settings.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write settings as pretty JSON. Fails if the file already exists.
    pub fn save_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(KnockoutError::ConfigExists(path.to_path_buf()));
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| KnockoutError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }
}

impl From<&ResolvedSettings> for InlineSettings {
    fn from(resolved: &ResolvedSettings) -> Self {
        Self {
            debug: Some(resolved.debug),
            remove_docs: Some(resolved.remove_docs),
            suffix: Some(resolved.suffix.clone()),
            path: Some(resolved.path.clone()),
            default_path: Some(resolved.default_path.clone()),
        }
    }
}
