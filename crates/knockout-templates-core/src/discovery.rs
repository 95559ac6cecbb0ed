//! Template discovery and naming.
//!
//! Templates are every file under `path` matching `**/*<suffix>`. Matches are
//! reported as `path` followed by the path relative to it, so a search root of
//! `./views/` yields `./views/user/card.tmpl.html`, never a normalized form. A
//! root without a trailing separator gets one, so `./views` yields the same
//! path and names keep the leading `/`.
//! Hidden files and directories are skipped and symlinks are reported without
//! being followed. Results are sorted lexically so output is stable across
//! platforms.
//!
//! A template's name is its path with the `defaultPath` prefix and the suffix
//! cut off by character count:
//!
//! ```text
//! ./views/user/card.tmpl.html
//! ^^^^^^^^               ^^^^^^^^^^   removed
//!         user/card                   name
//! ```

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::ResolvedSettings;
use crate::error::{KnockoutError, Result};

/// A discovered template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Path as reported by discovery.
    pub path: PathBuf,
    /// Identifier used for the generated script block.
    pub name: String,
}

/// The recursive glob searched for templates, e.g. `./**/*.tmpl.html`.
pub fn wildcard(path: &str, suffix: &str) -> String {
    format!("{path}**/*{suffix}")
}

/// List template files under `path` whose names end in `suffix`.
///
/// A missing search root yields an empty list.
pub fn discover(path: &str, suffix: &str) -> Result<Vec<PathBuf>> {
    let root = if path.is_empty() { Path::new(".") } else { Path::new(path) };
    if !root.is_dir() {
        tracing::debug!("template root {} is not a directory", root.display());
        return Ok(Vec::new());
    }

    let relative_glob = format!("**/*{}", Pattern::escape(suffix));
    let pattern = Pattern::new(&relative_glob).map_err(|e| KnockoutError::InvalidPattern {
        pattern: wildcard(path, suffix),
        source: e,
    })?;
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let prefix = if path.is_empty() || path.ends_with(['/', '\\']) {
        path.to_string()
    } else {
        format!("{path}/")
    };

    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| KnockoutError::Discovery {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");
        if pattern.matches_with(&relative, options) {
            found.push(format!("{prefix}{relative}"));
        }
    }

    found.sort();
    tracing::debug!("discovered {} template(s) at {}", found.len(), wildcard(path, suffix));
    Ok(found.into_iter().map(PathBuf::from).collect())
}

/// Derive a template name by dropping `default_path.len()` leading and
/// `suffix.len()` trailing characters from `template_path`.
///
/// When the prefix and suffix overlap the result is empty.
pub fn template_name(template_path: &str, default_path: &str, suffix: &str) -> String {
    let total = template_path.chars().count();
    let start = default_path.chars().count();
    let end = total.saturating_sub(suffix.chars().count());
    if end <= start {
        return String::new();
    }
    template_path.chars().skip(start).take(end - start).collect()
}

/// Discover templates for `settings` and name each one.
pub fn list_templates(settings: &ResolvedSettings) -> Result<Vec<TemplateEntry>> {
    let paths = discover(&settings.path, &settings.suffix)?;
    Ok(paths
        .into_iter()
        .map(|path| {
            let name = template_name(&path.to_string_lossy(), &settings.default_path, &settings.suffix);
            TemplateEntry { path, name }
        })
        .collect())
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}
