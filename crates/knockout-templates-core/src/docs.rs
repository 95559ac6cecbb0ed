//! Removal of `<!-- parameters: ... -->` documentation blocks from templates.
//!
//! Templates may open with an authoring note describing their parameters. These
//! get bulky, so production builds can drop them. Only the first block in a
//! template is removed, and other HTML comments are left alone.

use std::sync::LazyLock;

use regex::Regex;

use crate::observer::InlineObserver;

/// First `<!-- parameters:` up to the nearest `-->`, across lines.
static PARAMETERS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- parameters: ?.*?-->").expect("Invalid parameters block regex")
});

/// Remove the first parameters block from `template`.
///
/// When `debug` is set the matched block is reported to `observer` before removal.
pub fn remove_docs(template: &str, debug: bool, observer: &dyn InlineObserver) -> String {
    let Some(found) = PARAMETERS_BLOCK.find(template) else {
        return template.to_string();
    };

    if debug {
        observer.docs_removed(found.as_str());
    }

    let mut stripped = String::with_capacity(template.len() - found.len());
    stripped.push_str(&template[..found.start()]);
    stripped.push_str(&template[found.end()..]);
    stripped
}
