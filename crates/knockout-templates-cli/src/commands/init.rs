use std::path::Path;

use anyhow::Result;

use knockout_templates_core::config::{InlineSettings, ResolvedSettings};

use crate::output;

/// Write a settings file.
///
/// The file holds the resolved settings, so flags passed to `init` (for
/// example `--path ./views/`) end up in it. An existing file is never
/// overwritten.
pub fn run(config_path: &Path, settings: &ResolvedSettings) -> Result<()> {
    output::print_header("knockout-templates init");

    InlineSettings::from(settings).save_new(config_path)?;

    output::print_success(&format!("Created {}", config_path.display()));
    output::print_key_value("path", &settings.path);
    output::print_key_value("suffix", &settings.suffix);
    output::print_key_value("defaultPath", &settings.default_path);
    output::print_key_value("removeDocs", &settings.remove_docs.to_string());

    Ok(())
}
