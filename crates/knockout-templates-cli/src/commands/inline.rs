use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use knockout_templates_core::config::ResolvedSettings;
use knockout_templates_core::discovery;
use knockout_templates_core::observer::TracingObserver;
use knockout_templates_core::plugin::{SourceFile, TemplatePlugin};

use crate::output;

/// Inline templates into a page.
///
/// Reads the whole input (a file, or stdin for `-`) into memory, replaces the
/// include marker with the discovered templates, and writes the result to
/// `output_path` or stdout.
pub fn run(input: &Path, output_path: Option<&Path>, settings: ResolvedSettings) -> Result<()> {
    output::print_header("knockout-templates inline");
    output::print_key_value("Input", &input.display().to_string());
    output::print_key_value(
        "Templates",
        &discovery::wildcard(&settings.path, &settings.suffix),
    );

    let contents = read_input(input)?;
    let plugin = TemplatePlugin::with_observer(settings, TracingObserver);
    let file = plugin
        .transform(SourceFile::buffered(input, contents))
        .with_context(|| format!("failed to inline templates into {}", input.display()))?;
    let bytes = file.bytes().unwrap_or_default();

    match output_path {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))
}
