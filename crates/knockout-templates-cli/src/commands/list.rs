use anyhow::Result;

use knockout_templates_core::config::ResolvedSettings;
use knockout_templates_core::discovery;

use crate::output;

/// Print the templates discovery finds and the id each one would get.
///
/// With `json`, prints an array of `{ "path", "name" }` objects to stdout and
/// nothing else.
pub fn run(settings: &ResolvedSettings, json: bool) -> Result<()> {
    let templates = discovery::list_templates(settings)?;
    let wildcard = discovery::wildcard(&settings.path, &settings.suffix);

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    output::print_header("knockout-templates list");
    output::print_key_value("Pattern", &wildcard);
    output::print_key_value("Id prefix", &settings.default_path);

    if templates.is_empty() {
        output::print_warning(&format!("No templates found at {wildcard}"));
        return Ok(());
    }

    for template in &templates {
        println!("{}\t{}", template.name, template.path.display());
    }
    output::print_success(&format!("{} template(s)", templates.len()));

    Ok(())
}
