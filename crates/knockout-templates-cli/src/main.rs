//! knockout-templates CLI — inline Knockout templates into an HTML page.
//!
//! Provides three commands: `inline`, `list`, and `init`.
//!
//! Settings come from `knockout.config.json` when present, overridden by
//! command-line flags. Each command delegates to
//! [`knockout_templates_core`].

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use knockout_templates_core::config::{InlineSettings, CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "knockout-templates",
    about = "Inline Knockout HTML templates as script blocks at a marker comment",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the settings file (ignored if it does not exist)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    settings: SettingsArgs,
}

/// Command-line overrides for the settings file.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Log each processed template and removed docs block
    #[arg(long, global = true)]
    debug: bool,

    /// Strip the first `<!-- parameters: ... -->` block from each template
    #[arg(long, global = true)]
    remove_docs: bool,

    /// Template file suffix
    #[arg(long, global = true, env = "KNOCKOUT_TEMPLATES_SUFFIX")]
    suffix: Option<String>,

    /// Directory searched for templates
    #[arg(long, global = true, env = "KNOCKOUT_TEMPLATES_PATH")]
    path: Option<String>,

    /// Prefix removed from template paths to form template ids (defaults to --path)
    #[arg(long, global = true)]
    default_path: Option<String>,
}

impl SettingsArgs {
    fn into_settings(self) -> InlineSettings {
        InlineSettings {
            debug: self.debug.then_some(true),
            remove_docs: self.remove_docs.then_some(true),
            suffix: self.suffix,
            path: self.path,
            default_path: self.default_path,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the include marker in a page with the discovered templates
    Inline {
        /// Page to transform (`-` reads stdin)
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List discovered templates and the ids they would get
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a settings file with the default values
    Init,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let file_settings = InlineSettings::load_optional(&cli.config)?;
    let settings = file_settings.merge(cli.settings.into_settings());
    let resolved = InlineSettings::resolve(Some(&settings));

    // Initialize tracing; debug mode needs at least info to be visible
    let filter = match (cli.verbose, resolved.debug) {
        (0, false) => "warn",
        (0, true) | (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if config_found {
        tracing::debug!("loaded settings from {}", cli.config.display());
    } else {
        tracing::debug!("no config file at {}, using defaults", cli.config.display());
    }
    tracing::debug!("resolved settings: {resolved:?}");

    match cli.command {
        Commands::Inline { input, output } => {
            commands::inline::run(&input, output.as_deref(), resolved)?;
        }
        Commands::List { json } => {
            commands::list::run(&resolved, json)?;
        }
        Commands::Init => {
            commands::init::run(&cli.config, &resolved)?;
        }
    }

    Ok(())
}
