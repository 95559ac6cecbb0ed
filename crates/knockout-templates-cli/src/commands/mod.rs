//! CLI command implementations for knockout-templates.
//!
//! Each module corresponds to a subcommand (`knockout-templates <command>`).

pub mod init;
pub mod inline;
pub mod list;
