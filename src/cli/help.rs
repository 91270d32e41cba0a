//! CLI command-name contract used in logs.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "generate", "templates").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Slug { .. } => "slug",
        Commands::Templates { .. } => "templates",
        Commands::Config => "config",
    }
}
