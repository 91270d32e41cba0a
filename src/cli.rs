//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_building_header, format_log_line, format_project_json, format_project_text,
    format_templates_json, format_templates_text, format_toast,
};
pub use route::RunContext;
