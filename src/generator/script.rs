//! Narration played back while a project is "generated".

use crate::catalog::Template;

/// Number of lines in every run.
pub const SCRIPT_LEN: usize = 7;

/// Narration lines for a template, in playback order.
pub fn narration(template: &Template) -> Vec<String> {
    vec![
        "Authenticating with GitHub...".to_string(),
        format!("Cloning template: {}...", template.name),
        "Scaffolding project structure...".to_string(),
        "Generating README.md...".to_string(),
        "Creating initial commit...".to_string(),
        "Pushing to remote origin...".to_string(),
        "Triggering Vercel deployment...".to_string(),
    ]
}
