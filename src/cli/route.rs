//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::catalog::{CategoryFilter, Template};
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_building_header, format_log_line, format_project_json, format_project_text,
    format_templates_json, format_templates_text, format_toast,
};
use crate::config::{ConfigLoader, HackpackConfig};
use crate::error::ApiError;
use crate::generator::{FnListener, GenerationSequencer};
use crate::project::Project;
use crate::slug::slugify;
use crate::toast::ToastQueue;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace and effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: HackpackConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(workspace_root, config.validated()?))
    }

    pub fn with_config(workspace_root: PathBuf, config: HackpackConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &HackpackConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }

    /// Execute a command and return its output for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = crate::cli::command_name(command), "executing command");
        match command {
            Commands::Generate {
                name,
                template,
                format,
            } => {
                let template = self.config.catalog().get(template)?.clone();
                let name = match name {
                    Some(name) => name.clone(),
                    None => prompt_project_name()?,
                };
                let project = self.generate(template, name, *format == OutputFormat::Text)?;
                match format {
                    OutputFormat::Json => format_project_json(&project),
                    OutputFormat::Text => Ok(format_project_text(&project)),
                }
            }
            Commands::Slug { name } => Ok(slugify(name)),
            Commands::Templates { category, format } => {
                let filter: CategoryFilter = category.parse()?;
                let catalog = self.config.catalog();
                let shown = catalog.filter(filter);
                match format {
                    OutputFormat::Json => format_templates_json(&shown, catalog.len()),
                    OutputFormat::Text => Ok(format_templates_text(&shown, catalog.len())),
                }
            }
            Commands::Config => self.config.to_toml_string(),
        }
    }

    /// Drive the generation flow on a fresh runtime, streaming log lines to
    /// stdout when `live` is set. Toasts raised by the flow go to stderr.
    fn generate(&self, template: Template, name: String, live: bool) -> Result<Project, ApiError> {
        let toasts = ToastQueue::new(&self.config.toasts);
        let listener = FnListener::new(
            |project: Project| info!(project_id = %project.id, "project handed off"),
            || {},
        );
        let sequencer = GenerationSequencer::new(
            template,
            self.config.generator.clone(),
            toasts.clone(),
            Arc::new(listener),
        );
        sequencer.set_name(name.clone())?;

        let rt = tokio::runtime::Runtime::new()?;
        let result: Result<Project, ApiError> = rt.block_on(async {
            let mut logs = sequencer.subscribe_logs();
            let mut handle = sequencer.start().map_err(ApiError::from)?;
            if live {
                println!("{}", format_building_header(&name));
            }
            let mut printed = 0;
            loop {
                tokio::select! {
                    joined = &mut handle => {
                        if live {
                            print_new_lines(&sequencer.logs(), &mut printed);
                        }
                        return joined.map_err(|e| ApiError::TaskFailed(e.to_string()));
                    }
                    changed = logs.changed() => {
                        if changed.is_ok() && live {
                            let current = logs.borrow_and_update().clone();
                            print_new_lines(&current, &mut printed);
                        }
                    }
                }
            }
        });

        for toast in toasts.snapshot() {
            eprintln!("{}", format_toast(&toast));
        }
        result
    }
}

fn print_new_lines(lines: &[String], printed: &mut usize) {
    for line in lines.iter().skip(*printed) {
        println!("{}", format_log_line(line));
    }
    *printed = (*printed).max(lines.len());
}

fn prompt_project_name() -> Result<String, ApiError> {
    dialoguer::Input::<String>::new()
        .with_prompt("Project name")
        .interact_text()
        .map_err(|e| ApiError::Prompt(e.to_string()))
}
