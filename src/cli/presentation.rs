//! CLI presentation: text and json formatters for templates, generation
//! progress, the finished project and toasts.

use crate::catalog::Template;
use crate::error::ApiError;
use crate::project::Project;
use crate::toast::{Toast, ToastVariant};
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_templates_text(shown: &[&Template], total: usize) -> String {
    if total == 0 {
        return "No templates configured.\n\nAdd [[templates]] entries to config/config.toml.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Category", "Stack"]);
    for t in shown {
        table.add_row(vec![
            t.id.clone(),
            format!("{} {}", t.icon, t.name).trim().to_string(),
            t.category.to_string(),
            t.tech_stack.join(", "),
        ]);
    }
    format!("{}\n{} shown of {} total", table, shown.len(), total)
}

pub fn format_templates_json(shown: &[&Template], total: usize) -> Result<String, ApiError> {
    let out = json!({ "templates": shown, "shown": shown.len(), "total": total });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_log_line(line: &str) -> String {
    format!("  {} {}", "➜".dimmed(), line)
}

pub fn format_building_header(name: &str) -> String {
    format!("{}", format!("Building {}...", name).bold())
}

pub fn format_project_text(project: &Project) -> String {
    let mut output = format!("\n{}\n", "You're live!".green().bold());
    output.push_str(&format!("{} has been generated and deployed.\n\n", project.name.bold()));
    output.push_str(&format!("{}\n", "Repository".bold().underline()));
    output.push_str(&format!("  https://{}\n\n", project.repo_url));
    output.push_str(&format!("{}\n", "Deployment".bold().underline()));
    output.push_str(&format!("  {}\n\n", project.deploy_url));
    output.push_str(&format!("{}\n", "Next Steps".bold().underline()));
    for task in &project.tasks {
        if task.is_completed {
            output.push_str(&format!("  [x] {} {}\n", task.title.dimmed(), "DONE".green()));
        } else {
            output.push_str(&format!("  [ ] {}\n", task.title));
        }
    }
    output.push_str(&format!(
        "\nProject {} ({}), created {}",
        project.id,
        project.status.as_str(),
        project.created_at.to_rfc3339()
    ));
    output
}

pub fn format_project_json(project: &Project) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(project)?)
}

pub fn format_toast(toast: &Toast) -> String {
    let marker = match toast.variant {
        ToastVariant::Error => format!("{}", "✖".red()),
        ToastVariant::Success => format!("{}", "✔".green()),
        ToastVariant::Default => format!("{}", "•".cyan()),
    };
    match &toast.description {
        Some(description) => format!("{} {}: {}", marker, toast.title.bold(), description),
        None => format!("{} {}", marker, toast.title.bold()),
    }
}
