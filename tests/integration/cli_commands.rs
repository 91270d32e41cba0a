//! CLI route table against a file-backed configuration.

use hackpack::cli::{Commands, OutputFormat, RunContext};
use hackpack::project::Project;
use hackpack::ApiError;
use tempfile::TempDir;

fn write_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("hackpack.toml");
    std::fs::write(
        &path,
        r#"
[generator]
step_delay_ms = 1
finish_delay_ms = 1
owner = "demo-user"

[[templates]]
id = "expo-mobile"
name = "Expo Mobile Stub"
category = "Mobile"

[[templates]]
id = "supabase-crud"
name = "Supabase CRUD"
category = "Web"
"#,
    )
    .unwrap();
    path
}

#[test]
fn generate_returns_project_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir);
    let cli = RunContext::new(temp_dir.path().to_path_buf(), Some(config_path)).unwrap();

    let out = cli
        .execute(&Commands::Generate {
            name: Some("Hack Night 2024".to_string()),
            template: "expo-mobile".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let project: Project = serde_json::from_str(&out).unwrap();
    assert_eq!(project.repo_url, "github.com/demo-user/hack-night-2024");
    assert_eq!(project.deploy_url, "https://hack-night-2024.vercel.app");
    assert_eq!(project.tasks.len(), 3);
}

#[test]
fn templates_text_lists_configured_entries() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir);
    let cli = RunContext::new(temp_dir.path().to_path_buf(), Some(config_path)).unwrap();

    let out = cli
        .execute(&Commands::Templates {
            category: "all".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(out.contains("expo-mobile"));
    assert!(out.contains("supabase-crud"));
    assert!(out.contains("2 shown of 2 total"));
}

#[test]
fn invalid_config_is_rejected_at_startup() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("invalid.toml");
    std::fs::write(&path, "[toasts]\ndefault_duration_ms = 0\n").unwrap();

    let err = RunContext::new(temp_dir.path().to_path_buf(), Some(path))
        .err()
        .expect("zero toast duration should be rejected");
    assert!(matches!(err, ApiError::ConfigError(_)));
}
