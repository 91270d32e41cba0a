//! Shared test utilities for integration tests
//!
//! Centralizes environment isolation and fixtures so each test module does not
//! reimplement them.

use hackpack::catalog::{Category, Template};
use hackpack::generator::{FlowListener, GeneratorConfig};
use hackpack::project::Project;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: StdMutex<()> = StdMutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    hackpack_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            hackpack_env: std::env::var("HACKPACK_ENV").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("HACKPACK_ENV", self.hackpack_env);
    }
}

fn restore_var(key: &str, value: Option<String>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}

/// Point HOME and XDG_CONFIG_HOME into `test_dir` for the duration of `f`.
///
/// The global config file then lives at `<test_dir>/hackpack/config.toml`.
pub fn with_config_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().to_str().unwrap());
    std::env::remove_var("HACKPACK_ENV");

    let result = f();

    env_state.restore();

    result
}

pub fn template(id: &str, name: &str, category: Category) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} template", name),
        tech_stack: vec!["TypeScript".to_string()],
        category,
        icon: String::new(),
        repo_url: format!("github.com/hackpack/{}", id),
    }
}

pub fn next_starter() -> Template {
    template("next-starter", "Next.js SaaS Starter", Category::Web)
}

/// Generator settings with the default 800/500 ms pacing.
pub fn paced_config() -> GeneratorConfig {
    GeneratorConfig::default()
}

/// Listener that records every callback.
#[derive(Default)]
pub struct RecordingListener {
    pub projects: Mutex<Vec<Project>>,
    cancels: AtomicUsize,
}

impl RecordingListener {
    pub fn cancels(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl FlowListener for RecordingListener {
    fn on_success(&self, project: Project) {
        self.projects.lock().push(project);
    }

    fn on_cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}
