//! Generator timing and URL settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Pause before each narration line is shown
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Pause after the last line before the project is handed off
    #[serde(default = "default_finish_delay_ms")]
    pub finish_delay_ms: u64,

    /// Minimum slug length accepted by `start`
    #[serde(default = "default_min_slug_len")]
    pub min_slug_len: usize,

    #[serde(default = "default_repo_host")]
    pub repo_host: String,

    /// Account the fabricated repository belongs to
    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_deploy_domain")]
    pub deploy_domain: String,
}

fn default_step_delay_ms() -> u64 {
    800
}

fn default_finish_delay_ms() -> u64 {
    500
}

fn default_min_slug_len() -> usize {
    3
}

fn default_repo_host() -> String {
    "github.com".to_string()
}

fn default_owner() -> String {
    "hackerman_99".to_string()
}

fn default_deploy_domain() -> String {
    "vercel.app".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            finish_delay_ms: default_finish_delay_ms(),
            min_slug_len: default_min_slug_len(),
            repo_host: default_repo_host(),
            owner: default_owner(),
            deploy_domain: default_deploy_domain(),
        }
    }
}

impl GeneratorConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn finish_delay(&self) -> Duration {
        Duration::from_millis(self.finish_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_slug_len == 0 {
            return Err("min_slug_len must be at least 1".to_string());
        }
        if self.repo_host.trim().is_empty() {
            return Err("repo_host cannot be empty".to_string());
        }
        if self.owner.trim().is_empty() {
            return Err("owner cannot be empty".to_string());
        }
        if self.deploy_domain.trim_matches('.').is_empty() {
            return Err("deploy_domain cannot be empty".to_string());
        }
        Ok(())
    }
}
