//! Merge rules: defaults, override order, environment overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Environment variable prefix; nested keys use `__`, e.g.
/// `HACKPACK_GENERATOR__STEP_DELAY_MS=100`.
pub const ENV_PREFIX: &str = "HACKPACK";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("generator.step_delay_ms", 800)?
        .set_default("generator.finish_delay_ms", 500)?
        .set_default("generator.min_slug_len", 3)?
        .set_default("generator.repo_host", "github.com")?
        .set_default("generator.owner", "hackerman_99")?
        .set_default("generator.deploy_domain", "vercel.app")?
        .set_default("toasts.default_duration_ms", 4000)
}

/// Environment variables override every file source.
pub fn add_env_overrides(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
