//! Config loading entry points.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::HackpackConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Priority order (highest to lowest):
    /// 1. `HACKPACK_*` environment variables
    /// 2. config/{HACKPACK_ENV}.toml in the workspace
    /// 3. config/config.toml in the workspace
    /// 4. Global user config file
    /// 5. Defaults
    pub fn load(workspace_root: &Path) -> Result<HackpackConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = merge_policy::add_env_overrides(builder);

        let config: HackpackConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            templates = config.templates.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load from a single explicit file (environment overrides still apply).
    pub fn load_from_file(path: &Path) -> Result<HackpackConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = merge_policy::add_env_overrides(builder);
        builder.build()?.try_deserialize()
    }

    /// Location of the global config file, if HOME or XDG_CONFIG_HOME is set.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
