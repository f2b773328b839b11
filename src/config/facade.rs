//! Loader entry points: workspace-aware layered load and explicit-file load.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::SocialqConfig;
use config::{ConfigError, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence, lowest to highest: defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{SOCIALQ_ENV}.toml`,
    /// `SOCIALQ__SECTION__KEY` environment variables.
    pub fn load(workspace_root: &Path) -> Result<SocialqConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: SocialqConfig = builder
            .add_source(environment())
            .build()?
            .try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit TOML file, skipping the file
    /// search. Environment variables still apply.
    pub fn load_from_file(path: &Path) -> Result<SocialqConfig, ConfigError> {
        let config: SocialqConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .add_source(environment())
            .build()?
            .try_deserialize()?;
        debug!(path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    /// Location of the per-user configuration file, if a home is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Built-in defaults only
    pub fn default() -> SocialqConfig {
        SocialqConfig::default()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SOCIALQ")
        .separator("__")
        .try_parsing(true)
}
