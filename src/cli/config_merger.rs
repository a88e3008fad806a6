//! Merges CLI overrides into file-based configuration
//!
//! Precedence, highest first: CLI flags, `PAGEHOOK_*` environment variables,
//! configuration files, built-in defaults.

use std::path::Path;

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration for the given CLI arguments
    ///
    /// `--config` selects a single file; otherwise the layered loader is used.
    /// `--env` replaces the environment detected from `PAGEHOOK_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_deref() {
            Some(path) => ConfigLoader::from_file(path)?,
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    /// Applies CLI overrides and re-validates the result
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(store) = cli.store.as_deref() {
            config.store.path = path_string(store)?;
        }

        if let Some(level) = cli.log_level_override() {
            config.logger.level = level.to_string();
        }

        config.validate()?;

        Ok(config)
    }
}

fn path_string(path: &Path) -> Result<String, ConfigError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::invalid("store.path", "path is not valid UTF-8"))
}
