//! Configuration settings for scaffold-codegen

use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{Result, ScaffoldError};
use crate::request::Namespace;

/// Settings shared by every generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Base directory under which `<module>/` is created
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Path between the module directory and the namespace directories
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Namespace used when the caller does not supply one
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Package of the base library (`AbstractEntity`, `AbstractDao`, ...)
    #[serde(default = "default_core_package")]
    pub core_package: String,

    /// Dry run mode - render without writing files
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}
fn default_source_root() -> PathBuf {
    PathBuf::from(defaults::SOURCE_ROOT)
}
fn default_namespace() -> String {
    defaults::NAMESPACE.to_string()
}
fn default_core_package() -> String {
    defaults::CORE_PACKAGE.to_string()
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            source_root: default_source_root(),
            namespace: default_namespace(),
            core_package: default_core_package(),
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScaffoldConfig = toml::from_str(&content).map_err(|e| {
            ScaffoldError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs.
    ///
    /// Only an explicitly given file is read; without one the defaults apply.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        let config: ScaffoldConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source_root.as_os_str().is_empty() {
            return Err(ScaffoldError::ValidationError(
                "source_root must not be empty".into(),
            ));
        }

        if self.core_package.trim().is_empty() {
            return Err(ScaffoldError::ValidationError(
                "core_package must not be empty".into(),
            ));
        }

        Namespace::parse(&self.namespace)?;

        Ok(())
    }
}
