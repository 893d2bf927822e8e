//! # hab-config
//!
//! Layered configuration loading for Habitat using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HABITAT_*` prefix, `__` as separator)
//! 2. Project-level `.habitat/config.toml`
//! 3. User-level `~/.config/habitat/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HABITAT_CONTENT__HABITS_DIR` -> `content.habits_dir`,
//! `HABITAT_PIPELINE__CONCURRENCY` -> `pipeline.concurrency`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use hab_config::HabConfig;
//!
//! let config = HabConfig::load_with_dotenv(Path::new(".")).expect("config");
//! println!("habits root: {}", config.content.habits_dir.display());
//! ```

mod content;
mod error;
mod pipeline;
mod reports;
mod validation;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use pipeline::PipelineConfig;
pub use reports::ReportsConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HabConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

impl HabConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables), with paths resolved against `project_root`.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when figment extraction fails.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment(project_root).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the project root before building the figment. This
    /// is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when figment extraction fails.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_path(project_root.join(".env"));
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(".habitat/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HABITAT_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("habitat").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HabConfig::default();
        assert_eq!(config.pipeline.concurrency, 8);
        assert_eq!(config.validation.min_summary_len, 50);
        assert_eq!(config.reports.dir, PathBuf::from("reports"));
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = HabConfig::figment(Path::new("/nonexistent"));
        let config: HabConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.content.index_file, "index.json");
        assert!(config.pipeline.timeout_secs.is_none());
    }
}
