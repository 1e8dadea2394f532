//! Configuration management for tour
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (TOUR_* prefix, `__` between sections)
//! 3. tour.local.toml (gitignored, local overrides)
//! 4. tour.toml (git-tracked, project config)
//! 5. ~/.config/tour/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tour::Inputs;
use tour::conditions::ConditionsInput;
use tour::maps::MapsInput;
use tour::runes::RunesInput;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main tour configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub output: OutputConfig,
    pub conditions: ConditionsInput,
    pub maps: MapsInput,
    pub runes: RunesInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// How lesson results are written to stdout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The lesson transcript, one line per printed line.
    #[default]
    Text,
    /// The structured lesson report as pretty-printed JSON.
    Json,
}

impl TourConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Lesson inputs carried by this configuration
    pub fn inputs(&self) -> Inputs {
        Inputs {
            conditions: self.conditions.clone(),
            maps: self.maps.clone(),
            runes: self.runes.clone(),
        }
    }

    /// Reject inputs that would make a lesson fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conditions.divisor == 0 {
            return Err(ConfigError::ValidationError(
                "conditions.divisor must be non-zero".to_string(),
            ));
        }
        if self.maps.entries.iter().any(|e| e.key.is_empty()) {
            return Err(ConfigError::ValidationError(
                "maps.entries keys must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}
