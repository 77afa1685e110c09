//! Configuration for the lessonkit command-line tool
//!
//! Sources, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. Global config file (`<config dir>/lessonkit/config.toml`)
//! 3. Project config file (`./lessonkit.toml`)
//! 4. An explicit `--config` file
//! 5. Environment variables (`LESSONKIT_*`)
//!
//! Files are merged key by key, so a later file only overrides what it sets.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::core::quiz::DEFAULT_PASSING_GRADE;
use crate::error::{common, Result};

pub mod loader;

pub use loader::{load_config, ConfigLoader, PROJECT_CONFIG_FILE};

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub const ENV_LOG_LEVEL: &str = "LESSONKIT_LOG_LEVEL";
pub const ENV_DEFAULT_PASSING_GRADE: &str = "LESSONKIT_DEFAULT_PASSING_GRADE";
pub const ENV_COLLECT_ALL: &str = "LESSONKIT_COLLECT_ALL";

/// Path of the per-user configuration file, if a home directory is known
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "lessonkit", "lessonkit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_passing_grade() -> f64 {
    DEFAULT_PASSING_GRADE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonkitConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub grading: GradingSettings,

    #[serde(default)]
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingSettings {
    /// Passing grade given to newly drafted quizzes.
    #[serde(default = "default_passing_grade")]
    pub default_passing_grade: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Report every violation instead of stopping at the first one.
    #[serde(default)]
    pub collect_all: bool,
}

impl Default for LessonkitConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            grading: GradingSettings::default(),
            validation: ValidationSettings::default(),
        }
    }
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self {
            default_passing_grade: DEFAULT_PASSING_GRADE,
        }
    }
}

impl LessonkitConfig {
    /// Parse a TOML document into a validated configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LESSONKIT_*` overrides from the given variables
    pub fn merge_env_vars(&mut self, vars: &HashMap<String, String>) -> Result<()> {
        if let Some(level) = vars.get(ENV_LOG_LEVEL) {
            self.log_level = level.trim().to_lowercase();
        }

        if let Some(grade) = vars.get(ENV_DEFAULT_PASSING_GRADE) {
            self.grading.default_passing_grade = grade
                .trim()
                .parse()
                .map_err(|e| common::config_invalid_value(ENV_DEFAULT_PASSING_GRADE, e))?;
        }

        if let Some(flag) = vars.get(ENV_COLLECT_ALL) {
            self.validation.collect_all = match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(common::config_invalid_value(
                        ENV_COLLECT_ALL,
                        format!("'{other}' is not a boolean"),
                    ))
                }
            };
        }

        self.validate()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(common::config_invalid_value(
                "log_level",
                format!(
                    "'{}' is not one of {}",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        let grade = self.grading.default_passing_grade;
        if !(0.0..=100.0).contains(&grade) {
            return Err(common::config_invalid_value(
                "grading.default_passing_grade",
                format!("{grade} is outside 0-100"),
            ));
        }

        Ok(())
    }
}
