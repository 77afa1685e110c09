use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{global_config_path, LessonkitConfig};
use crate::error::{common, LessonkitError, Result};

/// Name of the project-level configuration file
pub const PROJECT_CONFIG_FILE: &str = "lessonkit.toml";

/// Accumulates TOML layers and resolves them into a `LessonkitConfig`
#[derive(Debug, Default)]
pub struct ConfigLoader {
    merged: toml::Table,
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a file if it exists; returns whether it was loaded
    pub fn load_optional(&mut self, path: &Path) -> Result<bool> {
        if !path.exists() {
            trace!("No configuration at {}", path.display());
            return Ok(false);
        }
        self.load_required(path)?;
        Ok(true)
    }

    /// Merge a file that must exist
    pub fn load_required(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(common::config_not_found(path));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LessonkitError::from(e).with_path(path))?;
        self.merge_str(&content)
            .map_err(|e| e.with_context(path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        self.sources.push(path.to_path_buf());
        Ok(())
    }

    /// Merge a TOML document on top of the layers loaded so far
    pub fn merge_str(&mut self, content: &str) -> Result<()> {
        let table: toml::Table = toml::from_str(content)?;
        merge_tables(&mut self.merged, table);
        Ok(())
    }

    /// Files merged so far, lowest priority first
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Deserialize the merged layers and apply environment overrides
    pub fn finish(self, env: &HashMap<String, String>) -> Result<LessonkitConfig> {
        let mut config = toml::Value::Table(self.merged).try_into::<LessonkitConfig>()?;
        config.merge_env_vars(env)?;
        Ok(config)
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

/// Load configuration from every source
///
/// `explicit` is the `--config` argument; it must exist when given.
/// `project_dir` is searched for `lessonkit.toml`.
pub fn load_config(explicit: Option<&Path>, project_dir: &Path) -> Result<LessonkitConfig> {
    let mut loader = ConfigLoader::new();

    if let Some(global) = global_config_path() {
        loader.load_optional(&global)?;
    }
    loader.load_optional(&project_dir.join(PROJECT_CONFIG_FILE))?;
    if let Some(path) = explicit {
        loader.load_required(path)?;
    }

    let env: HashMap<String, String> = std::env::vars().collect();
    loader.finish(&env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_later_layers_override_only_what_they_set() {
        let mut loader = ConfigLoader::new();
        loader
            .merge_str("log_level = \"warn\"\n[grading]\ndefault_passing_grade = 50\n")
            .unwrap();
        loader.merge_str("[grading]\ndefault_passing_grade = 65.5\n").unwrap();

        let config = loader.finish(&HashMap::new()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.grading.default_passing_grade, 65.5);
    }

    #[test]
    fn test_env_wins_over_files() {
        let mut loader = ConfigLoader::new();
        loader.merge_str("log_level = \"warn\"\n").unwrap();

        let env = HashMap::from([("LESSONKIT_LOG_LEVEL".to_string(), "trace".to_string())]);
        let config = loader.finish(&env).unwrap();
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_project_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[validation]\ncollect_all = true\n").unwrap();

        let mut loader = ConfigLoader::new();
        assert!(loader.load_optional(&path).unwrap());
        assert_eq!(loader.sources(), &[path]);
        assert!(loader.finish(&HashMap::new()).unwrap().validation.collect_all);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    }

    #[test]
    fn test_optional_missing_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let mut loader = ConfigLoader::new();

        assert!(!loader.load_optional(&dir.path().join("absent.toml")).unwrap());
        assert!(loader.sources().is_empty());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut loader = ConfigLoader::new();
        loader.merge_str("log_level = 3\n").unwrap();

        let err = loader.finish(&HashMap::new()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
    }
}
