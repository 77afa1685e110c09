use super::{ErrorCode, LessonkitError};
use std::path::PathBuf;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a storage LessonkitError, keeping the original as source
    fn to_storage_error(self, message: impl Into<String>) -> Result<T, LessonkitError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_storage_error(self, message: impl Into<String>) -> Result<T, LessonkitError> {
        self.map_err(|e| LessonkitError::storage(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> LessonkitError {
        LessonkitError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create an invalid configuration value error
    pub fn config_invalid_value(field: &str, reason: impl std::fmt::Display) -> LessonkitError {
        LessonkitError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid value for '{}': {}", field, reason),
        )
    }

    /// Create a storage read error for an input file
    pub fn input_read_error(path: PathBuf) -> LessonkitError {
        LessonkitError::storage_with_code(
            ErrorCode::STORAGE_IO_ERROR,
            "Failed to read input file",
            Some(path),
        )
    }
}
