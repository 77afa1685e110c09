use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;
pub mod validation;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};
pub use validation::{ValidationError, ValidationErrorKind};

/// The unified error type for lessonkit
#[derive(Error, Debug)]
pub enum LessonkitError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Storage error: {message}")]
    Storage {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        /// Every violation found, in the order they were reported
        violations: Vec<ValidationError>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LessonkitError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with default code
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            code: ErrorCode::STORAGE_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a storage error with specific code and path
    pub fn storage_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Storage {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Wrap one or more content violations
    ///
    /// The code is the first violation's code, or the generic validation code
    /// when the list is empty.
    pub fn validation(violations: Vec<ValidationError>) -> Self {
        let code = violations
            .first()
            .map(ValidationError::code)
            .unwrap_or(ErrorCode::VALIDATION_GENERIC);
        let message = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Self::Validation {
            code,
            message,
            violations,
            source: None,
        }
    }

    /// Create a validation error for malformed input that is not a content violation
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_INVALID_INPUT,
            message: message.into(),
            violations: Vec::new(),
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Storage { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Storage { message, .. }
            | Self::Validation { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Set the path for a storage error
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        if let Self::Storage { path: ref mut p, .. } = self {
            *p = Some(path.into());
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Storage { .. } => 4,
            Self::Validation { .. } => 8,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Storage { code, .. }
            | Self::Validation { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Content violations carried by a validation error
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::Validation { violations, .. } => violations,
            _ => &[],
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Storage { message, path, .. } => {
                if let Some(p) = path {
                    format!("Storage error at {}: {}", p.display(), message)
                } else {
                    format!("Storage error: {}", message)
                }
            }
            Self::Validation {
                message,
                violations,
                ..
            } => {
                if violations.is_empty() {
                    format!("Validation error: {}", message)
                } else {
                    violations
                        .iter()
                        .map(ValidationError::user_message)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        format!("{:#}", self)
    }
}

/// Type alias for Results using LessonkitError
pub type Result<T> = std::result::Result<T, LessonkitError>;

// Conversion from common error types

impl From<std::io::Error> for LessonkitError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::STORAGE_NOT_FOUND, "File or directory not found"),
            ErrorKind::PermissionDenied => {
                (ErrorCode::STORAGE_PERMISSION_DENIED, "Permission denied")
            }
            ErrorKind::InvalidData => (ErrorCode::VALIDATION_INVALID_INPUT, "Invalid data"),
            _ => (ErrorCode::STORAGE_IO_ERROR, "IO operation failed"),
        };

        LessonkitError::storage_with_code(code, message, None).with_source(err)
    }
}

impl From<serde_json::Error> for LessonkitError {
    fn from(err: serde_json::Error) -> Self {
        LessonkitError::invalid_input(format!("Invalid JSON input: {}", err)).with_source(err)
    }
}

impl From<toml::de::Error> for LessonkitError {
    fn from(err: toml::de::Error) -> Self {
        LessonkitError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}

impl From<ValidationError> for LessonkitError {
    fn from(err: ValidationError) -> Self {
        LessonkitError::validation(vec![err])
    }
}

impl From<Vec<ValidationError>> for LessonkitError {
    fn from(errors: Vec<ValidationError>) -> Self {
        LessonkitError::validation(errors)
    }
}
