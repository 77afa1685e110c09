//! Authoring-time validation failures
//!
//! Each kind maps to its own code and user-facing message so a caller can
//! block the save and tell the author exactly what to fix.

use serde::Serialize;
use thiserror::Error;

use super::ErrorCode;
use crate::core::lesson::LessonType;

/// The fixed taxonomy of validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    ContentRequired,
    MediaIdRequired,
    NoCorrectAnswer,
    EmptyOptionText,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{lesson_type} lesson content is missing or malformed")]
    ContentRequired { lesson_type: LessonType },

    #[error("{lesson_type} lesson has no media reference")]
    MediaIdRequired { lesson_type: LessonType },

    #[error("question {question} has no option marked as correct")]
    NoCorrectAnswer { question: usize },

    #[error("question {question} option {option} has empty text")]
    EmptyOptionText { question: usize, option: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::ContentRequired { .. } => ValidationErrorKind::ContentRequired,
            Self::MediaIdRequired { .. } => ValidationErrorKind::MediaIdRequired,
            Self::NoCorrectAnswer { .. } => ValidationErrorKind::NoCorrectAnswer,
            Self::EmptyOptionText { .. } => ValidationErrorKind::EmptyOptionText,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self.kind() {
            ValidationErrorKind::ContentRequired => ErrorCode::VALIDATION_CONTENT_REQUIRED,
            ValidationErrorKind::MediaIdRequired => ErrorCode::VALIDATION_MEDIA_ID_REQUIRED,
            ValidationErrorKind::NoCorrectAnswer => ErrorCode::VALIDATION_NO_CORRECT_ANSWER,
            ValidationErrorKind::EmptyOptionText => ErrorCode::VALIDATION_EMPTY_OPTION_TEXT,
        }
    }

    /// Message shown to the author when the save is rejected
    pub fn user_message(&self) -> String {
        match self {
            Self::ContentRequired { .. } => "Content cannot be empty".to_string(),
            Self::MediaIdRequired { .. } => "Media cannot be empty".to_string(),
            Self::NoCorrectAnswer { question } => format!(
                "Question {} needs at least one correct answer",
                question + 1
            ),
            Self::EmptyOptionText { question, option } => format!(
                "Option {} of question {} cannot be empty",
                option + 1,
                question + 1
            ),
        }
    }
}
