//! Pure validation functions
//!
//! These run when a lesson or quiz is created or updated, before anything is
//! persisted. They never run at grading time.
//!
//! The `validate_*` functions stop at the first violation. The `*_all`
//! variants report every violation in one pass.

use serde_json::Value;

use super::lesson::{LessonDraft, LessonType};
use super::quiz::{Question, Quiz};
use crate::error::ValidationError;

/// Check a quiz, stopping at the first violation
///
/// A question without a correct option is reported before any empty option
/// text, wherever each occurs in the quiz.
pub fn validate_quiz(quiz: &Quiz) -> Result<(), ValidationError> {
    if let Some(question) = quiz.questions.iter().position(|q| !q.has_correct_answer()) {
        return Err(ValidationError::NoCorrectAnswer { question });
    }

    for (question_index, question) in quiz.questions.iter().enumerate() {
        if let Some(err) = empty_option_errors(question_index, question).next() {
            return Err(err);
        }
    }

    Ok(())
}

/// Every violation in the quiz, question by question
pub fn validate_quiz_all(quiz: &Quiz) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (question_index, question) in quiz.questions.iter().enumerate() {
        if !question.has_correct_answer() {
            errors.push(ValidationError::NoCorrectAnswer {
                question: question_index,
            });
        }
        errors.extend(empty_option_errors(question_index, question));
    }

    errors
}

fn empty_option_errors(
    question_index: usize,
    question: &Question,
) -> impl Iterator<Item = ValidationError> + '_ {
    question
        .options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.text.trim().is_empty())
        .map(move |(option, _)| ValidationError::EmptyOptionText {
            question: question_index,
            option,
        })
}

/// Check a lesson draft, stopping at the first violation
///
/// Content checks run before the media check.
pub fn validate_lesson(draft: &LessonDraft) -> Result<(), ValidationError> {
    if let Some(quiz) = check_content(draft)? {
        validate_quiz(&quiz)?;
    }
    check_media(draft)
}

/// Every violation in the lesson draft
pub fn validate_lesson_all(draft: &LessonDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match check_content(draft) {
        Ok(Some(quiz)) => errors.extend(validate_quiz_all(&quiz)),
        Ok(None) => {}
        Err(err) => errors.push(err),
    }
    if let Err(err) = check_media(draft) {
        errors.push(err);
    }

    errors
}

/// Validates the shape of `content`; hands back the quiz for quiz lessons
fn check_content(draft: &LessonDraft) -> Result<Option<Quiz>, ValidationError> {
    let content = draft.content.as_ref().filter(|value| !value.is_null());
    let missing = ValidationError::ContentRequired {
        lesson_type: draft.lesson_type,
    };

    match draft.lesson_type {
        LessonType::Text => match content {
            Some(Value::Object(_)) | Some(Value::Array(_)) => Ok(None),
            _ => Err(missing),
        },
        LessonType::Embed => {
            let has_value = content
                .and_then(|value| value.get("value"))
                .and_then(Value::as_str)
                .is_some_and(|url| !url.trim().is_empty());
            if has_value {
                Ok(None)
            } else {
                Err(missing)
            }
        }
        // Quiz lessons may be saved before any question is written
        LessonType::Quiz => match content
            .filter(|value| value.get("questions").is_some_and(|questions| !questions.is_null()))
        {
            Some(value) => serde_json::from_value::<Quiz>(value.clone())
                .map(Some)
                .map_err(|_| missing),
            None => Ok(None),
        },
        LessonType::Video | LessonType::Audio | LessonType::Pdf | LessonType::File => Ok(None),
    }
}

fn check_media(draft: &LessonDraft) -> Result<(), ValidationError> {
    if draft.lesson_type.requires_media() && draft.media_id().is_none() {
        return Err(ValidationError::MediaIdRequired {
            lesson_type: draft.lesson_type,
        });
    }
    Ok(())
}
