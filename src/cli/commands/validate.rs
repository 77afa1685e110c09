//! Validate command: lesson drafts and bare quizzes

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::input::read_json;
use crate::core::{validate_lesson, validate_lesson_all, validate_quiz, validate_quiz_all};
use crate::core::{LessonDraft, Quiz};
use crate::error::{LessonkitError, ValidationError};

/// Validate a file, failing with every violation found or only the first
pub fn run_validate_command(path: &Path, as_quiz: bool, collect_all: bool) -> Result<()> {
    let violations = if as_quiz {
        let quiz: Quiz = read_json(path)?;
        debug!("Validating quiz with {} questions", quiz.questions.len());
        check(&quiz, collect_all, validate_quiz, validate_quiz_all)
    } else {
        let draft: LessonDraft = read_json(path)?;
        debug!("Validating {} lesson", draft.lesson_type);
        check(&draft, collect_all, validate_lesson, validate_lesson_all)
    };

    if violations.is_empty() {
        info!("{} is valid", path.display());
        println!("valid");
        Ok(())
    } else {
        Err(LessonkitError::validation(violations).into())
    }
}

fn check<T>(
    item: &T,
    collect_all: bool,
    first: fn(&T) -> std::result::Result<(), ValidationError>,
    all: fn(&T) -> Vec<ValidationError>,
) -> Vec<ValidationError> {
    if collect_all {
        all(item)
    } else {
        first(item).err().into_iter().collect()
    }
}
