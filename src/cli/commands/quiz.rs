//! Quiz commands: grade, new-quiz

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use super::print_json;
use crate::cli::input::read_json;
use crate::core::{grade, Quiz, Submission};

/// Grade an answers file against a quiz file
pub fn run_grade_command(quiz_path: &Path, answers_path: &Path) -> Result<()> {
    let quiz: Quiz = read_json(quiz_path)?;
    let submission: Submission = read_json(answers_path)?;

    if submission.answers.len() != quiz.questions.len() {
        debug!(
            "Submission has {} answers for {} questions",
            submission.answers.len(),
            quiz.questions.len()
        );
    }

    let result = grade(&quiz, &submission);
    info!(
        "Earned {} of {} points, pass: {}",
        result.earned, result.possible, result.pass
    );
    print_json(&result)
}

/// Print a draft quiz with `questions` placeholder questions
pub fn run_new_quiz_command(questions: usize, passing_grade: f64) -> Result<()> {
    let mut quiz = Quiz::draft(passing_grade);
    quiz.questions.truncate(questions);
    while quiz.questions.len() < questions {
        quiz.add_question();
    }

    debug!("Drafted quiz with {} questions", quiz.questions.len());
    print_json(&quiz)
}
