//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::LessonkitConfig;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Commands, config: &LessonkitConfig) -> Result<()> {
    match command {
        Commands::Sequence { course, grouped } => run_sequence_command(&course, grouped),
        Commands::Navigate { course, lesson } => run_navigate_command(&course, lesson.as_deref()),
        Commands::Validate { file, quiz } => {
            run_validate_command(&file, quiz, config.validation.collect_all)
        }
        Commands::Grade { quiz, answers } => run_grade_command(&quiz, &answers),
        Commands::Progress { course, completed } => run_progress_command(&course, &completed),
        Commands::NewQuiz { questions } => {
            run_new_quiz_command(questions, config.grading.default_passing_grade)
        }
    }
}
