//! CLI argument structures
//!
//! This module defines the command-line interface used by lessonkit.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sequence lessons, validate content and grade quizzes
#[derive(Parser, Debug)]
#[command(name = "lessonkit")]
#[command(about = "lessonkit - Course sequencing, lesson validation and quiz grading", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical lesson order of a course
    Sequence {
        /// Course file (JSON with `groups` and `lessons`)
        course: PathBuf,

        /// Print lessons bucketed by group instead of a flat list
        #[arg(long)]
        grouped: bool,
    },

    /// Print the previous and next lesson around a position
    Navigate {
        /// Course file (JSON with `groups` and `lessons`)
        course: PathBuf,

        /// Current lesson id; omit to get the course entry point
        #[arg(short, long, value_name = "ID")]
        lesson: Option<String>,
    },

    /// Validate a lesson draft or a quiz before saving it
    Validate {
        /// Lesson draft file (JSON with `type`, `content`, `media`)
        file: PathBuf,

        /// Treat the file as a bare quiz rather than a lesson draft
        #[arg(long)]
        quiz: bool,
    },

    /// Grade a submission against a quiz
    Grade {
        /// Quiz file
        quiz: PathBuf,

        /// Answers file: one array of selected option indices per question
        answers: PathBuf,
    },

    /// Summarise a learner's progress through a course
    Progress {
        /// Course file (JSON with `groups` and `lessons`)
        course: PathBuf,

        /// Completed lesson ids
        #[arg(long, value_name = "ID", num_args = 0..)]
        completed: Vec<String>,
    },

    /// Print a draft quiz to start authoring from
    #[command(name = "new-quiz")]
    NewQuiz {
        /// Number of placeholder questions
        #[arg(short = 'n', long, default_value = "1")]
        questions: usize,
    },
}
