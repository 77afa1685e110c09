//! Command implementation modules
//!
//! Each command reads its inputs, hands them to the pure core and prints the
//! result as JSON on stdout.

pub mod course;
pub mod quiz;
pub mod validate;

// Re-export command execution functions
pub use course::{run_navigate_command, run_progress_command, run_sequence_command};
pub use quiz::{run_grade_command, run_new_quiz_command};
pub use validate::run_validate_command;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
