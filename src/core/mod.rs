//! Core business logic module with pure functions
//!
//! This module contains pure functions that implement business logic without any I/O operations.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return outputs
//! - Have no side effects
//! - Don't perform file system, network, or database operations
//! - Are easily testable without mocks

pub mod course;
pub mod grading;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod sequencing;
pub mod validation;

pub use course::{CourseSnapshot, Group, Lesson};
pub use grading::{grade, Grade};
pub use lesson::{LessonDraft, LessonType, MediaRef};
pub use progress::{course_progress, is_lesson_completed, CourseProgress};
pub use quiz::{Question, Quiz, QuizOption, Submission, DEFAULT_PASSING_GRADE};
pub use sequencing::{
    cursor, first_lesson, group_lessons, sequence, Cursor, LessonGroup, LessonNavigation,
};
pub use validation::{validate_lesson, validate_lesson_all, validate_quiz, validate_quiz_all};
