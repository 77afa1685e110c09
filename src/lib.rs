//! # lessonkit
//!
//! Course sequencing, lesson validation and quiz grading for an online
//! course platform.
//!
//! ## Usage
//!
//! ```bash
//! lessonkit sequence course.json [--grouped]
//! lessonkit navigate course.json --lesson <ID>
//! lessonkit validate lesson.json [--quiz]
//! lessonkit grade quiz.json answers.json
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing, command routing and command implementations
//! - `config` - Layered configuration (files and environment)
//! - `core` - Pure sequencing, grading, validation and progress functions
//! - `error` - Unified error type, error codes and content violations
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
