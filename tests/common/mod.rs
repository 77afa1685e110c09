//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context builder for setting up course and quiz fixtures
pub struct TestContextBuilder {
    temp_dir: TempDir,
    initial_files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    /// Create a new test context builder
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            initial_files: Vec::new(),
        })
    }

    /// Add an initial file
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.initial_files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Add a JSON file
    pub fn with_json(self, path: impl AsRef<Path>, value: &Value) -> Self {
        let content = value.to_string();
        self.with_file(path, &content)
    }

    /// Add the sample course as `course.json`
    pub fn with_sample_course(self) -> Self {
        self.with_json("course.json", &sample_course())
    }

    /// Add a project configuration file
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("lessonkit.toml", content)
    }

    /// Build the test context
    pub fn build(self) -> Result<TestContext> {
        let path = self.temp_dir.path();

        for (file_path, content) in self.initial_files {
            let full_path = path.join(file_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

/// Test context that manages temporary directories and cleanup
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    /// Get the path to the test directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file in the test directory
    pub fn create_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.temp_dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(full_path)
    }
}

/// Two groups; the first has an explicit order, the second relies on `groupRank`.
///
/// Canonical order: L2, L1, L3, L5, L4
pub fn sample_course() -> Value {
    json!({
        "groups": [
            { "id": "g2", "name": "Advanced", "rank": 2 },
            { "id": "g1", "name": "Basics", "rank": 1, "lessonsOrder": ["L2", "L1", "L3"] }
        ],
        "lessons": [
            { "lessonId": "L1", "groupId": "g1", "groupRank": 1 },
            { "lessonId": "L4", "groupId": "g2", "groupRank": 9 },
            { "lessonId": "L3", "groupId": "g1", "groupRank": 0 },
            { "lessonId": "L5", "groupId": "g2", "groupRank": 3 },
            { "lessonId": "L2", "groupId": "g1", "groupRank": 5 },
            { "lessonId": "stray", "groupId": "missing", "groupRank": 0 }
        ]
    })
}

/// Two questions: the first has correct option 0, the second correct options 0 and 2
pub fn sample_quiz(requires_passing_grade: bool, passing_grade: f64) -> Value {
    json!({
        "questions": [
            {
                "text": "2 + 2?",
                "options": [
                    { "text": "4", "correctAnswer": true },
                    { "text": "5", "correctAnswer": false }
                ]
            },
            {
                "text": "Primes?",
                "options": [
                    { "text": "2", "correctAnswer": true },
                    { "text": "4", "correctAnswer": false },
                    { "text": "7", "correctAnswer": true }
                ]
            }
        ],
        "requiresPassingGrade": requires_passing_grade,
        "passingGrade": passing_grade
    })
}
