//! Loading command inputs from JSON files

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::CourseSnapshot;
use crate::error::{common, LessonkitError, Result};

/// Read and deserialize a JSON input file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| common::input_read_error(path.to_path_buf()).with_source(e))?;

    let value = serde_json::from_str(&content).map_err(|e| {
        LessonkitError::invalid_input(format!("{} is not a valid input: {}", path.display(), e))
            .with_source(e)
    })?;

    debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(value)
}

/// Read a course file
pub fn read_course(path: &Path) -> Result<CourseSnapshot> {
    let course: CourseSnapshot = read_json(path)?;
    debug!(
        "Course has {} groups and {} lessons",
        course.groups.len(),
        course.lessons.len()
    );
    Ok(course)
}
