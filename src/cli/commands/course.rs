//! Course navigation commands: sequence, navigate, progress

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

use super::print_json;
use crate::cli::input::read_course;
use crate::core::{course_progress, cursor, group_lessons, sequence, Group, Lesson};

/// Print the canonical order, flat or grouped
pub fn run_sequence_command(course_path: &Path, grouped: bool) -> Result<()> {
    let course = read_course(course_path)?;
    warn_orphans(&course.groups, &course.lessons);

    if grouped {
        let groups = group_lessons(&course.groups, &course.lessons);
        info!("Sequenced {} groups", groups.len());
        print_json(&groups)
    } else {
        let order = sequence(&course.groups, &course.lessons);
        info!("Sequenced {} lessons", order.len());
        print_json(&order)
    }
}

/// Print `{ prevLesson, nextLesson }` around a lesson
pub fn run_navigate_command(course_path: &Path, lesson: Option<&str>) -> Result<()> {
    let course = read_course(course_path)?;
    let order = sequence(&course.groups, &course.lessons);

    if let Some(id) = lesson {
        if !order.contains(&id) {
            warn!("Lesson '{}' is not part of the course order", id);
        }
    }

    let position = cursor(&order, lesson);
    debug!("Cursor for {:?}: {:?}", lesson, position);
    print_json(&position.into_navigation())
}

/// Print progress of a learner given their completed lessons
pub fn run_progress_command(course_path: &Path, completed: &[String]) -> Result<()> {
    let course = read_course(course_path)?;
    let order = sequence(&course.groups, &course.lessons);

    let progress = course_progress(&order, completed);
    info!(
        "{} of {} lessons completed",
        progress.completed, progress.total
    );
    print_json(&progress)
}

fn warn_orphans(groups: &[Group], lessons: &[Lesson]) {
    for lesson in lessons
        .iter()
        .filter(|lesson| !groups.iter().any(|group| group.id == lesson.group_id))
    {
        warn!(
            "Lesson '{}' references unknown group '{}' and is skipped",
            lesson.lesson_id, lesson.group_id
        );
    }
}
