//! Learner progress through a course
//!
//! Completed lesson ids come from the learner's progress record. Ids that are
//! not part of the course order are ignored.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub completed: usize,
    pub total: usize,
    pub remaining: usize,
    /// Share of lessons completed (0-100); 0 for a course without lessons
    pub percent: f64,
    pub is_complete: bool,
    /// First lesson in course order the learner has not completed yet
    pub next_lesson: Option<String>,
}

pub fn is_lesson_completed<S: AsRef<str>>(completed: &[S], lesson_id: &str) -> bool {
    completed.iter().any(|id| id.as_ref() == lesson_id)
}

/// Summarise progress against the canonical lesson order
pub fn course_progress<A, B>(full_order: &[A], completed: &[B]) -> CourseProgress
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let total = full_order.len();
    let done = full_order
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| is_lesson_completed(completed, id))
        .count();
    let next_lesson = full_order
        .iter()
        .map(|id| id.as_ref())
        .find(|id| !is_lesson_completed(completed, id))
        .map(str::to_string);

    let percent = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    };

    CourseProgress {
        completed: done,
        total,
        remaining: total - done,
        percent,
        is_complete: total > 0 && done == total,
        next_lesson,
    }
}
