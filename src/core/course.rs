//! Course structure as seen by the sequencer
//!
//! These are read-only snapshots handed over by whatever loaded the course.
//! Field names follow the platform's JSON (`lessonId`, `groupRank`, ...).

use serde::{Deserialize, Serialize};

/// A named, ranked bucket of lessons within a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Ordering key among the groups of one course
    pub rank: i64,
    /// Explicit lesson order inside the group; overrides `groupRank` when non-empty
    #[serde(default)]
    pub lessons_order: Vec<String>,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rank: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rank,
            lessons_order: Vec::new(),
        }
    }

    /// Set the explicit lesson order for this group
    pub fn with_lessons_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lessons_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Position of a lesson in the explicit order, if listed
    pub fn position_of(&self, lesson_id: &str) -> Option<usize> {
        self.lessons_order.iter().position(|id| id == lesson_id)
    }

    pub fn has_explicit_order(&self) -> bool {
        !self.lessons_order.is_empty()
    }
}

/// Sequencing view of a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub lesson_id: String,
    pub group_id: String,
    /// Tie-break inside the group when it has no explicit order
    #[serde(default)]
    pub group_rank: i64,
}

impl Lesson {
    pub fn new(lesson_id: impl Into<String>, group_id: impl Into<String>, group_rank: i64) -> Self {
        Self {
            lesson_id: lesson_id.into(),
            group_id: group_id.into(),
            group_rank,
        }
    }
}

/// Groups and lessons of one course, as loaded by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}
