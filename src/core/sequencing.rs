//! Canonical lesson order and prev/next navigation
//!
//! Groups are walked in ascending `rank`. Inside a group, an explicit
//! `lessonsOrder` wins; lessons it does not list go after the listed ones in
//! their input order. Without an explicit order, lessons sort by `groupRank`.
//! Lessons whose `groupId` matches no group are dropped.

use serde::Serialize;

use super::course::{Group, Lesson};

/// Lessons of one group, in navigation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonGroup<'a> {
    pub group_id: &'a str,
    pub name: &'a str,
    pub lesson_ids: Vec<&'a str>,
}

/// Neighbours of a lesson in the canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor<'a> {
    pub prev: Option<&'a str>,
    pub next: Option<&'a str>,
}

/// Navigation fields as embedded in API responses; empty string means none
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonNavigation {
    pub prev_lesson: String,
    pub next_lesson: String,
}

impl Cursor<'_> {
    pub fn into_navigation(self) -> LessonNavigation {
        LessonNavigation {
            prev_lesson: self.prev.unwrap_or_default().to_string(),
            next_lesson: self.next.unwrap_or_default().to_string(),
        }
    }
}

/// Bucket lessons per group, groups in rank order
pub fn group_lessons<'a>(groups: &'a [Group], lessons: &'a [Lesson]) -> Vec<LessonGroup<'a>> {
    let mut ranked: Vec<&Group> = groups.iter().collect();
    // sort_by_key is stable, equal ranks keep input order
    ranked.sort_by_key(|group| group.rank);

    ranked
        .into_iter()
        .map(|group| LessonGroup {
            group_id: &group.id,
            name: &group.name,
            lesson_ids: order_within_group(group, lessons),
        })
        .collect()
}

fn order_within_group<'a>(group: &Group, lessons: &'a [Lesson]) -> Vec<&'a str> {
    let mut members: Vec<&Lesson> = lessons
        .iter()
        .filter(|lesson| lesson.group_id == group.id)
        .collect();

    if group.has_explicit_order() {
        members.sort_by_key(|lesson| group.position_of(&lesson.lesson_id).unwrap_or(usize::MAX));
    } else {
        members.sort_by_key(|lesson| lesson.group_rank);
    }

    members
        .into_iter()
        .map(|lesson| lesson.lesson_id.as_str())
        .collect()
}

/// Flat canonical order of all lessons in the course
pub fn sequence<'a>(groups: &'a [Group], lessons: &'a [Lesson]) -> Vec<&'a str> {
    group_lessons(groups, lessons)
        .into_iter()
        .flat_map(|group| group.lesson_ids)
        .collect()
}

/// Previous and next lesson around `current`
///
/// An absent or unknown `current` is treated as sitting before the first
/// lesson.
pub fn cursor<'a, S: AsRef<str>>(full_order: &'a [S], current: Option<&str>) -> Cursor<'a> {
    let found = current.and_then(|id| full_order.iter().position(|item| item.as_ref() == id));

    match found {
        Some(index) => Cursor {
            prev: index
                .checked_sub(1)
                .and_then(|i| full_order.get(i))
                .map(|id| id.as_ref()),
            next: full_order.get(index + 1).map(|id| id.as_ref()),
        },
        None => Cursor {
            prev: None,
            next: full_order.first().map(|id| id.as_ref()),
        },
    }
}

/// Entry point of the course
pub fn first_lesson<S: AsRef<str>>(full_order: &[S]) -> Option<&str> {
    full_order.first().map(|id| id.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, group: &str, rank: i64) -> Lesson {
        Lesson::new(id, group, rank)
    }

    #[test]
    fn test_groups_sorted_by_rank() {
        let groups = vec![Group::new("g2", "Second", 2), Group::new("g1", "First", 1)];
        let lessons = vec![lesson("b", "g2", 1), lesson("a", "g1", 1)];

        assert_eq!(sequence(&groups, &lessons), vec!["a", "b"]);
    }

    #[test]
    fn test_equal_group_ranks_keep_input_order() {
        let groups = vec![
            Group::new("late", "Late", 2),
            Group::new("tie-b", "Tie B", 1),
            Group::new("tie-a", "Tie A", 1),
        ];
        let lessons = vec![
            lesson("from-a", "tie-a", 0),
            lesson("from-late", "late", 0),
            lesson("from-b", "tie-b", 0),
        ];

        assert_eq!(
            sequence(&groups, &lessons),
            vec!["from-b", "from-a", "from-late"]
        );
        let ids: Vec<&str> = group_lessons(&groups, &lessons)
            .iter()
            .map(|group| group.group_id)
            .collect();
        assert_eq!(ids, vec!["tie-b", "tie-a", "late"]);
    }

    #[test]
    fn test_group_rank_orders_lessons_without_explicit_order() {
        let groups = vec![Group::new("g1", "Only", 1)];
        let lessons = vec![
            lesson("c", "g1", 3),
            lesson("a", "g1", 1),
            lesson("b", "g1", 2),
        ];

        assert_eq!(sequence(&groups, &lessons), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_explicit_order_overrides_group_rank() {
        let groups = vec![Group::new("g1", "Only", 1).with_lessons_order(["c", "a", "b"])];
        let lessons = vec![
            lesson("a", "g1", 1),
            lesson("b", "g1", 2),
            lesson("c", "g1", 3),
        ];

        assert_eq!(sequence(&groups, &lessons), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unlisted_lessons_go_last_in_input_order() {
        let groups = vec![Group::new("g1", "Only", 1).with_lessons_order(["b"])];
        let lessons = vec![
            lesson("x", "g1", 9),
            lesson("b", "g1", 2),
            lesson("y", "g1", 1),
        ];

        assert_eq!(sequence(&groups, &lessons), vec!["b", "x", "y"]);
    }

    #[test]
    fn test_lessons_with_unknown_group_are_dropped() {
        let groups = vec![Group::new("g1", "Only", 1)];
        let lessons = vec![lesson("a", "g1", 1), lesson("orphan", "gone", 0)];

        assert_eq!(sequence(&groups, &lessons), vec!["a"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(sequence(&[], &[lesson("a", "g1", 1)]).is_empty());
        assert!(sequence(&[Group::new("g1", "Only", 1)], &[]).is_empty());
    }

    #[test]
    fn test_group_lessons_keeps_empty_groups() {
        let groups = vec![Group::new("g1", "Intro", 1), Group::new("g2", "Empty", 2)];
        let lessons = vec![lesson("a", "g1", 1)];

        let grouped = group_lessons(&groups, &lessons);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].lesson_ids, vec!["a"]);
        assert!(grouped[1].lesson_ids.is_empty());
        assert_eq!(grouped[1].name, "Empty");
    }

    #[test]
    fn test_cursor_middle_first_last() {
        let order = ["a", "b", "c"];

        let middle = cursor(&order, Some("b"));
        assert_eq!(middle.prev, Some("a"));
        assert_eq!(middle.next, Some("c"));

        let first = cursor(&order, Some("a"));
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some("b"));

        let last = cursor(&order, Some("c"));
        assert_eq!(last.prev, Some("b"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_cursor_absent_or_unknown_starts_at_first() {
        let order = ["a", "b", "c"];

        assert_eq!(
            cursor(&order, None),
            Cursor {
                prev: None,
                next: Some("a")
            }
        );
        assert_eq!(cursor(&order, Some("zzz")).next, Some("a"));
        assert_eq!(cursor::<&str>(&[], None), Cursor::default());
    }

    #[test]
    fn test_navigation_uses_empty_strings() {
        let order = vec!["only".to_string()];
        let nav = cursor(&order, Some("only")).into_navigation();

        assert_eq!(nav.prev_lesson, "");
        assert_eq!(nav.next_lesson, "");
    }

    #[test]
    fn test_first_lesson() {
        assert_eq!(first_lesson(&["x", "y"]), Some("x"));
        assert_eq!(first_lesson::<String>(&[]), None);
    }
}
