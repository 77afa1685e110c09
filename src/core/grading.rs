//! Quiz scoring
//!
//! Every option flagged correct is worth one point. A learner earns the point
//! when the option's index appears in their answer for that question. Wrong
//! selections cost nothing. Indices that point past the options of a question,
//! and answers past the last question, are ignored.

use serde::{Deserialize, Serialize};

use super::quiz::{Quiz, Submission};

/// Result of grading one submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub pass: bool,
    /// Percentage of correct options the learner selected (0-100)
    pub score: f64,
    pub earned: usize,
    pub possible: usize,
}

impl Grade {
    fn from_counts(quiz: &Quiz, earned: usize, possible: usize) -> Self {
        // A quiz without any correct option has nothing to earn: score 0,
        // and it passes only when no passing grade is demanded.
        let score = if possible == 0 {
            0.0
        } else {
            earned as f64 * 100.0 / possible as f64
        };

        let pass = if !quiz.requires_passing_grade {
            true
        } else if possible == 0 {
            false
        } else {
            score >= quiz.passing_grade
        };

        Self {
            pass,
            score,
            earned,
            possible,
        }
    }
}

/// Grade a learner's submission against the quiz
pub fn grade(quiz: &Quiz, submission: &Submission) -> Grade {
    let (earned, possible) = quiz.questions.iter().enumerate().fold(
        (0, 0),
        |(earned, possible), (index, question)| {
            let selected = submission.selected(index);
            let correct: Vec<usize> = question.correct_indices().collect();
            let hits = correct
                .iter()
                .filter(|&&option| selected.contains(&option))
                .count();
            (earned + hits, possible + correct.len())
        },
    );

    Grade::from_counts(quiz, earned, possible)
}
