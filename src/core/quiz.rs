//! Quiz content model and authoring helpers

use serde::{Deserialize, Serialize};

/// Passing grade offered to authors when they create a quiz
pub const DEFAULT_PASSING_GRADE: f64 = 70.0;

/// Title prefix for questions added by the authoring helpers
pub const QUESTION_PLACEHOLDER: &str = "Question";

fn default_passing_grade() -> f64 {
    DEFAULT_PASSING_GRADE
}

/// One answer option of a question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub correct_answer: bool,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            text: text.into(),
            correct_answer,
        }
    }

    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn wrong(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    fn placeholder(number: usize) -> Self {
        Self::new(
            format!("{QUESTION_PLACEHOLDER} #{number}"),
            vec![QuizOption::default()],
        )
    }

    /// Indices of the options flagged as correct
    pub fn correct_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.correct_answer)
            .map(|(index, _)| index)
    }

    pub fn has_correct_answer(&self) -> bool {
        self.options.iter().any(|option| option.correct_answer)
    }

    /// Append an empty, incorrect option
    pub fn add_option(&mut self) {
        self.options.push(QuizOption::default());
    }

    /// Remove the option at `index`, returning it if it existed
    pub fn remove_option(&mut self, index: usize) -> Option<QuizOption> {
        (index < self.options.len()).then(|| self.options.remove(index))
    }

    /// Returns false when `index` is out of range
    pub fn set_option_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                option.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Returns false when `index` is out of range
    pub fn set_correct_answer(&mut self, index: usize, correct: bool) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                option.correct_answer = correct;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub requires_passing_grade: bool,
    /// Percentage (0-100) a learner must reach when `requires_passing_grade` is set
    #[serde(default = "default_passing_grade")]
    pub passing_grade: f64,
}

impl Default for Quiz {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            requires_passing_grade: false,
            passing_grade: DEFAULT_PASSING_GRADE,
        }
    }
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Default::default()
        }
    }

    /// Require learners to reach `passing_grade` percent
    pub fn with_passing_grade(mut self, passing_grade: f64) -> Self {
        self.requires_passing_grade = true;
        self.passing_grade = passing_grade;
        self
    }

    /// Starting point for a new quiz: one placeholder question with one blank option
    pub fn draft(passing_grade: f64) -> Self {
        Self {
            questions: vec![Question::placeholder(1)],
            requires_passing_grade: false,
            passing_grade,
        }
    }

    /// Append a placeholder question numbered after the existing ones
    pub fn add_question(&mut self) -> &mut Question {
        let number = self.questions.len() + 1;
        self.questions.push(Question::placeholder(number));
        let last = self.questions.len() - 1;
        &mut self.questions[last]
    }

    /// Number of options flagged correct across all questions
    pub fn correct_option_count(&self) -> usize {
        self.questions
            .iter()
            .map(|question| question.correct_indices().count())
            .sum()
    }
}

/// Selected option indices per question, positionally aligned with `Quiz::questions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    pub answers: Vec<Vec<usize>>,
}

impl Submission {
    pub fn new(answers: Vec<Vec<usize>>) -> Self {
        Self { answers }
    }

    /// Options picked for question `index`; empty when the learner skipped it
    pub fn selected(&self, index: usize) -> &[usize] {
        self.answers.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<Vec<Vec<usize>>> for Submission {
    fn from(answers: Vec<Vec<usize>>) -> Self {
        Self::new(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_deserializes_with_defaults() {
        let quiz: Quiz = serde_json::from_str(
            r#"{"questions":[{"text":"2+2?","options":[{"text":"4","correctAnswer":true},{"text":"5"}]}]}"#,
        )
        .unwrap();

        assert!(!quiz.requires_passing_grade);
        assert_eq!(quiz.passing_grade, DEFAULT_PASSING_GRADE);
        assert!(!quiz.questions[0].options[1].correct_answer);
        assert_eq!(quiz.correct_option_count(), 1);
    }

    #[test]
    fn test_submission_is_a_plain_nested_array() {
        let submission: Submission = serde_json::from_str("[[0],[],[1,2]]").unwrap();

        assert_eq!(submission.selected(0), &[0]);
        assert!(submission.selected(1).is_empty());
        assert!(submission.selected(7).is_empty());
        assert_eq!(serde_json::to_string(&submission).unwrap(), "[[0],[],[1,2]]");
    }

    #[test]
    fn test_draft_and_add_question() {
        let mut quiz = Quiz::draft(55.0);
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].text, "Question #1");
        assert_eq!(quiz.questions[0].options, vec![QuizOption::default()]);
        assert_eq!(quiz.passing_grade, 55.0);
        assert!(!quiz.requires_passing_grade);

        let added = quiz.add_question();
        added.add_option();
        assert_eq!(added.text, "Question #2");
        assert_eq!(added.options.len(), 2);
    }

    #[test]
    fn test_option_editing() {
        let mut question = Question::new("Pick", vec![QuizOption::wrong("a")]);
        question.add_option();

        assert!(question.set_option_text(1, "b"));
        assert!(question.set_correct_answer(1, true));
        assert!(!question.set_correct_answer(5, true));
        assert!(!question.set_option_text(5, "nope"));
        assert_eq!(question.correct_indices().collect::<Vec<_>>(), vec![1]);

        assert_eq!(question.remove_option(0), Some(QuizOption::wrong("a")));
        assert_eq!(question.remove_option(3), None);
        assert!(question.has_correct_answer());
    }
}
