// SPDX-License-Identifier: MPL-2.0
//! Questions and the ordered set a quiz is played from.

use std::fmt;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Why a question (or a whole set) was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// The question text is blank.
    EmptyText,

    /// Fewer than [`MIN_OPTIONS`] options were supplied.
    TooFewOptions {
        /// Number of options that were found.
        found: usize,
    },

    /// The correct index does not point at an option.
    CorrectOutOfRange {
        /// The index that was supplied.
        correct: usize,
        /// Number of options available.
        options: usize,
    },

    /// A set must contain at least one question.
    EmptySet,
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::EmptyText => write!(f, "question text is empty"),
            QuestionError::TooFewOptions { found } => {
                write!(f, "needs at least {MIN_OPTIONS} options, found {found}")
            }
            QuestionError::CorrectOutOfRange { correct, options } => write!(
                f,
                "correct answer {correct} is out of range for {options} options"
            ),
            QuestionError::EmptySet => write!(f, "question set is empty"),
        }
    }
}

impl std::error::Error for QuestionError {}

/// A single multiple-choice question.
///
/// Built only through [`Question::new`], so every instance has at least two
/// options and a correct index that points at one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// Validates and builds a question.
    ///
    /// # Errors
    ///
    /// Returns a [`QuestionError`] if the text is blank, fewer than two options
    /// are given, or `correct` does not index into `options`.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                found: options.len(),
            });
        }
        if correct >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                correct,
                options: options.len(),
            });
        }
        Ok(Self {
            text,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Returns whether `index` is the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

/// Ordered, non-empty list of questions. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Wraps a list of questions.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::EmptySet`] if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptySet);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn valid_question_is_built() {
        let q = Question::new("2 + 2?", options(4), 1).expect("valid question");
        assert_eq!(q.text(), "2 + 2?");
        assert_eq!(q.options().len(), 4);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn single_option_is_rejected() {
        let err = Question::new("lonely", options(1), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { found: 1 });
    }

    #[test]
    fn correct_index_must_be_in_range() {
        let err = Question::new("q", options(3), 3).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOutOfRange {
                correct: 3,
                options: 3
            }
        );
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = Question::new("   ", options(2), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(QuestionSet::new(Vec::new()), Err(QuestionError::EmptySet));
    }

    #[test]
    fn set_reports_last_index() {
        let set = QuestionSet::new(vec![
            Question::new("a", options(2), 0).unwrap(),
            Question::new("b", options(2), 1).unwrap(),
            Question::new("c", options(2), 0).unwrap(),
        ])
        .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.last_index(), 2);
        assert_eq!(set.get(1).map(Question::text), Some("b"));
        assert!(set.get(3).is_none());
    }
}
