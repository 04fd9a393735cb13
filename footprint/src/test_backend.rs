//! Test backend for running the quiz without user interaction.
//!
//! `TestBackend` answers every question from a script, passing each value
//! through the same validator an interactive backend would use.
//!
//! # Example
//!
//! ```rust
//! use footprint::{QuestionId, ScoringConfig, TestBackend, run_quiz, standard_catalog};
//!
//! let backend = TestBackend::new()
//!     .with_answer(QuestionId::Energy, 1)
//!     .with_answer(QuestionId::Appliances, 1)
//!     .with_answer(QuestionId::Transport, 1)
//!     .with_answer(QuestionId::Travel, 1)
//!     .with_answer(QuestionId::Diet, 2)
//!     .with_answer(QuestionId::Habits, 1)
//!     .with_answer(QuestionId::Water, 1)
//!     .with_answer(QuestionId::Shopping, 1)
//!     .with_answer(QuestionId::Waste, 1)
//!     .with_answer(QuestionId::Digital, 1);
//!
//! let results = run_quiz(&backend, &standard_catalog(), &ScoringConfig::default()).unwrap();
//! assert_eq!(results.total_score, 11);
//! ```

use std::collections::HashMap;

use crate::{AnswerSet, AnswerValidator, Catalog, QuestionId, QuizBackend};

/// A backend that returns pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: HashMap<QuestionId, u32>,
    cancel_at: Option<QuestionId>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing answer for question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Validation failed for '{question}': {message}")]
    ValidationFailed { question: QuestionId, message: String },

    #[error("Cancelled at question: {0}")]
    Cancelled(QuestionId),
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the answer to a question.
    pub fn with_answer(mut self, id: QuestionId, value: u32) -> Self {
        self.answers.insert(id, value);
        self
    }

    /// Script every answer from an existing answer set.
    pub fn with_answers(mut self, answers: &AnswerSet) -> Self {
        self.answers.extend(answers.iter());
        self
    }

    /// Simulate the user aborting when this question comes up.
    pub fn cancel_at(mut self, id: QuestionId) -> Self {
        self.cancel_at = Some(id);
        self
    }
}

impl QuizBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(
        &self,
        catalog: &Catalog,
        validate: AnswerValidator<'_>,
    ) -> Result<AnswerSet, Self::Error> {
        let mut answers = AnswerSet::new();

        for question in catalog.questions() {
            let id = question.id();
            if self.cancel_at == Some(id) {
                return Err(TestBackendError::Cancelled(id));
            }

            let value = *self
                .answers
                .get(&id)
                .ok_or(TestBackendError::MissingAnswer(id))?;

            validate(id, value, &answers).map_err(|message| {
                TestBackendError::ValidationFailed {
                    question: id,
                    message,
                }
            })?;
            answers.insert(id, value);
        }

        Ok(answers)
    }

    fn is_cancellation(error: &Self::Error) -> bool {
        matches!(error, TestBackendError::Cancelled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerOption, Question};

    fn tiny_catalog() -> Catalog {
        Catalog::new(vec![
            Question::new(
                QuestionId::Energy,
                "Energy?",
                vec![AnswerOption::new("Low", 1), AnswerOption::new("High", 5)],
            ),
            Question::new(
                QuestionId::Diet,
                "Diet?",
                vec![AnswerOption::new("Plants", 2), AnswerOption::new("Meat", 6)],
            ),
        ])
    }

    fn accept_all(_: QuestionId, _: u32, _: &AnswerSet) -> Result<(), String> {
        Ok(())
    }

    #[test]
    fn collects_in_catalog_order() {
        let backend = TestBackend::new()
            .with_answer(QuestionId::Diet, 6)
            .with_answer(QuestionId::Energy, 1);

        let answers = backend.collect(&tiny_catalog(), &accept_all).unwrap();
        assert_eq!(answers.get(QuestionId::Energy), Some(1));
        assert_eq!(answers.get(QuestionId::Diet), Some(6));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn missing_answer() {
        let backend = TestBackend::new().with_answer(QuestionId::Energy, 1);
        let err = backend.collect(&tiny_catalog(), &accept_all).unwrap_err();
        assert!(matches!(err, TestBackendError::MissingAnswer(QuestionId::Diet)));
    }

    #[test]
    fn validator_sees_earlier_answers() {
        let backend = TestBackend::new()
            .with_answer(QuestionId::Energy, 5)
            .with_answer(QuestionId::Diet, 6);

        let validate = |id: QuestionId, value: u32, so_far: &AnswerSet| {
            if id == QuestionId::Diet && so_far.get(QuestionId::Energy) == Some(5) && value == 6 {
                Err("too much".to_string())
            } else {
                Ok(())
            }
        };

        let err = backend.collect(&tiny_catalog(), &validate).unwrap_err();
        match err {
            TestBackendError::ValidationFailed { question, message } => {
                assert_eq!(question, QuestionId::Diet);
                assert_eq!(message, "too much");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cancellation_is_reported() {
        let backend = TestBackend::new()
            .with_answer(QuestionId::Energy, 1)
            .cancel_at(QuestionId::Diet);
        let err = backend.collect(&tiny_catalog(), &accept_all).unwrap_err();
        assert!(TestBackend::is_cancellation(&err));
        assert!(!TestBackend::is_cancellation(&TestBackendError::MissingAnswer(
            QuestionId::Diet
        )));
    }
}
