use crate::{AnswerSet, Catalog, QuestionId};

/// Per-answer validator handed to backends.
///
/// Receives the question being answered, the chosen value, and all answers
/// collected so far. Returns an error message to show before re-asking.
pub type AnswerValidator<'a> = &'a dyn Fn(QuestionId, u32, &AnswerSet) -> Result<(), String>;

/// Trait for form-collection backends.
///
/// Backends receive a `Catalog` and return an `AnswerSet`. They decide how
/// to present the quiz (step-by-step prompts, scripted answers, ...) and
/// handle validation internally in retry loops.
pub trait QuizBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect one answer per catalog question.
    ///
    /// # Arguments
    /// * `catalog` - The questions to ask
    /// * `validate` - Checks each value before it is recorded
    ///
    /// # Returns
    /// * `Ok(answers)` on success
    /// * `Err` on cancellation or backend failure
    fn collect(
        &self,
        catalog: &Catalog,
        validate: AnswerValidator<'_>,
    ) -> Result<AnswerSet, Self::Error>;

    /// Check if an error from this backend means the user cancelled.
    fn is_cancellation(_error: &Self::Error) -> bool {
        false
    }
}
