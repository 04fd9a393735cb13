use crate::AnswerError;

/// Error type for running a quiz through a backend.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// User cancelled the quiz (Ctrl+C, Escape, etc.)
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// The collected answers were rejected at the boundary.
    #[error("Invalid answers: {0}")]
    Answers(#[from] AnswerError),

    /// Backend-specific failure (I/O, terminal errors, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuizError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
