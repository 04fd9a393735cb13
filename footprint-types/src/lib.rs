//! Core types for the footprint quiz.
//!
//! This crate provides the presentation-agnostic data model:
//! - `Catalog`, `Question` and `QuestionId` - The fixed quiz questions
//! - `AnswerSet` - One numeric answer per question
//! - `ScoreBreakdown`, `ResultCategory`, `Suggestion`, `Results` - Scoring output
//! - `QuizBackend` trait - For implementing form-collection backends

mod question_id;
pub use question_id::QuestionId;

mod question;
pub use question::{AnswerOption, Question};

mod catalog;
pub use catalog::{Catalog, CatalogError, QuestionGroup};

mod answers;
pub use answers::{AnswerError, AnswerSet};

mod breakdown;
pub use breakdown::ScoreBreakdown;

mod tier;
pub use tier::{ColorHint, ImpactLevel, ResultCategory};

mod suggestion;
pub use suggestion::{PointRange, Priority, Suggestion};

mod results;
pub use results::Results;

mod error;
pub use error::QuizError;

mod traits;
pub use traits::{AnswerValidator, QuizBackend};
