//! # footprint
//!
//! Score a short lifestyle quiz into a daily carbon-footprint estimate.
//! Backend-agnostic.
//!
//! The engine takes an [`AnswerSet`] (one numeric value per question) and
//! produces [`Results`]: the total score, a per-category breakdown, an
//! impact tier and a ranked list of reduction suggestions.
//!
//! ## Usage
//!
//! ```rust
//! use footprint::{AnswerSet, ImpactLevel, QuestionId, ScoringConfig, assess, standard_catalog};
//!
//! let catalog = standard_catalog();
//! let answers: AnswerSet = catalog
//!     .questions()
//!     .iter()
//!     .map(|q| (q.id(), q.min_value()))
//!     .collect::<AnswerSet>()
//!     .with(QuestionId::Transport, 5)
//!     .with(QuestionId::Diet, 6)
//!     .with(QuestionId::Energy, 5);
//!
//! let results = assess(&catalog, &answers, &ScoringConfig::default()).unwrap();
//! assert_eq!(results.total_score, 23);
//! assert_eq!(results.result_category.level, ImpactLevel::Medium);
//! ```
//!
//! ## Backends
//!
//! Answers can also be collected through a [`QuizBackend`] with
//! [`run_quiz`]:
//! - `footprint-dialoguer-wizard` - CLI prompts via dialoguer
//! - [`TestBackend`] - scripted answers for tests
//!
//! ## Persistence
//!
//! The last results can be kept in a [`SnapshotStore`] so a results view
//! survives a restart. See [`MemoryStore`] and [`FileStore`].

// Re-export all types from footprint-types
pub use footprint_types::*;

mod assessment;
mod catalog;
pub mod config;
mod scoring;
mod snapshot;
mod suggestions;
mod tier;

pub use assessment::{assess, run_quiz};
pub use catalog::standard_catalog;
pub use config::{
    CompletenessPolicy, ConfigError, ScoringConfig, SuggestionThresholds, TierThresholds,
};
pub use scoring::{Footprint, calculate_footprint};
pub use snapshot::{
    FileStore, MemoryStore, SNAPSHOT_KEY, SnapshotError, SnapshotStore, default_dir,
};
pub use suggestions::{estimate_score_reduction, generate_suggestions};
pub use tier::result_category;

// Test backend for running the quiz without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
