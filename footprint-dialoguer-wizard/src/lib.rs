//! # footprint-dialoguer-wizard
//!
//! Dialoguer wizard backend for the footprint quiz.
//!
//! This crate provides a command-line wizard interface for answering the quiz
//! using the `dialoguer` library. Questions are presented one at a time as
//! select lists, grouped by section, with a way back to the previous question.
//!
//! ## Example
//!
//! ```rust,no_run
//! use footprint::{ScoringConfig, run_quiz, standard_catalog};
//! use footprint_dialoguer_wizard::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = DialoguerBackend::new();
//!     let results = run_quiz(&backend, &standard_catalog(), &ScoringConfig::default())?;
//!     println!("Your score: {}", results.total_score);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
