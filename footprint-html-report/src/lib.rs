//! # footprint-html-report
//!
//! Render footprint quiz [`Results`](footprint::Results) as a standalone
//! HTML page or an embeddable fragment.
//!
//! ```rust
//! use footprint::{AnswerSet, ScoringConfig, assess, standard_catalog};
//! use footprint_html_report::{HtmlOptions, to_html};
//!
//! let catalog = standard_catalog();
//! let answers: AnswerSet = catalog
//!     .questions()
//!     .iter()
//!     .map(|q| (q.id(), q.min_value()))
//!     .collect();
//! let results = assess(&catalog, &answers, &ScoringConfig::default()).unwrap();
//!
//! let html = to_html(&results, &catalog, &HtmlOptions::new().with_title("My Footprint"));
//! assert!(html.contains("My Footprint"));
//! ```

mod generator;

pub use generator::{HtmlOptions, to_html};
