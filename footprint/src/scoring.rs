//! Score aggregation.

use tracing::{debug, warn};

use crate::{AnswerSet, Catalog, ScoreBreakdown};

/// Total score and its per-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    pub total_score: u32,
    pub scores: ScoreBreakdown,
}

/// Score an answer set against a catalog.
///
/// The catalog's option table is the weight table: each answer contributes
/// the value of the option it matches exactly. Answers that match no option,
/// and questions without an answer, contribute 0. Every catalog question
/// gets a breakdown entry, so the breakdown always sums to the total.
pub fn calculate_footprint(catalog: &Catalog, answers: &AnswerSet) -> Footprint {
    let mut scores = ScoreBreakdown::new();

    for question in catalog.questions() {
        let id = question.id();
        let contribution = match answers.get(id) {
            Some(value) => match question.option_for(value) {
                Some(option) => option.value,
                None => {
                    warn!("Answer {value} is not an option of '{id}', scoring it as 0");
                    0
                }
            },
            None => {
                debug!("No answer for '{id}', scoring it as 0");
                0
            }
        };
        scores.insert(id, contribution);
    }

    let total_score = scores.total();
    debug!("Footprint total {total_score} over {} questions", scores.len());

    Footprint {
        total_score,
        scores,
    }
}
