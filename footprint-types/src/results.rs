use serde::{Deserialize, Serialize};

use crate::{ResultCategory, ScoreBreakdown, Suggestion};

/// Everything a results view needs, produced once per submission.
///
/// Serialized with the keys `totalScore`, `scores`, `resultCategory` and
/// `suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub total_score: u32,
    pub scores: ScoreBreakdown,
    pub result_category: ResultCategory,
    pub suggestions: Vec<Suggestion>,
}

impl Results {
    /// One-line summary for sharing, e.g. `"I got a score of 23/51!"`.
    pub fn share_text(&self, max_score: u32) -> String {
        format!("I got a score of {}/{max_score}!", self.total_score)
    }
}
