use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Per-category contributions to the total score, in catalog order.
///
/// Serialized as a flat object keyed `"{id}Score"`, e.g.
/// `{"energyScore": 5, "transportScore": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, u32>", try_from = "BTreeMap<String, u32>")]
pub struct ScoreBreakdown {
    scores: BTreeMap<QuestionId, u32>,
}

impl ScoreBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contribution of one category.
    pub fn insert(&mut self, id: QuestionId, score: u32) {
        self.scores.insert(id, score);
    }

    /// Contribution of one category, if it was scored.
    pub fn get(&self, id: QuestionId) -> Option<u32> {
        self.scores.get(&id).copied()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, u32)> + '_ {
        self.scores.iter().map(|(id, score)| (*id, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all contributions, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.scores.values().fold(0, |total, score| total.saturating_add(*score))
    }
}

impl FromIterator<(QuestionId, u32)> for ScoreBreakdown {
    fn from_iter<T: IntoIterator<Item = (QuestionId, u32)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl From<ScoreBreakdown> for BTreeMap<String, u32> {
    fn from(breakdown: ScoreBreakdown) -> Self {
        breakdown
            .scores
            .into_iter()
            .map(|(id, score)| (id.score_key(), score))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, u32>> for ScoreBreakdown {
    type Error = String;

    fn try_from(raw: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(key, score)| {
                QuestionId::from_score_key(&key)
                    .map(|id| (id, score))
                    .ok_or_else(|| format!("unknown score key: {key}"))
            })
            .collect()
    }
}
