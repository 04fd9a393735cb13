use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnswerError;

/// Identifies one quiz question, and with it one footprint category.
///
/// The set is closed: every catalog contains exactly these ten questions.
/// Declaration order is catalog order, which is also the order used for
/// score breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Energy,
    Appliances,
    Transport,
    Travel,
    Diet,
    Habits,
    Water,
    Shopping,
    Waste,
    Digital,
}

impl QuestionId {
    /// All question ids in catalog order.
    pub const ALL: [QuestionId; 10] = [
        Self::Energy,
        Self::Appliances,
        Self::Transport,
        Self::Travel,
        Self::Diet,
        Self::Habits,
        Self::Water,
        Self::Shopping,
        Self::Waste,
        Self::Digital,
    ];

    /// The wire id, e.g. `"energy"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Appliances => "appliances",
            Self::Transport => "transport",
            Self::Travel => "travel",
            Self::Diet => "diet",
            Self::Habits => "habits",
            Self::Water => "water",
            Self::Shopping => "shopping",
            Self::Waste => "waste",
            Self::Digital => "digital",
        }
    }

    /// Human-readable category label used in breakdowns.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Appliances => "Appliances",
            Self::Transport => "Transportation",
            Self::Travel => "Air Travel",
            Self::Diet => "Diet",
            Self::Habits => "Recycling",
            Self::Water => "Water Usage",
            Self::Shopping => "Shopping",
            Self::Waste => "Waste",
            Self::Digital => "Digital",
        }
    }

    /// Key of this question's entry in a serialized score breakdown,
    /// e.g. `"energyScore"`.
    pub fn score_key(&self) -> String {
        format!("{}Score", self.as_str())
    }

    /// Inverse of [`QuestionId::score_key`].
    pub fn from_score_key(key: &str) -> Option<Self> {
        key.strip_suffix("Score")
            .and_then(|id| id.parse::<QuestionId>().ok())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AnswerError::UnknownQuestion(s.to_string()))
    }
}
