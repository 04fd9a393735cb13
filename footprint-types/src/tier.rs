use std::fmt;

use serde::{Deserialize, Serialize};

/// Impact tier of a total score. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color hint for renderers (traffic-light scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    Green,
    Yellow,
    Red,
}

impl ColorHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Band for a single category's contribution: up to 2 is green,
    /// 3 is yellow, anything above is red.
    pub fn for_category_score(score: u32) -> Self {
        match score {
            0..=2 => Self::Green,
            3 => Self::Yellow,
            _ => Self::Red,
        }
    }

    /// Band for a total expressed as a share of the maximum score:
    /// up to 30% green, up to 60% yellow, red above.
    pub fn for_share_of_max(total: u32, max: u32) -> Self {
        if max == 0 {
            return Self::Green;
        }
        let scaled = u64::from(total) * 100;
        let max = u64::from(max);
        if scaled <= max * 30 {
            Self::Green
        } else if scaled <= max * 60 {
            Self::Yellow
        } else {
            Self::Red
        }
    }
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tier a total score falls into, with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCategory {
    pub level: ImpactLevel,
    pub message: String,
    pub color_hint: ColorHint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_best_to_worst() {
        assert!(ImpactLevel::Low < ImpactLevel::Medium);
        assert!(ImpactLevel::Medium < ImpactLevel::High);
    }

    #[test]
    fn category_bands() {
        assert_eq!(ColorHint::for_category_score(1), ColorHint::Green);
        assert_eq!(ColorHint::for_category_score(2), ColorHint::Green);
        assert_eq!(ColorHint::for_category_score(3), ColorHint::Yellow);
        assert_eq!(ColorHint::for_category_score(4), ColorHint::Red);
        assert_eq!(ColorHint::for_category_score(6), ColorHint::Red);
    }

    #[test]
    fn share_bands() {
        assert_eq!(ColorHint::for_share_of_max(15, 50), ColorHint::Green);
        assert_eq!(ColorHint::for_share_of_max(16, 50), ColorHint::Yellow);
        assert_eq!(ColorHint::for_share_of_max(30, 50), ColorHint::Yellow);
        assert_eq!(ColorHint::for_share_of_max(31, 50), ColorHint::Red);
        assert_eq!(ColorHint::for_share_of_max(5, 0), ColorHint::Green);
    }

    #[test]
    fn category_serializes_camel_case() {
        let category = ResultCategory {
            level: ImpactLevel::Medium,
            message: "ok".to_string(),
            color_hint: ColorHint::Yellow,
        };
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(
            json,
            r#"{"level":"medium","message":"ok","colorHint":"yellow"}"#
        );
    }
}
