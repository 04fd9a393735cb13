//! Impact tier classification.

use crate::{ColorHint, ImpactLevel, ResultCategory, TierThresholds};

const LOW_MESSAGE: &str = "Excellent! Your daily footprint is low.";
const MEDIUM_MESSAGE: &str = "Good effort! There's some room for improvement.";
const HIGH_MESSAGE: &str = "Your daily footprint is high. Let's find ways to reduce it!";

/// Classify a total score. Scores equal to a cut point belong to the lower
/// tier. Any `u32` is accepted, including totals above the catalog maximum.
pub fn result_category(total_score: u32, tiers: &TierThresholds) -> ResultCategory {
    let (level, message, color_hint) = if total_score <= tiers.low_max {
        (ImpactLevel::Low, LOW_MESSAGE, ColorHint::Green)
    } else if total_score <= tiers.medium_max {
        (ImpactLevel::Medium, MEDIUM_MESSAGE, ColorHint::Yellow)
    } else {
        (ImpactLevel::High, HIGH_MESSAGE, ColorHint::Red)
    };

    ResultCategory {
        level,
        message: message.to_string(),
        color_hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(score: u32) -> ImpactLevel {
        result_category(score, &TierThresholds::default()).level
    }

    #[test]
    fn boundaries_are_inclusive_low() {
        let tiers = TierThresholds::default();
        assert_eq!(level(tiers.low_max), ImpactLevel::Low);
        assert_eq!(level(tiers.low_max + 1), ImpactLevel::Medium);
        assert_eq!(level(tiers.medium_max), ImpactLevel::Medium);
        assert_eq!(level(tiers.medium_max + 1), ImpactLevel::High);
    }

    #[test]
    fn extremes() {
        assert_eq!(level(0), ImpactLevel::Low);
        assert_eq!(level(u32::MAX), ImpactLevel::High);
    }

    #[test]
    fn monotonic() {
        for score in 0..100 {
            assert!(level(score) <= level(score + 1), "tier dropped at {score}");
        }
    }

    #[test]
    fn custom_thresholds() {
        let tiers = TierThresholds {
            low_max: 15,
            medium_max: 30,
        };
        assert_eq!(result_category(16, &tiers).level, ImpactLevel::Medium);
        assert_eq!(result_category(31, &tiers).level, ImpactLevel::High);
    }

    #[test]
    fn messages_and_colors() {
        let tiers = TierThresholds::default();
        let high = result_category(50, &tiers);
        assert_eq!(high.color_hint, ColorHint::Red);
        assert_eq!(high.message, HIGH_MESSAGE);

        let low = result_category(11, &tiers);
        assert_eq!(low.color_hint, ColorHint::Green);
        assert_eq!(low.message, LOW_MESSAGE);
    }
}
