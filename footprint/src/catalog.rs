//! The built-in question catalog.

use crate::{AnswerOption, Catalog, Question, QuestionId};

const PRELUDE: &str = "Discover your environmental impact and learn how to make a positive \
                       difference for our planet. Please answer all questions.";

const EPILOGUE: &str = "Thanks! Calculating your footprint...";

fn options(pairs: &[(&str, u32)]) -> Vec<AnswerOption> {
    pairs
        .iter()
        .map(|(label, value)| AnswerOption::new(*label, *value))
        .collect()
}

/// The ten-question carbon footprint catalog.
///
/// Option values double as points. Lower is better for every question.
pub fn standard_catalog() -> Catalog {
    Catalog::new(vec![
        Question::new(
            QuestionId::Energy,
            "How do you power your home?",
            options(&[
                ("Mostly renewable (solar, wind)", 1),
                ("Mixed (renewable + fossil fuels)", 3),
                ("Mostly fossil fuels", 5),
            ]),
        ),
        Question::new(
            QuestionId::Appliances,
            "Do you turn off appliances when not in use?",
            options(&[
                ("Always (energy conscious)", 1),
                ("Sometimes", 3),
                ("Rarely", 5),
            ]),
        ),
        Question::new(
            QuestionId::Transport,
            "How do you usually commute?",
            options(&[
                ("Walking / Cycling", 1),
                ("Public transport", 2),
                ("Personal car (electric)", 3),
                ("Personal car (fuel)", 5),
            ]),
        ),
        Question::new(
            QuestionId::Travel,
            "How often do you take flights in a year?",
            options(&[
                ("None", 1),
                ("1-2 short trips", 3),
                ("Frequent flying (3+ trips)", 5),
            ]),
        ),
        Question::new(
            QuestionId::Diet,
            "How would you describe your diet?",
            options(&[
                ("Vegan / Vegetarian", 2),
                ("Mixed (some meat)", 3),
                ("Meat-heavy", 6),
            ]),
        ),
        Question::new(
            QuestionId::Habits,
            "How often do you recycle or reuse products?",
            options(&[("Always", 1), ("Sometimes", 3), ("Rarely", 5)]),
        ),
        Question::new(
            QuestionId::Water,
            "How do you manage your daily water usage?",
            options(&[
                ("Conserve (short showers, efficient appliances)", 1),
                ("Average (some conservation)", 3),
                ("High (long showers, little conservation)", 5),
            ]),
        ),
        Question::new(
            QuestionId::Shopping,
            "How often do you buy new clothes or gadgets?",
            options(&[
                ("Rarely (buy second-hand / sustainable)", 1),
                ("Occasionally (a few times a year)", 3),
                ("Frequently (fast fashion / upgrades)", 5),
            ]),
        ),
        Question::new(
            QuestionId::Waste,
            "How much household waste do you generate?",
            options(&[
                ("Minimal (compost, recycle, low trash)", 1),
                ("Average (some recycling, moderate trash)", 3),
                ("High (lots of disposable waste)", 5),
            ]),
        ),
        Question::new(
            QuestionId::Digital,
            "How much time do you spend on digital devices daily?",
            options(&[
                ("Low (<3 hours)", 1),
                ("Moderate (3-6 hours)", 3),
                ("High (>6 hours)", 5),
            ]),
        ),
    ])
    .with_prelude(PRELUDE)
    .with_epilogue(EPILOGUE)
    .with_group(
        "Energy & Home",
        vec![QuestionId::Energy, QuestionId::Appliances],
    )
    .with_group(
        "Transport & Travel",
        vec![QuestionId::Transport, QuestionId::Travel],
    )
    .with_group(
        "Food & Habits",
        vec![QuestionId::Diet, QuestionId::Habits, QuestionId::Water],
    )
    .with_group(
        "Shopping & Waste",
        vec![QuestionId::Shopping, QuestionId::Waste, QuestionId::Digital],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_valid() {
        assert_eq!(standard_catalog().validate(), Ok(()));
    }

    #[test]
    fn questions_follow_id_order() {
        let catalog = standard_catalog();
        let ids: Vec<_> = catalog.questions().iter().map(|q| q.id()).collect();
        assert_eq!(ids, QuestionId::ALL.to_vec());
    }

    #[test]
    fn score_range() {
        let catalog = standard_catalog();
        let expected_max: u32 = catalog.questions().iter().map(|q| q.max_value()).sum();
        assert_eq!(catalog.max_score(), expected_max);
        assert_eq!(catalog.min_score(), 11);
    }

    #[test]
    fn every_question_is_grouped_once() {
        let catalog = standard_catalog();
        let sections = catalog.sections();
        assert_eq!(sections.len(), 4);
        assert!(sections.iter().all(|(title, _)| title.is_some()));
        let asked: usize = sections.iter().map(|(_, qs)| qs.len()).sum();
        assert_eq!(asked, catalog.len());
    }
}
