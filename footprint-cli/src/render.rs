//! Plain-text rendering of results and the question catalog.

use console::{Style, style};
use footprint::{Catalog, ColorHint, Priority, Results, Suggestion, estimate_score_reduction};

fn band_style(hint: ColorHint) -> Style {
    match hint {
        ColorHint::Green => Style::new().green(),
        ColorHint::Yellow => Style::new().yellow(),
        ColorHint::Red => Style::new().red(),
    }
}

fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::new().red().bold(),
        Priority::Medium => Style::new().yellow(),
        Priority::Low => Style::new().green(),
    }
}

/// Full results view: score, tier, breakdown, suggestions and share line.
pub fn results(results: &Results, catalog: &Catalog, reduction_cap: f64, colored: bool) -> String {
    let mut out = String::new();
    let max = catalog.max_score();
    let category = &results.result_category;
    let gauge = ColorHint::for_share_of_max(results.total_score, max);

    out.push_str(&format!(
        "Your score: {} / {max}\n",
        band_style(gauge)
            .force_styling(colored)
            .bold()
            .apply_to(results.total_score)
    ));
    out.push_str(&format!(
        "Impact: {}\n",
        band_style(category.color_hint)
            .force_styling(colored)
            .apply_to(category.level)
    ));
    out.push_str(&format!("{}\n", category.message));

    out.push_str("\nBreakdown:\n");
    for question in catalog.questions() {
        let id = question.id();
        let score = results.scores.get(id).unwrap_or(0);
        let band = ColorHint::for_category_score(score);
        out.push_str(&format!(
            "  {:<16}{:>3}  {}\n",
            id.label(),
            score,
            band_style(band).force_styling(colored).apply_to(band)
        ));
    }

    out.push_str("\nSuggestions:\n");
    out.push_str(&suggestions(&results.suggestions, colored));

    let estimate = estimate_score_reduction(&results.suggestions, reduction_cap);
    if estimate > 0.0 {
        out.push_str(&format!(
            "\nFollowing these suggestions could lower your score by about {estimate:.1} points.\n"
        ));
    }

    out.push_str(&format!("\n{}\n", results.share_text(max)));
    out
}

/// Suggestion cards, one block per suggestion.
pub fn suggestions(suggestions: &[Suggestion], colored: bool) -> String {
    let mut out = String::new();
    for suggestion in suggestions {
        let tag = format!("[{}]", suggestion.priority);
        out.push_str(&format!(
            "  {} {} ({})\n",
            priority_style(suggestion.priority)
                .force_styling(colored)
                .apply_to(tag),
            style(&suggestion.title).force_styling(colored).bold(),
            suggestion.category
        ));
        out.push_str(&format!("    {}\n", suggestion.description));
        for tip in &suggestion.tips {
            out.push_str(&format!("    - {tip}\n"));
        }
        out.push_str(&format!("    Impact: {}\n", suggestion.impact));
    }
    out
}

/// Question list with every option's point value.
pub fn catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (title, questions) in catalog.sections() {
        if let Some(title) = title {
            out.push_str(&format!("{title}\n"));
        }
        for question in questions {
            out.push_str(&format!("  {} ({})\n", question.text(), question.id()));
            for option in question.options() {
                out.push_str(&format!("    {:>2}  {}\n", option.value, option.label));
            }
        }
    }
    out.push_str(&format!(
        "\nScores range from {} to {}.\n",
        catalog.min_score(),
        catalog.max_score()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::{AnswerSet, QuestionId, ScoringConfig, assess, standard_catalog};

    fn scenario() -> (Results, Catalog) {
        let catalog = standard_catalog();
        let answers = catalog
            .questions()
            .iter()
            .map(|q| (q.id(), q.min_value()))
            .collect::<AnswerSet>()
            .with(QuestionId::Transport, 5)
            .with(QuestionId::Diet, 6)
            .with(QuestionId::Energy, 5);
        let results = assess(&catalog, &answers, &ScoringConfig::default()).unwrap();
        (results, catalog)
    }

    #[test]
    fn results_view() {
        let (results, catalog) = scenario();
        let text = super::results(&results, &catalog, 25.0, false);

        assert!(text.contains("Your score: 23 / 51"));
        assert!(text.contains("Impact: medium"));
        assert!(text.contains("Transportation"));
        assert!(text.contains("[high] Reduce Vehicle Dependency (Transportation)"));
        assert!(text.contains("could lower your score by about"));
        assert!(text.ends_with("I got a score of 23/51!\n"));
    }

    #[test]
    fn uncolored_output_has_no_escape_codes() {
        let (results, catalog) = scenario();
        let text = super::results(&results, &catalog, 25.0, false);
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn breakdown_bands() {
        let (results, catalog) = scenario();
        let text = super::results(&results, &catalog, 25.0, false);
        let diet = text.lines().find(|l| l.trim_start().starts_with("Diet")).unwrap();
        assert!(diet.ends_with("red"));
        let water = text
            .lines()
            .find(|l| l.trim_start().starts_with("Water Usage"))
            .unwrap();
        assert!(water.ends_with("green"));
    }

    #[test]
    fn suggestion_card_lines() {
        let (results, _) = scenario();
        let card = &results.suggestions[0];
        let text = super::suggestions(std::slice::from_ref(card), false);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            format!("  [{}] {} ({})", card.priority, card.title, card.category)
        );
        assert_eq!(lines[1], format!("    {}", card.description));
        assert_eq!(lines.len(), card.tips.len() + 3);
        assert_eq!(lines[lines.len() - 1], format!("    Impact: {}", card.impact));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn catalog_listing() {
        let text = super::catalog(&standard_catalog());
        assert!(text.contains("(transport)"));
        assert!(text.ends_with("\nScores range from 11 to 51.\n"));
    }
}
