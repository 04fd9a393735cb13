//! The submit step: validate answers, score them, and assemble `Results`.

use tracing::{info, warn};

use crate::config::{CompletenessPolicy, ScoringConfig};
use crate::{
    AnswerError, AnswerSet, Catalog, QuestionId, QuizBackend, QuizError, Results, calculate_footprint,
    generate_suggestions, result_category,
};

/// Turn a submitted answer set into `Results`.
///
/// Under [`CompletenessPolicy::Strict`] the answer set must be complete and
/// every value must be a declared option; otherwise an [`AnswerError`] is
/// returned and nothing is scored. Under [`CompletenessPolicy::Lenient`]
/// problems are logged and the offending answers score 0.
pub fn assess(
    catalog: &Catalog,
    answers: &AnswerSet,
    config: &ScoringConfig,
) -> Result<Results, AnswerError> {
    match config.completeness {
        CompletenessPolicy::Strict => answers.validate(catalog)?,
        CompletenessPolicy::Lenient => {
            if let Err(err) = answers.validate(catalog) {
                warn!("Scoring answers leniently: {err}");
            }
        }
    }

    let footprint = calculate_footprint(catalog, answers);
    let result_category = result_category(footprint.total_score, &config.tiers);
    let suggestions = generate_suggestions(answers, footprint.total_score, &config.suggestions);

    info!(
        total = footprint.total_score,
        max = catalog.max_score(),
        level = %result_category.level,
        suggestions = suggestions.len(),
        "Footprint assessed"
    );

    Ok(Results {
        total_score: footprint.total_score,
        scores: footprint.scores,
        result_category,
        suggestions,
    })
}

/// Collect answers through a backend and assess them.
///
/// The backend is handed a validator that rejects values the catalog does
/// not declare for a question, so interactive backends can re-ask.
pub fn run_quiz<B: QuizBackend>(
    backend: &B,
    catalog: &Catalog,
    config: &ScoringConfig,
) -> Result<Results, QuizError> {
    let validate = |id: QuestionId, value: u32, _: &AnswerSet| match catalog.question(id) {
        Some(question) if question.accepts(value) => Ok(()),
        Some(_) => Err(format!("{value} is not an option for this question")),
        None => Err(format!("'{id}' is not part of this quiz")),
    };

    let answers = backend.collect(catalog, &validate).map_err(|err| {
        if B::is_cancellation(&err) {
            QuizError::Cancelled
        } else {
            QuizError::backend(err)
        }
    })?;

    Ok(assess(catalog, &answers, config)?)
}
