use std::collections::HashSet;

use crate::{Question, QuestionId};

/// Error type for a malformed question catalog.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no question for '{0}'")]
    MissingQuestion(QuestionId),

    #[error("Catalog declares '{0}' more than once")]
    DuplicateQuestion(QuestionId),

    #[error("Question '{0}' has no options")]
    NoOptions(QuestionId),

    #[error("Question '{question}' declares option value {value} more than once")]
    DuplicateOption { question: QuestionId, value: u32 },

    #[error("Highest possible total does not fit in a u32")]
    ScoreOverflow,
}

/// A titled display group of questions (e.g. "Energy & Home").
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionGroup {
    pub title: String,
    pub members: Vec<QuestionId>,
}

impl QuestionGroup {
    pub fn new(title: impl Into<String>, members: Vec<QuestionId>) -> Self {
        Self {
            title: title.into(),
            members,
        }
    }
}

/// The fixed list of quiz questions and metadata around them.
///
/// A catalog is presentation-agnostic: it can be asked step by step in a
/// terminal, rendered as a document, or scored directly. It is also the
/// weight table: each option's value is the points it contributes.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Optional message shown before the quiz starts.
    pub prelude: Option<String>,

    /// All questions, in catalog order.
    pub questions: Vec<Question>,

    /// Display groups. Questions not in any group are shown after the groups.
    pub groups: Vec<QuestionGroup>,

    /// Optional message shown after the quiz completes.
    pub epilogue: Option<String>,
}

impl Catalog {
    /// Create a new catalog with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            groups: Vec::new(),
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Add a display group.
    pub fn with_group(mut self, title: impl Into<String>, members: Vec<QuestionId>) -> Self {
        self.groups.push(QuestionGroup::new(title, members));
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the catalog has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Highest reachable total: the sum of every question's largest option.
    /// Saturates at `u32::MAX`; [`Catalog::validate`] rejects catalogs
    /// where that happens.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::max_value)
            .fold(0, u32::saturating_add)
    }

    /// Lowest reachable total for a complete answer set.
    pub fn min_score(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::min_value)
            .fold(0, u32::saturating_add)
    }

    /// Questions in display order: grouped questions first (group by group),
    /// then any ungrouped ones in catalog order. Each question appears once.
    pub fn sections(&self) -> Vec<(Option<&str>, Vec<&Question>)> {
        let mut seen = HashSet::new();
        let mut sections = Vec::new();

        for group in &self.groups {
            let members: Vec<&Question> = group
                .members
                .iter()
                .filter_map(|id| self.question(*id))
                .filter(|q| seen.insert(q.id()))
                .collect();
            if !members.is_empty() {
                sections.push((Some(group.title.as_str()), members));
            }
        }

        let rest: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| seen.insert(q.id()))
            .collect();
        if !rest.is_empty() {
            sections.push((None, rest));
        }

        sections
    }

    /// Check the structural invariants: every question id exactly once,
    /// non-empty option lists with unique values, and a maximum total that
    /// fits in a `u32`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id()) {
                return Err(CatalogError::DuplicateQuestion(question.id()));
            }
            if question.options().is_empty() {
                return Err(CatalogError::NoOptions(question.id()));
            }
            let mut values = HashSet::new();
            for option in question.options() {
                if !values.insert(option.value) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id(),
                        value: option.value,
                    });
                }
            }
        }

        if let Some(missing) = QuestionId::ALL.into_iter().find(|id| !ids.contains(id)) {
            return Err(CatalogError::MissingQuestion(missing));
        }

        self.questions
            .iter()
            .try_fold(0u32, |total, q| total.checked_add(q.max_value()))
            .ok_or(CatalogError::ScoreOverflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnswerOption;

    fn low_high(id: QuestionId) -> Question {
        Question::new(
            id,
            format!("{id}?"),
            vec![AnswerOption::new("low", 1), AnswerOption::new("high", 5)],
        )
    }

    fn full() -> Catalog {
        Catalog::new(QuestionId::ALL.into_iter().map(low_high).collect())
    }

    #[test]
    fn full_catalog_is_valid() {
        assert_eq!(full().validate(), Ok(()));
    }

    #[test]
    fn score_bounds() {
        let catalog = full();
        assert_eq!(catalog.max_score(), 50);
        assert_eq!(catalog.min_score(), 10);
    }

    #[test]
    fn missing_question() {
        let mut catalog = full();
        catalog.questions.retain(|q| q.id() != QuestionId::Water);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingQuestion(QuestionId::Water))
        );
    }

    #[test]
    fn duplicate_question() {
        let mut catalog = full();
        catalog.questions.push(low_high(QuestionId::Diet));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateQuestion(QuestionId::Diet))
        );
    }

    #[test]
    fn duplicate_option_value() {
        let mut catalog = full();
        catalog.questions[0] = Question::new(
            QuestionId::Energy,
            "?",
            vec![AnswerOption::new("a", 3), AnswerOption::new("b", 3)],
        );
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateOption {
                question: QuestionId::Energy,
                value: 3
            })
        );
    }

    #[test]
    fn oversized_option_values() {
        let mut catalog = full();
        catalog.questions[0] = Question::new(
            QuestionId::Energy,
            "?",
            vec![AnswerOption::new("huge", u32::MAX)],
        );

        assert_eq!(catalog.validate(), Err(CatalogError::ScoreOverflow));
        assert_eq!(catalog.max_score(), u32::MAX);
        assert_eq!(catalog.min_score(), u32::MAX);
    }

    #[test]
    fn question_without_options() {
        let mut catalog = full();
        catalog.questions[1] = Question::new(QuestionId::Appliances, "?", Vec::new());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::NoOptions(QuestionId::Appliances))
        );
    }

    #[test]
    fn sections_follow_groups_then_rest() {
        let catalog = full().with_group("Food", vec![QuestionId::Diet, QuestionId::Water]);
        let sections = catalog.sections();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, Some("Food"));
        assert_eq!(sections[0].1.len(), 2);
        assert_eq!(sections[1].0, None);
        assert_eq!(sections[1].1.len(), 8);
        assert_eq!(sections[1].1[0].id(), QuestionId::Energy);
    }
}
