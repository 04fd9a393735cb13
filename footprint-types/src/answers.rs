use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Catalog, QuestionId};

/// Error type for answer parsing and validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Answer for '{question}' is not a number: {raw:?}")]
    NotNumeric { question: QuestionId, raw: String },

    #[error("{value} is not an option of question '{question}'")]
    InvalidOption { question: QuestionId, value: u32 },

    #[error("Unanswered questions: {}", join_ids(missing))]
    Incomplete { missing: Vec<QuestionId> },
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(QuestionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The user's selections, one numeric value per answered question.
///
/// Populated incrementally while the quiz runs and consumed once on submit.
/// Values are not checked on insert; use [`AnswerSet::validate`] at the
/// boundary to enforce that every value is a declared option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<QuestionId, u32>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Record (or replace) the answer to a question.
    pub fn insert(&mut self, id: QuestionId, value: u32) {
        self.values.insert(id, value);
    }

    /// Builder-style [`AnswerSet::insert`].
    pub fn with(mut self, id: QuestionId, value: u32) -> Self {
        self.insert(id, value);
        self
    }

    /// Get the answer to a question.
    pub fn get(&self, id: QuestionId) -> Option<u32> {
        self.values.get(&id).copied()
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.values.contains_key(&id)
    }

    /// Remove the answer to a question.
    pub fn remove(&mut self, id: QuestionId) -> Option<u32> {
        self.values.remove(&id)
    }

    /// Iterate over answers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, u32)> + '_ {
        self.values.iter().map(|(id, value)| (*id, *value))
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record an answer given as untyped text, e.g. from a form field or
    /// a `transport=5` command-line argument.
    pub fn insert_raw(&mut self, key: &str, raw: &str) -> Result<QuestionId, AnswerError> {
        let id: QuestionId = key.trim().parse()?;
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| AnswerError::NotNumeric {
                question: id,
                raw: raw.to_string(),
            })?;
        self.insert(id, value);
        Ok(id)
    }

    /// Build an answer set from untyped `(key, value)` pairs.
    pub fn parse_pairs<'a, I>(pairs: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut answers = Self::new();
        for (key, raw) in pairs {
            answers.insert_raw(key, raw)?;
        }
        Ok(answers)
    }

    /// Fraction of the catalog answered so far, in `[0.0, 1.0]`.
    pub fn progress(&self, catalog: &Catalog) -> f64 {
        if catalog.is_empty() {
            return 1.0;
        }
        let answered = catalog
            .questions()
            .iter()
            .filter(|q| self.contains(q.id()))
            .count();
        answered as f64 / catalog.len() as f64
    }

    /// Catalog questions without an answer, in catalog order.
    pub fn missing(&self, catalog: &Catalog) -> Vec<QuestionId> {
        catalog
            .questions()
            .iter()
            .map(|q| q.id())
            .filter(|id| !self.contains(*id))
            .collect()
    }

    /// Check if every catalog question has an answer.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.missing(catalog).is_empty()
    }

    /// Check that every stored value is one of its question's options.
    pub fn check_options(&self, catalog: &Catalog) -> Result<(), AnswerError> {
        for (id, value) in self.iter() {
            let accepted = catalog.question(id).is_some_and(|q| q.accepts(value));
            if !accepted {
                return Err(AnswerError::InvalidOption {
                    question: id,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Full boundary validation: declared option values and completeness.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), AnswerError> {
        self.check_options(catalog)?;
        let missing = self.missing(catalog);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnswerError::Incomplete { missing })
        }
    }
}

impl FromIterator<(QuestionId, u32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, u32)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerOption, Question};

    fn catalog() -> Catalog {
        Catalog::new(
            QuestionId::ALL
                .into_iter()
                .map(|id| {
                    Question::new(
                        id,
                        "?",
                        vec![AnswerOption::new("low", 1), AnswerOption::new("high", 5)],
                    )
                })
                .collect(),
        )
    }

    fn all_low() -> AnswerSet {
        QuestionId::ALL.into_iter().map(|id| (id, 1)).collect()
    }

    #[test]
    fn insert_and_get() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::Diet, 3);
        answers.insert(QuestionId::Diet, 6);

        assert_eq!(answers.get(QuestionId::Diet), Some(6));
        assert_eq!(answers.get(QuestionId::Energy), None);
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn parse_pairs() {
        let answers = AnswerSet::parse_pairs([("energy", "5"), (" diet ", " 3")]).unwrap();
        assert_eq!(answers.get(QuestionId::Energy), Some(5));
        assert_eq!(answers.get(QuestionId::Diet), Some(3));
    }

    #[test]
    fn parse_rejects_unknown_question() {
        let err = AnswerSet::parse_pairs([("heating", "5")]).unwrap_err();
        assert_eq!(err, AnswerError::UnknownQuestion("heating".to_string()));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = AnswerSet::parse_pairs([("water", "lots")]).unwrap_err();
        assert!(matches!(
            err,
            AnswerError::NotNumeric {
                question: QuestionId::Water,
                ..
            }
        ));
    }

    #[test]
    fn missing_in_catalog_order() {
        let mut answers = all_low();
        answers.remove(QuestionId::Waste);
        answers.remove(QuestionId::Energy);

        let catalog = catalog();
        assert_eq!(
            answers.missing(&catalog),
            vec![QuestionId::Energy, QuestionId::Waste]
        );
        assert!(!answers.is_complete(&catalog));
        assert_eq!(answers.progress(&catalog), 0.8);
    }

    #[test]
    fn validate_complete_set() {
        assert_eq!(all_low().validate(&catalog()), Ok(()));
    }

    #[test]
    fn validate_reports_invalid_option_before_completeness() {
        let answers = AnswerSet::new().with(QuestionId::Travel, 4);
        assert_eq!(
            answers.validate(&catalog()),
            Err(AnswerError::InvalidOption {
                question: QuestionId::Travel,
                value: 4
            })
        );
    }

    #[test]
    fn incomplete_error_lists_ids() {
        let answers = all_low();
        let mut partial = answers.clone();
        partial.remove(QuestionId::Digital);

        let err = partial.validate(&catalog()).unwrap_err();
        assert_eq!(err.to_string(), "Unanswered questions: digital");
    }

    #[test]
    fn serializes_as_plain_object() {
        let answers = AnswerSet::new()
            .with(QuestionId::Transport, 5)
            .with(QuestionId::Energy, 1);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"energy":1,"transport":5}"#);

        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }
}
