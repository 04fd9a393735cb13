use crate::QuestionId;

/// A single quiz question with its selectable options.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Which category this question scores.
    id: QuestionId,

    /// The prompt text shown to the user.
    text: String,

    /// Selectable options, in display order.
    options: Vec<AnswerOption>,
}

impl Question {
    /// Create a new question.
    pub fn new(id: QuestionId, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the options in display order.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Find the option carrying exactly this value.
    pub fn option_for(&self, value: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Check if `value` is one of the declared option values.
    pub fn accepts(&self, value: u32) -> bool {
        self.option_for(value).is_some()
    }

    /// Largest declared option value, or 0 for a question without options.
    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    /// Smallest declared option value, or 0 for a question without options.
    pub fn min_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).min().unwrap_or(0)
    }
}

/// One selectable answer: what the user sees and what it scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
