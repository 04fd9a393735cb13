//! Dialoguer backend implementation for QuizBackend trait.

use dialoguer::{Select, theme::ColorfulTheme};
use footprint::{AnswerSet, AnswerValidator, Catalog, Question, QuizBackend};
use thiserror::Error;

/// Label of the extra list entry that returns to the previous question.
const BACK_LABEL: &str = "<- Back";

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the quiz (e.g., pressed Ctrl+C or Escape).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// What the user picked on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Answer(u32),
    Back,
}

/// Prompt text with a progress counter, e.g. `[3/10] How do you get around?`.
fn progress_prompt(position: usize, total: usize, question: &Question) -> String {
    format!("[{}/{total}] {}", position + 1, question.text())
}

/// List entries for a question, plus a back entry when there is somewhere
/// to go back to.
fn select_items(question: &Question, can_go_back: bool) -> Vec<&str> {
    let mut items: Vec<&str> = question
        .options()
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    if can_go_back {
        items.push(BACK_LABEL);
    }
    items
}

/// Map a list index back to the step it stands for.
fn step_for(question: &Question, index: usize) -> Step {
    match question.options().get(index) {
        Some(option) => Step::Answer(option.value),
        None => Step::Back,
    }
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present questions
/// to the user in a command-line interface with colorful themes.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Show one question as a select list and return the chosen step.
    fn ask(
        &self,
        prompt: &str,
        question: &Question,
        previous: Option<u32>,
        can_go_back: bool,
    ) -> Result<Step, DialoguerError> {
        let items = select_items(question, can_go_back);

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(&items);

        // Re-visiting a question starts on the earlier answer
        let default_idx = previous
            .and_then(|value| question.options().iter().position(|o| o.value == value))
            .unwrap_or(0);
        builder = builder.default(default_idx);

        match builder.interact() {
            Ok(idx) => Ok(step_for(question, idx)),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }
}

impl QuizBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn collect(
        &self,
        catalog: &Catalog,
        validate: AnswerValidator<'_>,
    ) -> Result<AnswerSet, Self::Error> {
        let mut answers = AnswerSet::new();

        // Show prelude if present
        if let Some(prelude) = &catalog.prelude {
            println!("{prelude}");
            println!();
        }

        // Flatten the display groups, remembering where each one starts
        let mut order: Vec<(Option<&str>, &Question)> = Vec::new();
        for (title, questions) in catalog.sections() {
            for (i, question) in questions.into_iter().enumerate() {
                order.push((if i == 0 { title } else { None }, question));
            }
        }

        let total = order.len();
        let mut position = 0;
        while position < total {
            let (title, question) = order[position];
            if let Some(title) = title {
                println!();
                println!("== {title} ==");
            }

            let prompt = progress_prompt(position, total, question);
            let id = question.id();
            match self.ask(&prompt, question, answers.get(id), position > 0)? {
                Step::Back => {
                    position -= 1;
                }
                Step::Answer(value) => {
                    if let Err(msg) = validate(id, value, &answers) {
                        println!("Error: {msg}");
                        continue;
                    }
                    answers.insert(id, value);
                    position += 1;
                }
            }
        }

        // Show epilogue if present
        if let Some(epilogue) = &catalog.epilogue {
            println!();
            println!("{epilogue}");
        }

        Ok(answers)
    }

    fn is_cancellation(error: &Self::Error) -> bool {
        matches!(error, DialoguerError::Cancelled)
    }
}
