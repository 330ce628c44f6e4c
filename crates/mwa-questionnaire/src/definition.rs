use mwa_core::field::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How a question is presented and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ControlKind {
    /// Dropdown, one answer.
    Select,
    /// Radio group, one answer.
    Radio,
    /// Checkbox group, any number of answers.
    Checkbox,
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    TextArea,
}

impl ControlKind {
    /// Controls that only accept one of the declared options.
    pub fn is_choice(self) -> bool {
        matches!(self, ControlKind::Select | ControlKind::Radio)
    }
}

/// One question bound to one response field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub field: Field,
    pub label: String,
    pub control: ControlKind,
    pub options: Vec<String>,
    pub required: bool,
    pub placeholder: Option<String>,
}

/// A titled group of questions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    /// A visible required question has no answer.
    MissingRequired,
    /// A single-choice answer is not one of the question's options.
    InvalidOption,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
    pub message: String,
}
