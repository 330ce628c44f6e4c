use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    /// `details` holds every validation message, joined with "; ".
    #[error("{count} answer(s) failed validation: {details}")]
    Incomplete { count: usize, details: String },
}
