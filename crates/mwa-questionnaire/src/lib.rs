//! mwa-questionnaire
//!
//! Survey definitions. Pure data — no I/O.
//! Describes the sections, questions, controls, and required flags of each
//! supported questionnaire, and checks a response against them.

pub mod definition;
pub mod error;
pub mod surveys;

use definition::{Question, Section, ValidationError, ValidationKind};
use mwa_core::models::response::SurveyResponse;
use mwa_core::visibility;

/// Trait implemented by each survey the front end can present.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "thyroid_mwa").
    fn id(&self) -> &str;

    /// Heading shown above the form.
    fn title(&self) -> &str;

    /// Short introduction shown under the title.
    fn intro(&self) -> &str;

    fn sections(&self) -> &[Section];

    /// All questions in presentation order.
    fn questions(&self) -> Vec<&Question> {
        self.sections()
            .iter()
            .flat_map(|s| &s.questions)
            .collect()
    }

    /// Check the visible questions of `response`. Hidden questions are skipped
    /// whatever they hold.
    fn validate_response(&self, response: &SurveyResponse) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for question in self.questions() {
            if !visibility::is_visible(question.field, response) {
                continue;
            }

            let value = response.get(question.field);
            if value.is_empty() {
                if question.required {
                    errors.push(ValidationError {
                        field: question.field,
                        kind: ValidationKind::MissingRequired,
                        message: format!("{}: an answer is required", question.label),
                    });
                }
                continue;
            }

            if question.control.is_choice()
                && let Some(answer) = response.scalar(question.field)
                && !question.options.iter().any(|o| o == answer)
            {
                errors.push(ValidationError {
                    field: question.field,
                    kind: ValidationKind::InvalidOption,
                    message: format!(
                        "{}: '{}' is not one of [{}]",
                        question.label,
                        answer,
                        question.options.join(", "),
                    ),
                });
            }
        }
        errors
    }

    /// Format the visible, answered questions as structured text.
    fn to_structured_input(&self, response: &SurveyResponse) -> String {
        let mut output = format!("## {}\n\n", self.title());
        for section in self.sections() {
            let answered: Vec<_> = section
                .questions
                .iter()
                .filter(|q| {
                    visibility::is_visible(q.field, response) && response.is_answered(q.field)
                })
                .collect();
            if answered.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n", section.title));
            for question in answered {
                output.push_str(&format!(
                    "- {}: {}\n",
                    question.label,
                    response.get(question.field).display()
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![Box::new(surveys::thyroid_mwa::ThyroidMwa)]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
