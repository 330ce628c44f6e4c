use serde::Serialize;
use tera::{Context, Tera};

use mwa_core::models::response::SurveyResponse;
use mwa_core::models::submission::Submission;
use mwa_core::visibility;
use mwa_questionnaire::Questionnaire;

use crate::error::ExportError;

/// Plain-text summary used when no custom template is configured.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "\
{{ title }}
Submission {{ id }} ({{ submitted_at }})
{% for section in sections %}
{{ section.title }}
{% for answer in section.answers %}  - {{ answer.label }}: {{ answer.answer }}
{% endfor %}{% endfor %}";

pub const DEFAULT_TEMPLATE_NAME: &str = "summary.txt";

#[derive(Debug, Serialize)]
struct AnswerSummary {
    label: String,
    answer: String,
}

#[derive(Debug, Serialize)]
struct SectionSummary {
    title: String,
    answers: Vec<AnswerSummary>,
}

#[derive(Debug, Serialize)]
struct SummaryContext<'a> {
    title: &'a str,
    id: String,
    submitted_at: String,
    response: &'a SurveyResponse,
    sections: Vec<SectionSummary>,
}

/// Visible, answered questions grouped by section. Empty sections are dropped.
fn summarize_sections(
    questionnaire: &dyn Questionnaire,
    response: &SurveyResponse,
) -> Vec<SectionSummary> {
    questionnaire
        .sections()
        .iter()
        .filter_map(|section| {
            let answers: Vec<_> = section
                .questions
                .iter()
                .filter(|q| {
                    visibility::is_visible(q.field, response) && response.is_answered(q.field)
                })
                .map(|q| AnswerSummary {
                    label: q.label.clone(),
                    answer: response.get(q.field).display(),
                })
                .collect();
            (!answers.is_empty()).then(|| SectionSummary {
                title: section.title.clone(),
                answers,
            })
        })
        .collect()
}

/// Render a Tera template with a submission.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// Context variables: `title`, `id`, `submitted_at`, `response` (keyed by
/// form field name), and `sections` (each with `title` and `answers`).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    submission: &Submission,
    questionnaire: &dyn Questionnaire,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let summary = SummaryContext {
        title: questionnaire.title(),
        id: submission.id.to_string(),
        submitted_at: submission.submitted_at.to_string(),
        response: &submission.response,
        sections: summarize_sections(questionnaire, &submission.response),
    };
    let value = serde_json::to_value(&summary)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}

/// Render [`DEFAULT_SUMMARY_TEMPLATE`].
pub fn render_summary(
    submission: &Submission,
    questionnaire: &dyn Questionnaire,
) -> Result<String, ExportError> {
    render_template(
        DEFAULT_TEMPLATE_NAME,
        DEFAULT_SUMMARY_TEMPLATE,
        submission,
        questionnaire,
    )
}
