use std::path::Path;

use mwa_core::field::Field;
use mwa_core::form::{FormEvent, FormStateManager};
use mwa_core::models::response::SurveyResponse;
use mwa_core::models::submission::Submission;
use mwa_core::visibility;
use mwa_export::json::to_alert_json;
use mwa_export::render::{render_summary, render_template};
use mwa_questionnaire::Questionnaire;
use mwa_questionnaire::error::QuestionnaireError;

use crate::config::{OutputFormat, SurveyConfig};
use crate::prompt::{self, Presenter};

pub fn require_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, QuestionnaireError> {
    mwa_questionnaire::get_questionnaire(id)
        .ok_or_else(|| QuestionnaireError::UnknownQuestionnaire(id.to_string()))
}

/// Read a recorded event log: a JSON array of form events.
pub fn load_events(path: &Path) -> eyre::Result<Vec<FormEvent>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read events at {}: {e}", path.display()))?;
    let events: Vec<FormEvent> = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), count = events.len(), "events loaded");
    Ok(events)
}

/// Apply `events` in order to a fresh form. Stops at the first bad event.
pub fn replay_events(events: &[FormEvent]) -> eyre::Result<FormStateManager> {
    let mut form = FormStateManager::new();
    for (index, event) in events.iter().enumerate() {
        form.apply(event)
            .map_err(|e| eyre::eyre!("event {index} ({}): {e}", event.name))?;
    }
    Ok(form)
}

/// Validate, wrap and format a response for display.
///
/// Nothing is persisted: the formatted text is the end of the line.
pub fn submit(
    config: &SurveyConfig,
    questionnaire: &dyn Questionnaire,
    response: &SurveyResponse,
) -> eyre::Result<String> {
    let errors = questionnaire.validate_response(response);
    if !errors.is_empty() {
        for error in &errors {
            tracing::warn!(field = %error.field, kind = ?error.kind, "{error}");
        }
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(QuestionnaireError::Incomplete {
            count: errors.len(),
            details: details.join("; "),
        }
        .into());
    }

    let stale = visibility::stale_fields(response);
    let response = if config.prune_hidden_fields && !stale.is_empty() {
        let names: Vec<&str> = stale.iter().map(|f| f.as_str()).collect();
        tracing::info!(fields = ?names, "pruning hidden answers");
        visibility::pruned(response)
    } else {
        response.clone()
    };

    let submission = Submission::new(response);
    let body = match config.output_format {
        OutputFormat::Json => to_alert_json(&submission.response)?,
        OutputFormat::Text => match &config.summary_template {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read template at {}: {e}", path.display())
                })?;
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("summary.txt");
                render_template(name, &content, &submission, questionnaire)?
            }
            None => render_summary(&submission, questionnaire)?,
        },
    };

    tracing::info!(
        submission_id = %submission.id,
        "submission not persisted: no backend configured"
    );
    Ok(body)
}

/// Interactive fill followed by submit.
pub fn fill(
    config: &SurveyConfig,
    questionnaire: &dyn Questionnaire,
    presenter: &mut dyn Presenter,
) -> eyre::Result<String> {
    let mut form = FormStateManager::new();
    prompt::run_form(questionnaire, presenter, &mut form)?;
    submit(config, questionnaire, form.snapshot())
}

/// Replay an event log, then submit.
pub fn replay(
    config: &SurveyConfig,
    questionnaire: &dyn Questionnaire,
    events_path: &Path,
) -> eyre::Result<String> {
    let events = load_events(events_path)?;
    let form = replay_events(&events)?;
    submit(config, questionnaire, form.snapshot())
}

/// The questionnaire definition, with each conditional field's rule, as JSON.
pub fn describe(questionnaire: &dyn Questionnaire) -> eyre::Result<String> {
    let conditions: serde_json::Map<String, serde_json::Value> = Field::ALL
        .into_iter()
        .filter_map(|f| visibility::condition_for(f).map(|c| (f, c)))
        .map(|(f, c)| serde_json::to_value(c).map(|v| (f.as_str().to_string(), v)))
        .collect::<Result<_, serde_json::Error>>()?;

    let doc = serde_json::json!({
        "id": questionnaire.id(),
        "title": questionnaire.title(),
        "intro": questionnaire.intro(),
        "sections": questionnaire.sections(),
        "visible_when": conditions,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}
