use mwa_core::models::response::SurveyResponse;
use mwa_core::models::submission::Submission;

use crate::error::ExportError;

/// The response as 2-space indented JSON, keys in form order.
pub fn to_alert_json(response: &SurveyResponse) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// The full submission envelope as pretty JSON.
pub fn submission_json(submission: &Submission) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(submission)?)
}
