use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response::SurveyResponse;

/// What a persistence backend would receive for one completed survey.
/// Built at submit time; nothing in this workspace sends it anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: jiff::Timestamp,
    pub response: SurveyResponse,
}

impl Submission {
    pub fn new(response: SurveyResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: jiff::Timestamp::now(),
            response,
        }
    }
}
