use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::field::Field;
use crate::models::response::SurveyResponse;
use crate::options;

/// A single input event from the presentation layer, keyed by field name.
///
/// `checked` is set for checkbox groups and absent for every other control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormEvent {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl FormEvent {
    pub fn change(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            checked: None,
        }
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            checked: Some(checked),
        }
    }
}

/// Holds the in-progress response and applies field updates to it.
///
/// Every operation touches exactly one field.
#[derive(Debug, Clone, Default)]
pub struct FormStateManager {
    response: SurveyResponse,
}

impl FormStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a scalar field's value. The value is not checked against the
    /// field's option set.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), CoreError> {
        let slot = self
            .response
            .scalar_mut(field)
            .ok_or(CoreError::NotScalar(field.as_str()))?;
        *slot = value.into();
        tracing::debug!(field = %field, "field set");
        Ok(())
    }

    /// Check (`included`) or uncheck one option of a checkbox group.
    ///
    /// Checking an option already present leaves the list unchanged; unchecking
    /// removes every occurrence.
    pub fn toggle_list_field(
        &mut self,
        field: Field,
        value: &str,
        included: bool,
    ) -> Result<(), CoreError> {
        let list = self
            .response
            .list_mut(field)
            .ok_or(CoreError::NotList(field.as_str()))?;

        if included {
            if !options::is_declared(field, value) {
                return Err(CoreError::UndeclaredOption {
                    field: field.as_str(),
                    value: value.to_string(),
                });
            }
            if !list.iter().any(|v| v == value) {
                list.push(value.to_string());
            }
        } else {
            list.retain(|v| v != value);
        }

        tracing::debug!(field = %field, value, included, "list field toggled");
        Ok(())
    }

    /// Route a named input event to the matching update.
    pub fn apply(&mut self, event: &FormEvent) -> Result<(), CoreError> {
        let field: Field = event.name.parse()?;
        match event.checked {
            Some(checked) => self.toggle_list_field(field, &event.value, checked),
            None => self.set_field(field, event.value.as_str()),
        }
    }

    pub fn snapshot(&self) -> &SurveyResponse {
        &self.response
    }

    pub fn into_response(self) -> SurveyResponse {
        self.response
    }

    pub fn reset(&mut self) {
        self.response = SurveyResponse::default();
        tracing::debug!("form reset");
    }
}
