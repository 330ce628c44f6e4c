//! Conditional fields.
//!
//! Visibility is derived from the snapshot on every read and never stored.
//! Hidden fields keep whatever value they last held; use [`pruned`] to drop
//! those before handing the response on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field::Field;
use crate::models::response::SurveyResponse;
use crate::options::{OTHER, PERFORMED, REFERRED, YES};

/// A predicate over one governing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    /// Scalar field equals `value`.
    Equals { field: Field, value: String },
    /// Scalar field equals any of `values`.
    OneOf { field: Field, values: Vec<String> },
    /// List field has `value` checked.
    Contains { field: Field, value: String },
}

impl Condition {
    pub fn governing_field(&self) -> Field {
        match self {
            Condition::Equals { field, .. }
            | Condition::OneOf { field, .. }
            | Condition::Contains { field, .. } => *field,
        }
    }

    pub fn holds(&self, response: &SurveyResponse) -> bool {
        match self {
            Condition::Equals { field, value } => response.scalar(*field) == Some(value.as_str()),
            Condition::OneOf { field, values } => response
                .scalar(*field)
                .is_some_and(|current| values.iter().any(|v| v == current)),
            Condition::Contains { field, value } => response
                .list(*field)
                .is_some_and(|checked| checked.contains(value)),
        }
    }
}

/// The condition under which `field` is shown, or `None` if it always is.
pub fn condition_for(field: Field) -> Option<Condition> {
    let condition = match field {
        Field::SpecialtyOther => Condition::Equals {
            field: Field::Specialty,
            value: OTHER.to_string(),
        },
        Field::LearnMwaOther => Condition::Equals {
            field: Field::LearnMwa,
            value: OTHER.to_string(),
        },
        Field::NumMwa => Condition::OneOf {
            field: Field::ReferredOrTreated,
            values: vec![REFERRED.to_string(), PERFORMED.to_string()],
        },
        Field::ComplicationsOther => Condition::Contains {
            field: Field::Complications,
            value: OTHER.to_string(),
        },
        Field::Contact => Condition::Equals {
            field: Field::Consent,
            value: YES.to_string(),
        },
        _ => return None,
    };
    Some(condition)
}

pub fn is_visible(field: Field, response: &SurveyResponse) -> bool {
    condition_for(field).is_none_or(|c| c.holds(response))
}

/// Hidden fields that still carry a value from before they were hidden.
pub fn stale_fields(response: &SurveyResponse) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|&f| !is_visible(f, response) && response.is_answered(f))
        .collect()
}

/// Copy of `response` with every stale hidden value cleared.
pub fn pruned(response: &SurveyResponse) -> SurveyResponse {
    let mut out = response.clone();
    for field in stale_fields(response) {
        out.clear(field);
    }
    out
}
