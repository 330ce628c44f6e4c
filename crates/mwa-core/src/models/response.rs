use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field::Field;

/// One doctor's answers. Scalars are empty until answered; list fields hold
/// the checked options in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SurveyResponse {
    // A. Respondent profile
    pub specialty: String,
    pub specialty_other: String,
    pub years_practice: String,
    pub practice_setting: String,
    pub managed_thyroid: String,

    // B. Awareness & knowledge
    #[serde(rename = "familiarMWA")]
    pub familiar_mwa: String,
    #[serde(rename = "learnMWA")]
    pub learn_mwa: String,
    #[serde(rename = "learnMWAOther")]
    pub learn_mwa_other: String,
    pub indications: Vec<String>,

    // C. Experience & practice
    #[serde(rename = "compareMWA")]
    pub compare_mwa: String,
    pub contraindications: String,
    pub referred_or_treated: String,
    #[serde(rename = "numMWA")]
    pub num_mwa: String,
    pub outcomes: Vec<String>,
    pub complications: Vec<String>,
    pub complications_other: String,

    // D. Opinions & adoption
    pub viable_alt: String,
    pub encourage: Vec<String>,
    pub open_workshop: String,
    pub comments: String,

    // Consent & contact
    pub consent: String,
    pub contact: String,
}

/// Borrowed view of a single field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choices(&'a [String]),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Choices(v) => v.is_empty(),
        }
    }

    /// Display form: list values are joined with `", "`.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Choices(v) => v.join(", "),
        }
    }
}

impl SurveyResponse {
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        if let Some(list) = self.list(field) {
            return FieldValue::Choices(list);
        }
        FieldValue::Text(self.scalar(field).unwrap_or_default())
    }

    pub fn is_answered(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// The value of a scalar field, or `None` if `field` is a list field.
    pub fn scalar(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Specialty => &self.specialty,
            Field::SpecialtyOther => &self.specialty_other,
            Field::YearsPractice => &self.years_practice,
            Field::PracticeSetting => &self.practice_setting,
            Field::ManagedThyroid => &self.managed_thyroid,
            Field::FamiliarMwa => &self.familiar_mwa,
            Field::LearnMwa => &self.learn_mwa,
            Field::LearnMwaOther => &self.learn_mwa_other,
            Field::CompareMwa => &self.compare_mwa,
            Field::Contraindications => &self.contraindications,
            Field::ReferredOrTreated => &self.referred_or_treated,
            Field::NumMwa => &self.num_mwa,
            Field::ComplicationsOther => &self.complications_other,
            Field::ViableAlt => &self.viable_alt,
            Field::OpenWorkshop => &self.open_workshop,
            Field::Comments => &self.comments,
            Field::Consent => &self.consent,
            Field::Contact => &self.contact,
            Field::Indications | Field::Outcomes | Field::Complications | Field::Encourage => {
                return None;
            }
        };
        Some(value)
    }

    /// The checked options of a list field, or `None` if `field` is a scalar.
    pub fn list(&self, field: Field) -> Option<&[String]> {
        match field {
            Field::Indications => Some(&self.indications),
            Field::Outcomes => Some(&self.outcomes),
            Field::Complications => Some(&self.complications),
            Field::Encourage => Some(&self.encourage),
            _ => None,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::Specialty => &mut self.specialty,
            Field::SpecialtyOther => &mut self.specialty_other,
            Field::YearsPractice => &mut self.years_practice,
            Field::PracticeSetting => &mut self.practice_setting,
            Field::ManagedThyroid => &mut self.managed_thyroid,
            Field::FamiliarMwa => &mut self.familiar_mwa,
            Field::LearnMwa => &mut self.learn_mwa,
            Field::LearnMwaOther => &mut self.learn_mwa_other,
            Field::CompareMwa => &mut self.compare_mwa,
            Field::Contraindications => &mut self.contraindications,
            Field::ReferredOrTreated => &mut self.referred_or_treated,
            Field::NumMwa => &mut self.num_mwa,
            Field::ComplicationsOther => &mut self.complications_other,
            Field::ViableAlt => &mut self.viable_alt,
            Field::OpenWorkshop => &mut self.open_workshop,
            Field::Comments => &mut self.comments,
            Field::Consent => &mut self.consent,
            Field::Contact => &mut self.contact,
            Field::Indications | Field::Outcomes | Field::Complications | Field::Encourage => {
                return None;
            }
        };
        Some(value)
    }

    pub(crate) fn list_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        match field {
            Field::Indications => Some(&mut self.indications),
            Field::Outcomes => Some(&mut self.outcomes),
            Field::Complications => Some(&mut self.complications),
            Field::Encourage => Some(&mut self.encourage),
            _ => None,
        }
    }

    /// Empty `field`, whichever kind it is.
    pub(crate) fn clear(&mut self, field: Field) {
        if let Some(s) = self.scalar_mut(field) {
            s.clear();
        } else if let Some(v) = self.list_mut(field) {
            v.clear();
        }
    }
}
