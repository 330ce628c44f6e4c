use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Whether a field holds one value or an ordered set of checked options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Scalar,
    List,
}

/// Every slot in a survey response. Wire names match the JSON keys of
/// [`SurveyResponse`](crate::models::response::SurveyResponse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Field {
    #[serde(rename = "specialty")]
    Specialty,
    #[serde(rename = "specialtyOther")]
    SpecialtyOther,
    #[serde(rename = "yearsPractice")]
    YearsPractice,
    #[serde(rename = "practiceSetting")]
    PracticeSetting,
    #[serde(rename = "managedThyroid")]
    ManagedThyroid,
    #[serde(rename = "familiarMWA")]
    FamiliarMwa,
    #[serde(rename = "learnMWA")]
    LearnMwa,
    #[serde(rename = "learnMWAOther")]
    LearnMwaOther,
    #[serde(rename = "indications")]
    Indications,
    #[serde(rename = "compareMWA")]
    CompareMwa,
    #[serde(rename = "contraindications")]
    Contraindications,
    #[serde(rename = "referredOrTreated")]
    ReferredOrTreated,
    #[serde(rename = "numMWA")]
    NumMwa,
    #[serde(rename = "outcomes")]
    Outcomes,
    #[serde(rename = "complications")]
    Complications,
    #[serde(rename = "complicationsOther")]
    ComplicationsOther,
    #[serde(rename = "viableAlt")]
    ViableAlt,
    #[serde(rename = "encourage")]
    Encourage,
    #[serde(rename = "openWorkshop")]
    OpenWorkshop,
    #[serde(rename = "comments")]
    Comments,
    #[serde(rename = "consent")]
    Consent,
    #[serde(rename = "contact")]
    Contact,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 22] = [
        Field::Specialty,
        Field::SpecialtyOther,
        Field::YearsPractice,
        Field::PracticeSetting,
        Field::ManagedThyroid,
        Field::FamiliarMwa,
        Field::LearnMwa,
        Field::LearnMwaOther,
        Field::Indications,
        Field::CompareMwa,
        Field::Contraindications,
        Field::ReferredOrTreated,
        Field::NumMwa,
        Field::Outcomes,
        Field::Complications,
        Field::ComplicationsOther,
        Field::ViableAlt,
        Field::Encourage,
        Field::OpenWorkshop,
        Field::Comments,
        Field::Consent,
        Field::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Specialty => "specialty",
            Field::SpecialtyOther => "specialtyOther",
            Field::YearsPractice => "yearsPractice",
            Field::PracticeSetting => "practiceSetting",
            Field::ManagedThyroid => "managedThyroid",
            Field::FamiliarMwa => "familiarMWA",
            Field::LearnMwa => "learnMWA",
            Field::LearnMwaOther => "learnMWAOther",
            Field::Indications => "indications",
            Field::CompareMwa => "compareMWA",
            Field::Contraindications => "contraindications",
            Field::ReferredOrTreated => "referredOrTreated",
            Field::NumMwa => "numMWA",
            Field::Outcomes => "outcomes",
            Field::Complications => "complications",
            Field::ComplicationsOther => "complicationsOther",
            Field::ViableAlt => "viableAlt",
            Field::Encourage => "encourage",
            Field::OpenWorkshop => "openWorkshop",
            Field::Comments => "comments",
            Field::Consent => "consent",
            Field::Contact => "contact",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Indications | Field::Outcomes | Field::Complications | Field::Encourage => {
                FieldKind::List
            }
            _ => FieldKind::Scalar,
        }
    }

    pub fn is_list(self) -> bool {
        self.kind() == FieldKind::List
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
