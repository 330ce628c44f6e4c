//! Declared option sets for every choice field.
//!
//! Values are stored verbatim in the response, so these strings are also the
//! wire values.

use crate::field::Field;

pub const OTHER: &str = "Other";
pub const YES: &str = "Yes";

pub const SPECIALTIES: &[&str] = &[
    "Endocrinologist",
    "ENT Specialist",
    "General Surgeon",
    "Radiologist",
    OTHER,
];

pub const YEARS_PRACTICE: &[&str] = &["< 5 years", "5-10 years", "10-20 years", "> 20 years"];

pub const PRACTICE_SETTINGS: &[&str] = &[
    "Government Hospital",
    "Private Hospital",
    "Clinic/Nursing Home",
    "Academic Institution",
];

pub const YES_NO: &[&str] = &[YES, "No"];

pub const LEARN_MWA: &[&str] = &[
    "Medical literature",
    "Conference",
    "Colleague",
    "Medical device representative",
    OTHER,
];

pub const INDICATIONS: &[&str] = &[
    "Benign thyroid nodules",
    "Recurrent thyroid cysts",
    "Thyroid cancer (selected cases)",
    "Cosmetic concerns",
    "Not sure",
];

pub const COMPARE_MWA: &[&str] = &[
    "More effective",
    "Equally effective",
    "Less effective",
    "Insufficient data",
];

pub const REFERRED: &str = "Yes, I've referred";
pub const PERFORMED: &str = "Yes, I've performed";

pub const REFERRED_OR_TREATED: &[&str] = &[REFERRED, PERFORMED, "No, not yet"];

pub const NUM_MWA: &[&str] = &["1-5", "6-10", "11-20", "> 20"];

pub const OUTCOMES: &[&str] = &[
    "Significant volume reduction",
    "Symptom relief",
    "Minimal complications",
    "Recurrence",
    "Not applicable",
];

pub const COMPLICATIONS: &[&str] = &[
    "Voice change",
    "Pain or swelling",
    "Nodule recurrence",
    "Infection",
    "None observed",
    OTHER,
];

pub const VIABLE_ALT: &[&str] = &[
    "Strongly agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly disagree",
];

pub const ENCOURAGE: &[&str] = &[
    "More clinical evidence",
    "Training/workshops",
    "Cost-effectiveness",
    "Better insurance coverage",
    "Patient demand",
    "Institutional approval",
];

pub const OPEN_WORKSHOP: &[&str] = &[YES, "Maybe", "No"];

/// The option set for `field`, or `None` for free-text fields.
pub fn declared(field: Field) -> Option<&'static [&'static str]> {
    let set = match field {
        Field::Specialty => SPECIALTIES,
        Field::YearsPractice => YEARS_PRACTICE,
        Field::PracticeSetting => PRACTICE_SETTINGS,
        Field::ManagedThyroid | Field::FamiliarMwa | Field::Consent => YES_NO,
        Field::LearnMwa => LEARN_MWA,
        Field::Indications => INDICATIONS,
        Field::CompareMwa => COMPARE_MWA,
        Field::ReferredOrTreated => REFERRED_OR_TREATED,
        Field::NumMwa => NUM_MWA,
        Field::Outcomes => OUTCOMES,
        Field::Complications => COMPLICATIONS,
        Field::ViableAlt => VIABLE_ALT,
        Field::Encourage => ENCOURAGE,
        Field::OpenWorkshop => OPEN_WORKSHOP,
        Field::SpecialtyOther
        | Field::LearnMwaOther
        | Field::Contraindications
        | Field::ComplicationsOther
        | Field::Comments
        | Field::Contact => return None,
    };
    Some(set)
}

/// True if `value` may be stored in `field`. Free-text fields accept anything.
pub fn is_declared(field: Field, value: &str) -> bool {
    declared(field).is_none_or(|set| set.contains(&value))
}
