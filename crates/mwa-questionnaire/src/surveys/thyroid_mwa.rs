use mwa_core::field::Field;
use mwa_core::options;

use crate::Questionnaire;
use crate::definition::{ControlKind, Question, Section};

/// Microwave ablation (MWA) for thyroid nodules: doctor survey.
/// Four sections plus optional consent. Follow-up text boxes appear for
/// "Other" answers; the procedure count only after a referral or treatment.
pub struct ThyroidMwa;

impl Questionnaire for ThyroidMwa {
    fn id(&self) -> &str {
        "thyroid_mwa"
    }

    fn title(&self) -> &str {
        "Microwave Ablation Therapy for Thyroid - Doctor Survey"
    }

    fn intro(&self) -> &str {
        "Please fill out this survey to help us understand your experience and \
         opinions on MWA for thyroid nodules."
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section {
                    id: "profile".to_string(),
                    title: "A. Respondent Profile".to_string(),
                    questions: vec![
                        choice(Field::Specialty, ControlKind::Select, "Specialty", true),
                        text(Field::SpecialtyOther, "Please specify your specialty"),
                        choice(
                            Field::YearsPractice,
                            ControlKind::Select,
                            "Years of Clinical Practice",
                            true,
                        ),
                        choice(
                            Field::PracticeSetting,
                            ControlKind::Select,
                            "Practice Setting",
                            true,
                        ),
                        choice(
                            Field::ManagedThyroid,
                            ControlKind::Radio,
                            "Have you managed patients with thyroid nodules?",
                            true,
                        ),
                    ],
                },
                Section {
                    id: "awareness".to_string(),
                    title: "B. Awareness & Knowledge".to_string(),
                    questions: vec![
                        choice(
                            Field::FamiliarMwa,
                            ControlKind::Radio,
                            "Are you familiar with Microwave Ablation (MWA) for thyroid nodules?",
                            true,
                        ),
                        choice(
                            Field::LearnMwa,
                            ControlKind::Select,
                            "How did you first learn about MWA?",
                            true,
                        ),
                        text(Field::LearnMwaOther, "Please specify where you learned about MWA"),
                        checkbox(
                            Field::Indications,
                            "In your opinion, what are the indications for MWA in thyroid treatment?",
                        ),
                    ],
                },
                Section {
                    id: "experience".to_string(),
                    title: "C. Experience & Practice".to_string(),
                    questions: vec![
                        choice(
                            Field::CompareMwa,
                            ControlKind::Select,
                            "How would you compare MWA to other thermal ablation techniques (e.g., RFA, laser)?",
                            true,
                        ),
                        text_area(
                            Field::Contraindications,
                            "What are the contraindications or limitations you associate with MWA?",
                        ),
                        choice(
                            Field::ReferredOrTreated,
                            ControlKind::Radio,
                            "Have you personally referred or treated a patient with MWA?",
                            true,
                        ),
                        choice(
                            Field::NumMwa,
                            ControlKind::Select,
                            "If yes, approximately how many thyroid MWA procedures have you been involved in?",
                            true,
                        ),
                        checkbox(
                            Field::Outcomes,
                            "What outcomes have you observed in MWA-treated patients?",
                        ),
                        checkbox(
                            Field::Complications,
                            "Which complications, if any, have you encountered or heard of in MWA?",
                        ),
                        text(Field::ComplicationsOther, "Please specify other complications"),
                    ],
                },
                Section {
                    id: "opinions".to_string(),
                    title: "D. Opinions & Adoption".to_string(),
                    questions: vec![
                        choice(
                            Field::ViableAlt,
                            ControlKind::Select,
                            "Do you consider MWA a viable alternative to surgery for benign thyroid nodules?",
                            true,
                        ),
                        checkbox(
                            Field::Encourage,
                            "What would encourage wider adoption of MWA in your practice or institution?",
                        ),
                        choice(
                            Field::OpenWorkshop,
                            ControlKind::Radio,
                            "Are you open to attending a hands-on MWA workshop or CME session?",
                            true,
                        ),
                        text_area(Field::Comments, "Additional Comments / Suggestions"),
                    ],
                },
                Section {
                    id: "consent".to_string(),
                    title: "Optional: Consent & Contact".to_string(),
                    questions: vec![
                        choice(
                            Field::Consent,
                            ControlKind::Radio,
                            "Would you like to receive updates or invites related to MWA training or research?",
                            false,
                        ),
                        Question {
                            placeholder: Some("Please share your contact/email".to_string()),
                            ..text(Field::Contact, "Contact / email")
                        },
                    ],
                },
            ]
        });
        &SECTIONS
    }
}

fn declared_options(field: Field) -> Vec<String> {
    options::declared(field)
        .unwrap_or_default()
        .iter()
        .map(|o| o.to_string())
        .collect()
}

fn choice(field: Field, control: ControlKind, label: &str, required: bool) -> Question {
    Question {
        field,
        label: label.to_string(),
        control,
        options: declared_options(field),
        required,
        placeholder: None,
    }
}

fn checkbox(field: Field, label: &str) -> Question {
    choice(field, ControlKind::Checkbox, label, false)
}

fn text(field: Field, label: &str) -> Question {
    Question {
        field,
        label: label.to_string(),
        control: ControlKind::Text,
        options: Vec::new(),
        required: false,
        placeholder: Some("Please specify".to_string()),
    }
}

fn text_area(field: Field, label: &str) -> Question {
    Question {
        control: ControlKind::TextArea,
        placeholder: Some("Type here".to_string()),
        ..text(field, label)
    }
}
