use mwa_core::field::Field;
use mwa_core::form::FormStateManager;
use mwa_questionnaire::definition::{ControlKind, ValidationKind};
use mwa_questionnaire::{Questionnaire, all_questionnaires, get_questionnaire};

fn survey() -> Box<dyn Questionnaire> {
    get_questionnaire("thyroid_mwa").expect("thyroid_mwa is registered")
}

/// A form with every always-visible required question answered.
fn completed_form() -> FormStateManager {
    let mut form = FormStateManager::new();
    for (field, value) in [
        (Field::Specialty, "Endocrinologist"),
        (Field::YearsPractice, "10-20 years"),
        (Field::PracticeSetting, "Academic Institution"),
        (Field::ManagedThyroid, "Yes"),
        (Field::FamiliarMwa, "Yes"),
        (Field::LearnMwa, "Conference"),
        (Field::CompareMwa, "Equally effective"),
        (Field::ReferredOrTreated, "No, not yet"),
        (Field::ViableAlt, "Agree"),
        (Field::OpenWorkshop, "Maybe"),
    ] {
        form.set_field(field, value).unwrap();
    }
    form
}

fn missing(errors: &[mwa_questionnaire::definition::ValidationError]) -> Vec<Field> {
    errors
        .iter()
        .filter(|e| e.kind == ValidationKind::MissingRequired)
        .map(|e| e.field)
        .collect()
}

#[test]
fn registry_lookup() {
    assert_eq!(all_questionnaires().len(), 1);
    assert!(get_questionnaire("srs2").is_none());
    assert_eq!(survey().id(), "thyroid_mwa");
}

#[test]
fn every_field_has_exactly_one_question() {
    let survey = survey();
    let questions = survey.questions();
    assert_eq!(questions.len(), Field::ALL.len());
    for field in Field::ALL {
        assert_eq!(
            questions.iter().filter(|q| q.field == field).count(),
            1,
            "{field}"
        );
    }
}

#[test]
fn questions_follow_field_order() {
    let fields: Vec<Field> = survey().questions().iter().map(|q| q.field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
}

#[test]
fn checkbox_questions_are_list_fields() {
    for q in survey().questions() {
        assert_eq!(q.control == ControlKind::Checkbox, q.field.is_list(), "{}", q.field);
        if q.control.is_choice() || q.control == ControlKind::Checkbox {
            assert!(!q.options.is_empty(), "{} has no options", q.field);
        }
    }
}

#[test]
fn empty_form_reports_always_visible_required_questions() {
    let form = FormStateManager::new();
    let errors = survey().validate_response(form.snapshot());
    assert_eq!(
        missing(&errors),
        vec![
            Field::Specialty,
            Field::YearsPractice,
            Field::PracticeSetting,
            Field::ManagedThyroid,
            Field::FamiliarMwa,
            Field::LearnMwa,
            Field::CompareMwa,
            Field::ReferredOrTreated,
            Field::ViableAlt,
            Field::OpenWorkshop,
        ]
    );
}

#[test]
fn completed_form_is_valid() {
    let form = completed_form();
    assert!(survey().validate_response(form.snapshot()).is_empty());
}

#[test]
fn num_mwa_required_only_when_shown() {
    let mut form = completed_form();
    form.set_field(Field::ReferredOrTreated, "Yes, I've performed").unwrap();
    let errors = survey().validate_response(form.snapshot());
    assert_eq!(missing(&errors), vec![Field::NumMwa]);

    form.set_field(Field::NumMwa, "6-10").unwrap();
    assert!(survey().validate_response(form.snapshot()).is_empty());
}

#[test]
fn hidden_stale_answer_is_not_validated() {
    let mut form = completed_form();
    form.set_field(Field::ReferredOrTreated, "Yes, I've referred").unwrap();
    form.set_field(Field::NumMwa, "not a range").unwrap();
    assert_eq!(survey().validate_response(form.snapshot()).len(), 1);

    form.set_field(Field::ReferredOrTreated, "No, not yet").unwrap();
    assert!(survey().validate_response(form.snapshot()).is_empty());
}

#[test]
fn choice_outside_options_is_reported() {
    let mut form = completed_form();
    form.set_field(Field::YearsPractice, "forever").unwrap();
    let errors = survey().validate_response(form.snapshot());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::YearsPractice);
    assert_eq!(errors[0].kind, ValidationKind::InvalidOption);
    assert!(errors[0].message.contains("forever"));
}

#[test]
fn optional_free_text_never_required() {
    let form = completed_form();
    let errors = survey().validate_response(form.snapshot());
    for field in [
        Field::Contraindications,
        Field::Comments,
        Field::Consent,
        Field::Indications,
    ] {
        assert!(errors.iter().all(|e| e.field != field));
    }
}

#[test]
fn structured_input_lists_visible_answers_by_section() {
    let mut form = completed_form();
    form.toggle_list_field(Field::Indications, "Benign thyroid nodules", true).unwrap();
    form.toggle_list_field(Field::Indications, "Not sure", true).unwrap();
    form.set_field(Field::SpecialtyOther, "stale").unwrap();

    let text = survey().to_structured_input(form.snapshot());
    assert!(text.starts_with("## Microwave Ablation Therapy for Thyroid - Doctor Survey\n"));
    assert!(text.contains("### A. Respondent Profile\n- Specialty: Endocrinologist\n"));
    assert!(text.contains(": Benign thyroid nodules, Not sure\n"));
    assert!(!text.contains("stale"));
    assert!(!text.contains("Optional: Consent & Contact"));
}
