use mwa_core::error::CoreError;
use mwa_core::field::Field;
use mwa_core::form::{FormEvent, FormStateManager};
use mwa_core::models::response::SurveyResponse;

#[test]
fn new_form_is_empty() {
    let form = FormStateManager::new();
    assert_eq!(form.snapshot(), &SurveyResponse::default());
    assert!(Field::ALL.iter().all(|&f| !form.snapshot().is_answered(f)));
}

#[test]
fn specialty_other_scenario() {
    let mut form = FormStateManager::new();
    form.set_field(Field::Specialty, "Other").unwrap();
    form.set_field(Field::SpecialtyOther, "Thyroid surgeon").unwrap();
    form.toggle_list_field(Field::Indications, "Cosmetic concerns", true).unwrap();
    form.toggle_list_field(Field::Indications, "Not sure", true).unwrap();
    form.toggle_list_field(Field::Indications, "Cosmetic concerns", false).unwrap();

    let snap = form.snapshot();
    assert_eq!(snap.indications, vec!["Not sure".to_string()]);
    assert_eq!(snap.specialty, "Other");
    assert_eq!(snap.specialty_other, "Thyroid surgeon");
}

#[test]
fn set_field_touches_only_its_field() {
    let mut form = FormStateManager::new();
    form.toggle_list_field(Field::Outcomes, "Symptom relief", true).unwrap();
    form.set_field(Field::Comments, "none").unwrap();

    for field in Field::ALL.into_iter().filter(|f| !f.is_list()) {
        let before = form.snapshot().clone();
        form.set_field(field, "changed").unwrap();
        let after = form.snapshot();

        for other in Field::ALL.into_iter().filter(|&f| f != field) {
            assert_eq!(before.get(other), after.get(other), "{field} changed {other}");
        }
        assert_eq!(after.scalar(field), Some("changed"));
    }
}

#[test]
fn toggle_keeps_insertion_order_without_duplicates() {
    let mut form = FormStateManager::new();
    for value in ["Infection", "Voice change", "Infection", "Other"] {
        form.toggle_list_field(Field::Complications, value, true).unwrap();
    }
    assert_eq!(
        form.snapshot().complications,
        vec!["Infection", "Voice change", "Other"]
    );
}

#[test]
fn toggle_matches_last_state_of_each_option() {
    let mut form = FormStateManager::new();
    let events = [
        ("Patient demand", true),
        ("Cost-effectiveness", true),
        ("Patient demand", false),
        ("Training/workshops", true),
        ("Patient demand", true),
        ("Cost-effectiveness", false),
        ("Cost-effectiveness", false),
    ];
    for (value, included) in events {
        form.toggle_list_field(Field::Encourage, value, included).unwrap();
    }
    assert_eq!(
        form.snapshot().encourage,
        vec!["Training/workshops", "Patient demand"]
    );
}

#[test]
fn toggle_leaves_other_fields_untouched() {
    let mut form = FormStateManager::new();
    form.set_field(Field::Specialty, "Radiologist").unwrap();
    form.toggle_list_field(Field::Outcomes, "Recurrence", true).unwrap();
    let before = form.snapshot().clone();

    form.toggle_list_field(Field::Indications, "Not sure", true).unwrap();

    let after = form.snapshot();
    assert_eq!(after.specialty, before.specialty);
    assert_eq!(after.outcomes, before.outcomes);
    assert_eq!(after.indications, vec!["Not sure"]);
}

#[test]
fn unchecking_absent_value_is_noop() {
    let mut form = FormStateManager::new();
    form.toggle_list_field(Field::Indications, "Not sure", false).unwrap();
    assert!(form.snapshot().indications.is_empty());
}

#[test]
fn toggle_rejects_undeclared_option() {
    let mut form = FormStateManager::new();
    let err = form.toggle_list_field(Field::Indications, "Hypothyroidism", true).unwrap_err();
    assert!(matches!(err, CoreError::UndeclaredOption { field: "indications", .. }));
    assert!(form.snapshot().indications.is_empty());
}

#[test]
fn wrong_kind_is_rejected() {
    let mut form = FormStateManager::new();
    assert!(matches!(
        form.set_field(Field::Outcomes, "Recurrence"),
        Err(CoreError::NotScalar("outcomes"))
    ));
    assert!(matches!(
        form.toggle_list_field(Field::Specialty, "Other", true),
        Err(CoreError::NotList("specialty"))
    ));
}

#[test]
fn set_field_does_not_validate_options() {
    let mut form = FormStateManager::new();
    form.set_field(Field::YearsPractice, "forever").unwrap();
    assert_eq!(form.snapshot().years_practice, "forever");
}

#[test]
fn apply_routes_by_checked_flag() {
    let mut form = FormStateManager::new();
    form.apply(&FormEvent::change("learnMWA", "Conference")).unwrap();
    form.apply(&FormEvent::checkbox("outcomes", "Symptom relief", true)).unwrap();
    form.apply(&FormEvent::checkbox("outcomes", "Recurrence", true)).unwrap();
    form.apply(&FormEvent::checkbox("outcomes", "Symptom relief", false)).unwrap();

    assert_eq!(form.snapshot().learn_mwa, "Conference");
    assert_eq!(form.snapshot().outcomes, vec!["Recurrence"]);
}

#[test]
fn apply_rejects_unknown_name() {
    let mut form = FormStateManager::new();
    let err = form.apply(&FormEvent::change("favouriteColour", "blue")).unwrap_err();
    assert!(matches!(err, CoreError::UnknownField(name) if name == "favouriteColour"));
}

#[test]
fn reset_clears_everything() {
    let mut form = FormStateManager::new();
    form.set_field(Field::Consent, "Yes").unwrap();
    form.toggle_list_field(Field::Encourage, "Patient demand", true).unwrap();
    form.reset();
    assert_eq!(form.snapshot(), &SurveyResponse::default());
}

#[test]
fn field_names_round_trip() {
    for field in Field::ALL {
        assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
    }
    assert!("familiarMwa".parse::<Field>().is_err());
}

#[test]
fn response_json_uses_form_keys() {
    let mut form = FormStateManager::new();
    form.set_field(Field::FamiliarMwa, "Yes").unwrap();
    form.toggle_list_field(Field::Indications, "Not sure", true).unwrap();

    let json = serde_json::to_value(form.snapshot()).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    let expected: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(keys.len(), expected.len());
    for key in &expected {
        assert!(keys.contains(key), "missing key {key}");
    }
    assert_eq!(json["familiarMWA"], "Yes");
    assert_eq!(json["indications"], serde_json::json!(["Not sure"]));
    assert_eq!(json["numMWA"], "");
}

#[test]
fn response_deserializes_partial_json() {
    let response: SurveyResponse =
        serde_json::from_str(r#"{ "specialty": "Radiologist", "outcomes": ["Recurrence"] }"#)
            .unwrap();
    assert_eq!(response.specialty, "Radiologist");
    assert_eq!(response.outcomes, vec!["Recurrence"]);
    assert_eq!(response.contact, "");
}
