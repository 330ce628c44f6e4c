use mwa_core::field::Field;
use mwa_core::form::FormStateManager;
use mwa_core::visibility::{self, Condition};

#[test]
fn unconditional_fields_always_visible() {
    let form = FormStateManager::new();
    for field in [Field::Specialty, Field::Indications, Field::Comments] {
        assert!(visibility::condition_for(field).is_none());
        assert!(visibility::is_visible(field, form.snapshot()));
    }
}

#[test]
fn specialty_other_follows_specialty() {
    let mut form = FormStateManager::new();
    assert!(!visibility::is_visible(Field::SpecialtyOther, form.snapshot()));

    form.set_field(Field::Specialty, "Other").unwrap();
    assert!(visibility::is_visible(Field::SpecialtyOther, form.snapshot()));

    form.set_field(Field::Specialty, "Radiologist").unwrap();
    assert!(!visibility::is_visible(Field::SpecialtyOther, form.snapshot()));
}

#[test]
fn num_mwa_shown_for_either_yes() {
    let mut form = FormStateManager::new();
    for (answer, shown) in [
        ("Yes, I've referred", true),
        ("Yes, I've performed", true),
        ("No, not yet", false),
        ("", false),
    ] {
        form.set_field(Field::ReferredOrTreated, answer).unwrap();
        assert_eq!(
            visibility::is_visible(Field::NumMwa, form.snapshot()),
            shown,
            "referredOrTreated = {answer:?}"
        );
    }
}

#[test]
fn complications_other_follows_checkbox() {
    let mut form = FormStateManager::new();
    form.toggle_list_field(Field::Complications, "Other", true).unwrap();
    assert!(visibility::is_visible(Field::ComplicationsOther, form.snapshot()));

    form.toggle_list_field(Field::Complications, "Other", false).unwrap();
    assert!(!visibility::is_visible(Field::ComplicationsOther, form.snapshot()));
}

#[test]
fn contact_needs_consent() {
    let mut form = FormStateManager::new();
    form.set_field(Field::Consent, "No").unwrap();
    assert!(!visibility::is_visible(Field::Contact, form.snapshot()));
    form.set_field(Field::Consent, "Yes").unwrap();
    assert!(visibility::is_visible(Field::Contact, form.snapshot()));
}

#[test]
fn stale_values_survive_until_pruned() {
    let mut form = FormStateManager::new();
    form.set_field(Field::Specialty, "Other").unwrap();
    form.set_field(Field::SpecialtyOther, "Thyroid surgeon").unwrap();
    form.set_field(Field::Consent, "Yes").unwrap();
    form.set_field(Field::Contact, "dr@example.org").unwrap();

    form.set_field(Field::Specialty, "Endocrinologist").unwrap();
    form.set_field(Field::Consent, "No").unwrap();

    let snap = form.snapshot();
    assert_eq!(snap.specialty_other, "Thyroid surgeon");
    assert_eq!(
        visibility::stale_fields(snap),
        vec![Field::SpecialtyOther, Field::Contact]
    );

    let clean = visibility::pruned(snap);
    assert_eq!(clean.specialty_other, "");
    assert_eq!(clean.contact, "");
    assert_eq!(clean.specialty, "Endocrinologist");
    assert_eq!(clean.consent, "No");
    assert!(visibility::stale_fields(&clean).is_empty());
}

#[test]
fn condition_reports_governing_field() {
    let condition = visibility::condition_for(Field::ComplicationsOther).unwrap();
    assert_eq!(condition.governing_field(), Field::Complications);
    assert!(matches!(condition, Condition::Contains { .. }));
}
