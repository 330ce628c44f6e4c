//! Replays a short scripted session and prints what would be submitted.
//!
//! Usage:
//!   cargo run -p mwa-survey --example scenario

use mwa_core::field::Field;
use mwa_core::form::FormStateManager;
use mwa_core::visibility;
use mwa_questionnaire::Questionnaire;
use mwa_questionnaire::surveys::thyroid_mwa::ThyroidMwa;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let mut form = FormStateManager::new();
    form.set_field(Field::Specialty, "Other")?;
    form.set_field(Field::SpecialtyOther, "Thyroid surgeon")?;
    form.toggle_list_field(Field::Indications, "Cosmetic concerns", true)?;
    form.toggle_list_field(Field::Indications, "Not sure", true)?;
    form.toggle_list_field(Field::Indications, "Cosmetic concerns", false)?;

    println!("{}", mwa_export::json::to_alert_json(form.snapshot())?);
    println!();

    let errors = ThyroidMwa.validate_response(form.snapshot());
    println!("{} required answer(s) still missing:", errors.len());
    for error in &errors {
        println!("  - {error}");
    }

    form.set_field(Field::Specialty, "Endocrinologist")?;
    println!();
    println!(
        "after changing specialty, hidden but filled: {:?}",
        visibility::stale_fields(form.snapshot())
    );

    Ok(())
}
