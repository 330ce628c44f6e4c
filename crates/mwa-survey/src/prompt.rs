//! Terminal presentation of a questionnaire.
//!
//! [`run_form`] walks the questions in order and asks a [`Presenter`] for each
//! visible one. Visibility is re-read from the snapshot before every question,
//! so a follow-up appears as soon as its governing answer is given.
//!
//! Headings and prompts go to stderr. Stdout carries only the submitted
//! output, so `mwa-survey fill > out.json` stays machine-readable.

use std::io::{self, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use mwa_core::form::FormStateManager;
use mwa_core::models::response::FieldValue;
use mwa_core::visibility;
use mwa_questionnaire::Questionnaire;
use mwa_questionnaire::definition::{ControlKind, Question, Section};

/// What the user did with one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// New value for a scalar field.
    Value(String),
    /// Full set of checked options for a checkbox group.
    Checked(Vec<String>),
    /// Leave the current value as it is.
    Keep,
}

/// Interaction surface used by [`run_form`].
pub trait Presenter {
    fn begin(&mut self, _title: &str, _intro: &str) -> eyre::Result<()> {
        Ok(())
    }

    fn section(&mut self, _section: &Section) -> eyre::Result<()> {
        Ok(())
    }

    fn ask(&mut self, question: &Question, current: FieldValue<'_>) -> eyre::Result<Answer>;
}

/// Ask every visible question of `questionnaire` and apply the answers to `form`.
pub fn run_form(
    questionnaire: &dyn Questionnaire,
    presenter: &mut dyn Presenter,
    form: &mut FormStateManager,
) -> eyre::Result<()> {
    presenter.begin(questionnaire.title(), questionnaire.intro())?;
    for section in questionnaire.sections() {
        presenter.section(section)?;
        for question in &section.questions {
            if !visibility::is_visible(question.field, form.snapshot()) {
                tracing::debug!(field = %question.field, "hidden, skipped");
                continue;
            }
            let answer = presenter.ask(question, form.snapshot().get(question.field))?;
            apply_answer(form, question, answer)?;
        }
    }
    Ok(())
}

/// Translate an answer into the same updates the form's inputs would emit.
/// Checkbox answers become one toggle per option whose state changed.
pub fn apply_answer(
    form: &mut FormStateManager,
    question: &Question,
    answer: Answer,
) -> eyre::Result<()> {
    match answer {
        Answer::Keep => {}
        Answer::Value(value) => form.set_field(question.field, value)?,
        Answer::Checked(checked) => {
            let previously: Vec<String> = form
                .snapshot()
                .list(question.field)
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            for option in &question.options {
                let was = previously.contains(option);
                let now = checked.contains(option);
                if was != now {
                    form.toggle_list_field(question.field, option, now)?;
                }
            }
        }
    }
    Ok(())
}

/// Label offered for an optional single choice to leave it unanswered.
pub const SKIP_LABEL: &str = "(skip)";

/// Placeholder preselected for a required single choice with no valid answer
/// yet. Picking it asks the question again.
pub const SELECT_LABEL: &str = "(select)";

/// Items and preselected index for a single-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePrompt<'a> {
    pub items: Vec<&'a str>,
    pub default: usize,
}

/// Lay out the items for a select or radio question.
///
/// The current answer is preselected when it is one of the options. Otherwise
/// an optional question defaults to [`SKIP_LABEL`] and a required one to
/// [`SELECT_LABEL`], so accepting the default never records an answer the
/// user did not pick.
pub fn choice_prompt<'a>(question: &'a Question, current: &str) -> ChoicePrompt<'a> {
    let mut items: Vec<&str> = question.options.iter().map(String::as_str).collect();
    let answered = items.contains(&current);
    if question.required && !answered {
        items.insert(0, SELECT_LABEL);
    }
    if !question.required {
        items.push(SKIP_LABEL);
    }
    let default = match items.iter().position(|o| *o == current) {
        Some(index) if answered => index,
        _ if question.required => 0,
        _ => items.len() - 1,
    };
    ChoicePrompt { items, default }
}

/// Map a picked index back to an answer. `None` means the placeholder was
/// picked and the question must be asked again.
pub fn choice_answer(prompt: &ChoicePrompt<'_>, picked: usize) -> Option<Answer> {
    match prompt.items.get(picked).copied()? {
        SELECT_LABEL => None,
        SKIP_LABEL => Some(Answer::Value(String::new())),
        option => Some(Answer::Value(option.to_string())),
    }
}

/// Default interactive implementation backed by `dialoguer`.
///
/// Headings go to `out`, which is stderr unless built with
/// [`DialoguerPresenter::with_output`].
pub struct DialoguerPresenter<W: Write = io::Stderr> {
    theme: ColorfulTheme,
    out: W,
}

impl Default for DialoguerPresenter {
    fn default() -> Self {
        Self::with_output(io::stderr())
    }
}

impl<W: Write> DialoguerPresenter<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn label(question: &Question) -> String {
        if question.required {
            format!("{} *", question.label)
        } else {
            question.label.clone()
        }
    }

    fn ask_choice(&mut self, question: &Question, current: &str) -> eyre::Result<Answer> {
        let prompt = choice_prompt(question, current);
        loop {
            let picked = Select::with_theme(&self.theme)
                .with_prompt(Self::label(question))
                .items(&prompt.items)
                .default(prompt.default)
                .interact()?;

            match choice_answer(&prompt, picked) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.out, "{}: an answer is required", question.label)?,
            }
        }
    }

    fn ask_checkboxes(&self, question: &Question, current: &[String]) -> eyre::Result<Answer> {
        let defaults: Vec<bool> = question
            .options
            .iter()
            .map(|o| current.contains(o))
            .collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(Self::label(question))
            .items(&question.options)
            .defaults(&defaults)
            .interact()?;

        Ok(Answer::Checked(
            picked
                .into_iter()
                .map(|i| question.options[i].clone())
                .collect(),
        ))
    }

    fn ask_text(&self, question: &Question, current: &str) -> eyre::Result<Answer> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(Self::label(question))
            .allow_empty(true);
        if !current.is_empty() {
            input = input.with_initial_text(current);
        } else if let Some(placeholder) = &question.placeholder {
            input = input.with_prompt(format!("{} ({placeholder})", Self::label(question)));
        }
        let text = input.interact_text()?;
        Ok(Answer::Value(text))
    }
}

impl<W: Write> Presenter for DialoguerPresenter<W> {
    fn begin(&mut self, title: &str, intro: &str) -> eyre::Result<()> {
        writeln!(self.out, "{title}\n{intro}\n")?;
        Ok(())
    }

    fn section(&mut self, section: &Section) -> eyre::Result<()> {
        writeln!(self.out, "\n{}", section.title)?;
        Ok(())
    }

    fn ask(&mut self, question: &Question, current: FieldValue<'_>) -> eyre::Result<Answer> {
        match (question.control, current) {
            (ControlKind::Checkbox, FieldValue::Choices(checked)) => {
                self.ask_checkboxes(question, checked)
            }
            (ControlKind::Select | ControlKind::Radio, FieldValue::Text(value)) => {
                self.ask_choice(question, value)
            }
            (ControlKind::Text | ControlKind::TextArea, FieldValue::Text(value)) => {
                self.ask_text(question, value)
            }
            (control, _) => Err(eyre::eyre!(
                "{:?} control cannot edit field {}",
                control,
                question.field
            )),
        }
    }
}
