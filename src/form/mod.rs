//! Form definitions and the validate-then-submit pipeline.
//!
//! A [`FormHandler`] describes the form it renders and decides what happens
//! to a submission. [`process`] is the only place submissions enter a
//! handler: it always validates first and only calls submit when no field
//! error was recorded.

mod name_form;
pub mod render;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use name_form::*;

/// The kind of element a form field renders as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Textfield,
    Submit,
}

/// One element of a form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    /// Machine name, used as the HTML `name` attribute and error key.
    pub name: String,
    /// Label for text fields, button text for submit buttons.
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl Field {
    pub fn textfield(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Textfield,
            required: false,
        }
    }

    pub fn submit(label: &str) -> Self {
        Self {
            name: "submit".to_string(),
            label: label.to_string(),
            kind: FieldKind::Submit,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Structure of a form, as built by its handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormDefinition {
    pub id: String,
    pub fields: Vec<Field>,
}

impl FormDefinition {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field-level errors collected during validation, keyed by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// Attach `message` to `field`. The first error set on a field wins.
    pub fn set_error_by_name(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// A form that can be rendered, validated and submitted.
pub trait FormHandler {
    type Input;

    fn form_id(&self) -> &'static str;

    fn build(&self) -> FormDefinition;

    /// Record an error for every invalid field. Must not cause side effects.
    fn validate_form(&self, input: &Self::Input, errors: &mut FormErrors);

    /// Act on a submission that passed validation.
    fn submit_form(&self, input: &Self::Input);
}

/// Validate `input` and, when it has no errors, submit it.
pub fn process<H: FormHandler>(handler: &H, input: &H::Input) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    handler.validate_form(input, &mut errors);

    if !errors.is_empty() {
        tracing::debug!(form_id = handler.form_id(), "Rejected submission: {}", errors);
        return Err(errors);
    }

    handler.submit_form(input);
    Ok(())
}
