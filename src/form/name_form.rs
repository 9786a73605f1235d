use std::sync::LazyLock;

use regex::Regex;

use super::{Field, FormDefinition, FormErrors, FormHandler};
use crate::models::{Submission, ValidationError};
use crate::services::{Logger, Notifier};

pub const FORM_ID: &str = "assignment_form";

/// Log channel name submissions are recorded under.
pub const LOG_CHANNEL: &str = "assignment";

/// Whole-string match of ASCII letters and ASCII whitespace.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^[a-zA-Z\s]+$").expect("Invalid name regex"));

/// The name form.
///
/// Built per request with the notifier and logger it reports to. Holds no
/// state of its own.
pub struct AssignmentForm<'a> {
    notifier: &'a dyn Notifier,
    logger: &'a dyn Logger,
}

impl<'a> AssignmentForm<'a> {
    pub fn new(notifier: &'a dyn Notifier, logger: &'a dyn Logger) -> Self {
        Self { notifier, logger }
    }

    /// Accept non-empty names made only of ASCII letters and whitespace.
    ///
    /// A name of only whitespace is accepted.
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        validate_name(name)
    }

    /// Show the name to the user, then log it. Call only after [`Self::validate`].
    pub fn submit(&self, name: &str) {
        let message = format!("Name: {}", name);
        self.notifier.add_status(&message);
        self.logger.info(LOG_CHANNEL, &message);
    }
}

/// Free-standing form of [`AssignmentForm::validate`]; needs no services.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// Structure of the name form, independent of any services.
pub fn name_form_definition() -> FormDefinition {
    FormDefinition {
        id: FORM_ID.to_string(),
        fields: vec![Field::textfield("name", "Name").required(), Field::submit("Submit")],
    }
}

impl FormHandler for AssignmentForm<'_> {
    type Input = Submission;

    fn form_id(&self) -> &'static str {
        FORM_ID
    }

    fn build(&self) -> FormDefinition {
        name_form_definition()
    }

    fn validate_form(&self, input: &Submission, errors: &mut FormErrors) {
        if let Err(e) = self.validate(&input.name) {
            errors.set_error_by_name(e.field(), e.to_string());
        }
    }

    fn submit_form(&self, input: &Submission) {
        self.submit(&input.name);
    }
}
