use tracing::{debug, error, info, warn};

use crate::contact::form::{Field, FormState};
use crate::contact::status::SubmitStatus;
use crate::contact::validation::{validate, ValidationErrors};
use crate::errors::ContactError;
use crate::relay::Relay;

/// Result of delivering one submission: `Ok` only when the relay confirmed it.
pub type SubmitOutcome = Result<(), ContactError>;

/// What happened when the submit control was activated.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Validation failed; errors are stored on the form and nothing was sent.
    Invalid,
    /// A submission is already in flight; the control is disabled.
    Busy,
    /// The form was valid. Drive the pending submission, then hand its
    /// outcome back to [`ContactForm::finish_submit`].
    Started(PendingSubmission),
}

/// A snapshot of the form taken when the submit began. Owns its data so the
/// form stays editable while the request is pending.
#[derive(Debug)]
pub struct PendingSubmission {
    form: FormState,
}

impl PendingSubmission {
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Sends the snapshot once. Dropping this future before it resolves
    /// aborts nothing on the relay side and leaves the form in flight.
    pub async fn send<R>(self, relay: &R) -> SubmitOutcome
    where
        R: Relay + ?Sized,
    {
        debug!("Sending contact submission to relay");
        let response = relay.submit(&self.form).await?;
        if response.success {
            Ok(())
        } else {
            Err(ContactError::Rejected {
                message: response.message,
            })
        }
    }
}

/// Headless contact form: three text fields, per-field errors, an in-flight
/// flag and the summary status line.
#[derive(Debug, Default)]
pub struct ContactForm {
    form: FormState,
    errors: ValidationErrors,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    /// Validates the current field values without touching stored errors.
    pub fn validate(&self) -> ValidationErrors {
        validate(&self.form)
    }

    /// Keystroke handler. Clears only the edited field's error; the other
    /// fields are not re-validated.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear_field(field);
    }

    /// Same as [`on_field_change`](Self::on_field_change) but keyed by the
    /// input's `name` attribute. Returns false for unknown inputs.
    pub fn on_input_event(&mut self, input_name: &str, value: impl Into<String>) -> bool {
        match Field::parse(input_name) {
            Some(field) => {
                self.on_field_change(field, value);
                true
            }
            None => {
                warn!("Ignoring change event for unknown input '{input_name}'");
                false
            }
        }
    }

    /// First half of a submit: validate, then mark the form in flight and
    /// clear the previous status.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.submitting {
            debug!("Submit ignored: a submission is already in flight");
            return SubmitAttempt::Busy;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.fields().map(Field::as_str).collect();
            info!("Contact form rejected by validation: {}", fields.join(", "));
            self.apply_error(ContactError::Validation(errors));
            return SubmitAttempt::Invalid;
        }

        self.submitting = true;
        self.status = None;
        info!("Contact submission started");

        SubmitAttempt::Started(PendingSubmission {
            form: self.form.clone(),
        })
    }

    /// Second half of a submit. Always leaves the form out of flight.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            Ok(()) => {
                info!("Contact submission delivered");
                self.status = Some(SubmitStatus::sent());
                self.form.clear();
            }
            Err(e) => self.apply_error(e),
        }
        self.submitting = false;
    }

    /// Validation errors go next to their fields and leave the status line
    /// alone; everything else replaces the status line.
    fn apply_error(&mut self, error: ContactError) {
        match &error {
            ContactError::Validation(_) => {}
            ContactError::Rejected { .. } => warn!("{error}"),
            ContactError::Transport(_) => error!("{error}"),
        }
        match error {
            ContactError::Validation(errors) => self.errors = errors,
            other => self.status = other.status(),
        }
    }

    /// Full submit for callers that do not need to edit while the request
    /// is pending.
    pub async fn on_submit<R>(&mut self, relay: &R)
    where
        R: Relay + ?Sized,
    {
        if let SubmitAttempt::Started(pending) = self.begin_submit() {
            let outcome = pending.send(relay).await;
            self.finish_submit(outcome);
        }
    }
}
