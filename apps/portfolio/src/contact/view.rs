use serde::Serialize;

use crate::contact::component::ContactForm;
use crate::contact::form::Field;
use crate::contact::status::SubmitStatus;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const MESSAGE_ROWS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum InputKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub value: String,
    pub error: Option<String>,
    /// Drawn with the error border.
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

/// Everything a renderer needs to draw the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub fields: Vec<FieldView>,
    pub submit: SubmitButtonView,
    pub status: Option<SubmitStatus>,
}

fn input_kind(field: Field) -> InputKind {
    match field {
        Field::Name => InputKind::Text,
        Field::Email => InputKind::Email,
        Field::Message => InputKind::TextArea { rows: MESSAGE_ROWS },
    }
}

impl ContactForm {
    pub fn view(&self) -> ContactView {
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let error = self.errors().get(field).map(str::to_string);
                FieldView {
                    field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    kind: input_kind(field),
                    value: self.form().get(field).to_string(),
                    invalid: error.is_some(),
                    error,
                }
            })
            .collect();

        let submitting = self.is_submitting();

        ContactView {
            fields,
            submit: SubmitButtonView {
                label: if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL },
                disabled: submitting,
            },
            status: self.status().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::component::SubmitAttempt;
    use crate::contact::status::StatusTone;
    use crate::errors::ContactError;

    #[test]
    fn test_idle_view() {
        let view = ContactForm::new().view();
        assert_eq!(view.fields.len(), 3);
        assert_eq!(view.fields[0].label, "Name");
        assert_eq!(view.fields[1].kind, InputKind::Email);
        assert_eq!(view.fields[2].kind, InputKind::TextArea { rows: 5 });
        assert_eq!(view.fields[2].placeholder, "Your message");
        assert!(view.fields.iter().all(|f| !f.invalid && f.error.is_none()));
        assert_eq!(view.submit.label, SUBMIT_LABEL);
        assert!(!view.submit.disabled);
        assert!(view.status.is_none());
    }

    #[test]
    fn test_invalid_fields_are_flagged() {
        let mut c = ContactForm::new();
        c.on_field_change(Field::Name, "Ada");
        let _ = c.begin_submit();

        let view = c.view();
        assert!(!view.fields[0].invalid);
        assert!(view.fields[1].invalid);
        assert_eq!(view.fields[1].error.as_deref(), Some("Email is required"));
        assert!(view.fields[2].invalid);
    }

    #[test]
    fn test_submit_disabled_while_sending() {
        let mut c = ContactForm::new();
        c.on_field_change(Field::Name, "Ada");
        c.on_field_change(Field::Email, "ada@example.com");
        c.on_field_change(Field::Message, "Hi");
        assert!(matches!(c.begin_submit(), SubmitAttempt::Started(_)));

        let view = c.view();
        assert_eq!(view.submit.label, SUBMITTING_LABEL);
        assert!(view.submit.disabled);
    }

    #[test]
    fn test_status_tone_in_view() {
        let mut c = ContactForm::new();
        c.finish_submit(Err(ContactError::Rejected { message: None }));
        assert_eq!(c.view().status.unwrap().tone, StatusTone::Failure);

        c.finish_submit(Ok(()));
        assert_eq!(c.view().status.unwrap().tone, StatusTone::Success);
    }
}
