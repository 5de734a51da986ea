use thiserror::Error;

use crate::contact::status::{SubmitStatus, REJECTED_MESSAGE, TRANSPORT_FAILED_MESSAGE};
use crate::contact::ValidationErrors;
use crate::relay::RelayError;

/// Everything that can go wrong on the contact form.
/// None of it is fatal: each variant ends up either as inline field
/// messages or as the one summary status line.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),

    #[error("Relay rejected submission: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("Relay transport error: {0}")]
    Transport(#[from] RelayError),
}

impl ContactError {
    /// Summary status shown to the user. Validation failures have none:
    /// they are rendered next to each field instead.
    pub fn status(&self) -> Option<SubmitStatus> {
        match self {
            ContactError::Validation(_) => None,
            ContactError::Rejected { .. } => Some(SubmitStatus::failure(REJECTED_MESSAGE)),
            ContactError::Transport(_) => Some(SubmitStatus::failure(TRANSPORT_FAILED_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::status::StatusTone;
    use crate::contact::Field;

    #[test]
    fn test_validation_has_no_summary_status() {
        let mut errors = ValidationErrors::default();
        errors.insert(Field::Name, "Name is required");
        assert_eq!(ContactError::Validation(errors).status(), None);
    }

    #[test]
    fn test_rejection_maps_to_failure_status() {
        let status = ContactError::Rejected { message: None }.status().unwrap();
        assert_eq!(status.text, REJECTED_MESSAGE);
        assert_eq!(status.tone, StatusTone::Failure);
    }

    #[test]
    fn test_parse_error_maps_to_transport_status() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let status = ContactError::from(RelayError::Parse(parse)).status().unwrap();
        assert_eq!(status.text, TRANSPORT_FAILED_MESSAGE);
        assert!(!status.is_success());
    }

    #[test]
    fn test_status_is_repeatable() {
        let err = ContactError::Rejected { message: None };
        assert_eq!(err.status(), err.status());
    }

    #[test]
    fn test_display_mentions_rejection_reason() {
        let err = ContactError::Rejected {
            message: Some("Invalid access key".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Relay rejected submission: Invalid access key"
        );
    }
}
