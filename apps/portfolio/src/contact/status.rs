use serde::Serialize;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const TRANSPORT_FAILED_MESSAGE: &str = "An error occurred. Please try again later.";

/// How a status line should be coloured: green for success, red otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Failure,
}

/// The single summary line shown under the form after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitStatus {
    pub text: String,
    pub tone: StatusTone,
}

impl SubmitStatus {
    pub fn sent() -> Self {
        Self {
            text: SENT_MESSAGE.to_string(),
            tone: StatusTone::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.tone == StatusTone::Success
    }
}
