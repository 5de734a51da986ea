// Contact form: field state, validation, submit lifecycle and view model.
// All network I/O goes through crate::relay; nothing here builds requests.

pub mod component;
pub mod form;
pub mod status;
pub mod validation;
pub mod view;

pub use component::{ContactForm, PendingSubmission, SubmitAttempt, SubmitOutcome};
pub use form::{Field, FormState};
pub use status::{StatusTone, SubmitStatus};
pub use validation::{validate, ValidationErrors};
pub use view::ContactView;
