//! Portfolio site components, rendered headless: a contact form that posts
//! to the web3forms relay, and an expandable resume card with a one-shot
//! entrance animation.

pub mod card;
pub mod config;
pub mod contact;
pub mod errors;
pub mod relay;
pub mod telemetry;

pub use card::{Activation, ResumeCard, ResumeCardProps, ScrollViewport, VisibilityObserver};
pub use config::Config;
pub use contact::{ContactForm, Field, FormState, SubmitStatus, ValidationErrors};
pub use errors::ContactError;
pub use relay::{Relay, RelayClient};
