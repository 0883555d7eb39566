//! Form Module - Contact form validation and submission
//!
//! - **Contact** - Field constraints, trimming, per-field errors
//! - **Submit** - Pluggable submission service, phase state machine

pub mod contact;
pub mod submit;

pub use contact::{validate, ContactDraft, ContactSubmission, Field, FieldError};
pub use submit::{ContactFormState, SimulatedSubmission, SubmissionService, SubmitPhase};
