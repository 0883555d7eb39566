//! Submission Service - Pluggable fire-and-forget form delivery
//!
//! The submission path is an external collaborator behind a trait, so a
//! real backend can be substituted without touching validation. The
//! built-in [`SimulatedSubmission`] stands in for the network: a fixed
//! artificial delay, then completion, no persisted result.
//!
//! [`ContactFormState`] glues the pieces together the way the page did:
//! editing a field clears that field's error, submitting validates first
//! and never calls the service on invalid input, and the phase signal
//! walks Idle -> Submitting -> Submitted. Completion crosses threads as
//! an atomic and is folded into the signal by [`ContactFormState::sync`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use spark_signals::{signal, Signal};

use super::contact::{validate, ContactDraft, ContactSubmission, Field, FieldError};

// =============================================================================
// SUBMISSION SERVICE
// =============================================================================

/// Fire-and-forget delivery of a validated submission.
///
/// `on_complete` is invoked (possibly from another thread) when the
/// delivery finishes. Implementations receive only validated input.
pub trait SubmissionService {
    fn submit(&self, submission: ContactSubmission, on_complete: Box<dyn FnOnce() + Send>);
}

/// Default artificial delay, matching the original's simulated call.
pub const SIMULATED_DELAY_MS: u64 = 1500;

/// Simulated backend: sleeps a fixed delay on a background thread, then
/// completes. Drops the submission - there is nothing to persist.
pub struct SimulatedSubmission {
    pub delay: Duration,
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(SIMULATED_DELAY_MS),
        }
    }
}

impl SubmissionService for SimulatedSubmission {
    fn submit(&self, _submission: ContactSubmission, on_complete: Box<dyn FnOnce() + Send>) {
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            on_complete();
        });
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Submission lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted,
}

/// Component state for the contact form: draft fields, per-field
/// errors, and the submission phase.
pub struct ContactFormState {
    draft: ContactDraft,
    errors: Vec<FieldError>,
    phase: Signal<SubmitPhase>,
    completed: Arc<AtomicBool>,
}

impl ContactFormState {
    /// An empty Idle form.
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: Vec::new(),
            phase: signal(SubmitPhase::Idle),
            completed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current draft values.
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Update a field. Clears that field's error - the user is fixing it.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Company => &mut self.draft.company,
            Field::Phone => &mut self.draft.phone,
            Field::Message => &mut self.draft.message,
        };
        *slot = value.to_string();
        self.errors.retain(|e| e.field != field);
    }

    /// The error for a field, if any.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// All current field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Current submission phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// The phase signal, for reactive tracking.
    pub fn phase_signal(&self) -> Signal<SubmitPhase> {
        self.phase.clone()
    }

    /// Validate and, if clean, hand the submission to the service.
    ///
    /// Returns `true` when the submission was dispatched. On validation
    /// failure the errors are recorded and the service is never called.
    /// No-op while a submission is already in flight.
    pub fn submit(&mut self, service: &impl SubmissionService) -> bool {
        if self.phase.get() == SubmitPhase::Submitting {
            return false;
        }

        self.errors.clear();

        let submission = match validate(&self.draft) {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors;
                return false;
            }
        };

        self.completed.store(false, Ordering::SeqCst);
        self.phase.set(SubmitPhase::Submitting);

        let completed = self.completed.clone();
        service.submit(
            submission,
            Box::new(move || completed.store(true, Ordering::SeqCst)),
        );
        true
    }

    /// Fold the cross-thread completion flag into the phase signal.
    /// Call from the owning thread (the render/event loop).
    pub fn sync(&self) {
        if self.phase.get() == SubmitPhase::Submitting && self.completed.load(Ordering::SeqCst) {
            self.phase.set(SubmitPhase::Submitted);
        }
    }

    /// Back to an empty Idle form ("Send Another Message").
    pub fn reset(&mut self) {
        self.draft = ContactDraft::default();
        self.errors.clear();
        self.completed.store(false, Ordering::SeqCst);
        self.phase.set(SubmitPhase::Idle);
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
