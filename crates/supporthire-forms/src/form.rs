//! Submit lifecycle shared by both form controllers.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::error::{FieldErrors, FormError, Result};
use crate::fields::{Choice, FormField};
use crate::record::SubmissionRecord;
use crate::sink::{Navigator, SubmissionSink};

/// Collection every submission is appended to.
pub const SUBMISSIONS_COLLECTION: &str = "submissions";

/// Shown when any field fails submit validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the errors below before submitting.";

/// Shown when the sink rejects a write.
pub const SINK_FAILED_MESSAGE: &str = "We could not record this right now. Please try again.";

/// Submit button label while a write is in flight.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Why the last submit attempt did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// At least one field failed validation; the sink was not called.
    Validation,
    /// The sink rejected the write.
    Sink,
}

impl SubmitError {
    /// Returns the user-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Self::Validation => VALIDATION_FAILED_MESSAGE,
            Self::Sink => SINK_FAILED_MESSAGE,
        }
    }
}

/// Where a form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Accepting input, possibly showing the error of the last attempt.
    Idle {
        /// Error of the last attempt, if it failed.
        error: Option<SubmitError>,
    },
    /// Waiting for the sink.
    Submitting,
    /// The sink accepted the write and navigation was requested.
    ///
    /// The form stays in this state until it is dropped.
    Submitted,
}

impl Default for SubmitStatus {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

impl SubmitStatus {
    /// Returns whether the submit control should be disabled.
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting | Self::Submitted)
    }

    /// Returns the error of the last attempt.
    pub fn error(self) -> Option<SubmitError> {
        match self {
            Self::Idle { error } => error,
            Self::Submitting | Self::Submitted => None,
        }
    }

    /// Returns the aggregate message to show above the submit control.
    pub fn submit_error(self) -> Option<&'static str> {
        self.error().map(SubmitError::message)
    }
}

/// Result of one call to `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was written.
    Invalid,
    /// The document was written and the user was sent to the confirmation view.
    Submitted,
    /// The sink rejected the write; the draft is kept for another attempt.
    Failed,
}

/// Shared view of one form's submit status.
///
/// `submit` holds the form exclusively until the sink answers. Clones of this
/// handle stay readable meanwhile, so a caller can disable the submit control
/// and show [`SUBMITTING_LABEL`] while the write is pending.
#[derive(Debug, Clone)]
pub struct StatusHandle {
    status: Arc<Mutex<SubmitStatus>>,
    call_to_action: &'static str,
}

impl StatusHandle {
    pub(crate) fn new(call_to_action: &'static str) -> Self {
        Self {
            status: Arc::new(Mutex::new(SubmitStatus::default())),
            call_to_action,
        }
    }

    /// Returns the current status.
    pub fn get(&self) -> SubmitStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.get().is_submitting()
    }

    /// Returns the aggregate message to show above the submit control.
    pub fn submit_error(&self) -> Option<&'static str> {
        self.get().submit_error()
    }

    /// Returns the submit button label.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            self.call_to_action
        }
    }

    fn set(&self, status: SubmitStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }
}

/// Error map and status of one form.
#[derive(Debug)]
pub(crate) struct FormState<F: FormField> {
    pub(crate) errors: FieldErrors<F>,
    pub(crate) status: StatusHandle,
}

impl<F: FormField> FormState<F> {
    pub(crate) fn new(call_to_action: &'static str) -> Self {
        Self {
            errors: FieldErrors::new(),
            status: StatusHandle::new(call_to_action),
        }
    }

    /// Drops the message of an edited field without re-validating it.
    pub(crate) fn field_edited(&mut self, field: F) {
        if self.errors.clear(field) {
            debug!(field = field.name(), "cleared field error on edit");
        }
    }

    /// Records the outcome of a blur validation.
    pub(crate) fn blurred(&mut self, field: F, outcome: std::result::Result<(), String>) {
        debug!(field = field.name(), valid = outcome.is_ok(), "validated field on blur");
        self.errors.record(field, outcome);
    }

    /// Ends a submit attempt that failed validation.
    pub(crate) fn reject(&mut self, errors: FieldErrors<F>) -> SubmitOutcome {
        debug!(invalid_fields = errors.len(), "submit blocked by validation");
        self.errors = errors;
        self.status.set(SubmitStatus::Idle {
            error: Some(SubmitError::Validation),
        });
        SubmitOutcome::Invalid
    }

    /// Writes a validated record and moves to the confirmation view.
    pub(crate) async fn persist(
        &mut self,
        record: SubmissionRecord,
        sink: &dyn SubmissionSink,
        navigator: &dyn Navigator,
    ) -> SubmitOutcome {
        self.errors = FieldErrors::new();
        self.status.set(SubmitStatus::Submitting);

        let kind = record.kind();
        let document = match record.to_document() {
            Ok(document) => document,
            Err(err) => {
                warn!(kind = kind.as_str(), error = %err, "failed to encode submission");
                return self.sink_failed();
            }
        };
        debug!(kind = kind.as_str(), ?document, "writing submission");

        match sink.write(SUBMISSIONS_COLLECTION, document).await {
            Ok(()) => {
                info!(kind = kind.as_str(), "submission recorded");
                self.status.set(SubmitStatus::Submitted);
                navigator.navigate_to(&kind.success_path());
                SubmitOutcome::Submitted
            }
            Err(err) => {
                warn!(kind = kind.as_str(), error = %err, "failed to record submission");
                self.sink_failed()
            }
        }
    }

    fn sink_failed(&mut self) -> SubmitOutcome {
        self.status.set(SubmitStatus::Idle {
            error: Some(SubmitError::Sink),
        });
        SubmitOutcome::Failed
    }
}

/// Parses a selector value. The empty string unsets the selection.
pub(crate) fn parse_choice<C: Choice>(field: &'static str, value: &str) -> Result<Option<C>> {
    if value.is_empty() {
        return Ok(None);
    }
    C::parse(value)
        .map(Some)
        .ok_or_else(|| FormError::InvalidChoice {
            field,
            value: value.to_string(),
        })
}
