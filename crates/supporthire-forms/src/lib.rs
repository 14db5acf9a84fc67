//! # supporthire-forms
//!
//! Lead-capture forms for a support/BPO hiring board.
//!
//! This crate provides:
//! - Field validators for names, company names, phone numbers and selections
//! - A job seeker form and a recruiter form with field-level errors
//! - The submit lifecycle: validate, write one document, navigate
//! - Seams for the document store ([`SubmissionSink`]) and the router ([`Navigator`])
//! - The confirmation view shown after a recorded submission
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use supporthire_forms::fields::HiringRole;
//! use supporthire_forms::{
//!     MemorySink, RecordingNavigator, RecruiterField, RecruiterForm, SubmitOutcome,
//! };
//!
//! # tokio_test::block_on(async {
//! let sink = Arc::new(MemorySink::new());
//! let navigator = Arc::new(RecordingNavigator::new());
//! let mut form = RecruiterForm::new(sink.clone(), navigator.clone());
//!
//! form.set_field(RecruiterField::CompanyName, "ABC BPO Pvt. Ltd.").unwrap();
//! form.set_field(RecruiterField::RecruiterName, "Meera Iyer").unwrap();
//! form.set_field(RecruiterField::Phone, "+91 98765 43210").unwrap();
//! form.toggle_role(HiringRole::InboundVoice);
//! form.set_field(RecruiterField::MonthlyVolume, "11-30").unwrap();
//!
//! // Willingness to pay is still missing.
//! assert_eq!(form.submit().await, SubmitOutcome::Invalid);
//! assert_eq!(
//!     form.errors().get(RecruiterField::WillingToPay),
//!     Some("Please select an option"),
//! );
//! assert_eq!(sink.write_count(), 0);
//!
//! form.set_field(RecruiterField::WillingToPay, "maybe").unwrap();
//! assert_eq!(form.submit().await, SubmitOutcome::Submitted);
//! assert_eq!(navigator.last().as_deref(), Some("/success?type=recruiter"));
//! # });
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use supporthire_forms::validation::{validate_person_name, validate_phone_number};
//!
//! assert!(validate_phone_number("+91 98765 43210").is_ok());
//! assert!(validate_phone_number("+1 9876543210").is_err());
//! assert_eq!(
//!     validate_person_name(" a "),
//!     Err("Name must be at least 2 characters".to_string()),
//! );
//! ```
//!
//! ## Field errors
//!
//! Errors appear when a field is blurred or the form is submitted, and
//! disappear as soon as the field is edited again. Editing does not
//! re-validate: a still-invalid value shows no error until the next blur or
//! submit.
//!
//! ## Rendering
//!
//! Both controllers render themselves as HTML with `render()`, showing the
//! current values, field errors, the submit error and the submit button.
//! While `submit` is awaiting the sink, read the status through a
//! [`StatusHandle`] taken from `status_handle()` beforehand.

pub mod confirmation;
mod error;
pub mod fields;
mod form;
mod job_seeker;
mod recruiter;
mod record;
mod sink;
pub mod validation;
mod view;

pub use confirmation::{ConfirmationKind, ConfirmationPage};
pub use error::{FieldErrors, FormError, Result, SinkError};
pub use fields::{Choice, FormField};
pub use form::{
    StatusHandle, SubmitError, SubmitOutcome, SubmitStatus, SINK_FAILED_MESSAGE, SUBMISSIONS_COLLECTION,
    SUBMITTING_LABEL, VALIDATION_FAILED_MESSAGE,
};
pub use job_seeker::{JobSeekerDraft, JobSeekerField, JobSeekerForm, JobSeekerSubmission};
pub use record::{
    stamp_created_at, Document, Submission, SubmissionDraft, SubmissionKind, SubmissionRecord,
    CREATED_AT_KEY, TYPE_KEY,
};
pub use recruiter::{RecruiterDraft, RecruiterField, RecruiterForm, RecruiterSubmission};
pub use sink::{
    BoxFuture, MemorySink, Navigator, RecordingNavigator, StoredDocument, SubmissionSink,
};
