//! # supporthire-store
//!
//! SQLite-backed [`SubmissionSink`](supporthire_forms::SubmissionSink) for the
//! SupportHire lead-capture forms.
//!
//! ```rust
//! use std::sync::Arc;
//! use supporthire_forms::{
//!     JobSeekerField, JobSeekerForm, RecordingNavigator, SubmitOutcome, SUBMISSIONS_COLLECTION,
//! };
//! use supporthire_store::{SqliteSubmissionSink, StoreConfig};
//!
//! # tokio_test::block_on(async {
//! let config = StoreConfig::try_parse_from([
//!     "supporthire-store",
//!     "--database-url",
//!     "sqlite::memory:",
//!     "--max-connections",
//!     "1",
//! ])
//! .unwrap();
//! let sink = Arc::new(SqliteSubmissionSink::new(config.connect().await.unwrap()));
//! sink.ensure_table().await.unwrap();
//!
//! let mut form = JobSeekerForm::new(sink.clone(), Arc::new(RecordingNavigator::new()));
//! form.set_field(JobSeekerField::Name, "Arjun Nair").unwrap();
//! form.set_field(JobSeekerField::Phone, "+919876543210").unwrap();
//! form.set_field(JobSeekerField::City, "Kochi").unwrap();
//! form.set_field(JobSeekerField::JobType, "chat").unwrap();
//! form.set_field(JobSeekerField::Shift, "rotational").unwrap();
//! assert_eq!(form.submit().await, SubmitOutcome::Submitted);
//!
//! let stored = sink.list(SUBMISSIONS_COLLECTION).await.unwrap();
//! assert_eq!(stored.len(), 1);
//! assert!(stored[0].created_at().is_some());
//! # });
//! ```

pub mod config;
mod error;
pub mod sink;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use sink::{SqliteSubmissionSink, StoredSubmission};
