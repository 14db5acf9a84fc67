//! The job seeker interest form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, FormError, Result};
use crate::fields::{FormField, JobType, ShiftPreference};
use crate::form::{parse_choice, FormState, StatusHandle, SubmitOutcome, SubmitStatus};
use crate::record::{Submission, SubmissionDraft, SubmissionRecord};
use crate::sink::{Navigator, SubmissionSink};
use crate::validation::{
    validate_person_name, validate_phone_number, validate_selection, ValidationOutcome,
    SELECT_JOB_TYPE, SELECT_SHIFT,
};

/// Fields of the job seeker form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobSeekerField {
    /// Full name.
    Name,
    /// Phone number.
    Phone,
    /// City.
    City,
    /// Kind of support work.
    JobType,
    /// Preferred shift.
    Shift,
}

impl FormField for JobSeekerField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Phone,
        Self::City,
        Self::JobType,
        Self::Shift,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::City => "city",
            Self::JobType => "jobType",
            Self::Shift => "shift",
        }
    }
}

/// Values of the job seeker form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSeekerDraft {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// City.
    pub city: String,
    /// Kind of support work.
    pub job_type: Option<JobType>,
    /// Preferred shift.
    pub shift: Option<ShiftPreference>,
}

impl JobSeekerDraft {
    /// Returns a copy with every text field trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            city: self.city.trim().to_string(),
            job_type: self.job_type,
            shift: self.shift,
        }
    }

    /// Runs the rule of one field against its current value.
    pub fn validate_field(&self, field: JobSeekerField) -> ValidationOutcome {
        match field {
            JobSeekerField::Name => validate_person_name(&self.name),
            JobSeekerField::Phone => validate_phone_number(&self.phone),
            JobSeekerField::City => validate_person_name(&self.city),
            JobSeekerField::JobType => validate_selection(self.job_type, SELECT_JOB_TYPE),
            JobSeekerField::Shift => validate_selection(self.shift, SELECT_SHIFT),
        }
    }

    /// Trims the draft and validates every field.
    ///
    /// Returns the submission on success, or the complete error map.
    pub fn validate(
        &self,
    ) -> std::result::Result<JobSeekerSubmission, FieldErrors<JobSeekerField>> {
        let trimmed = self.trimmed();
        let mut errors = FieldErrors::new();
        for &field in JobSeekerField::ALL {
            if let Err(message) = trimmed.validate_field(field) {
                errors.set(field, message);
            }
        }

        match (trimmed.job_type, trimmed.shift) {
            (Some(job_type), Some(shift)) if errors.is_empty() => Ok(JobSeekerSubmission {
                name: trimmed.name,
                phone: trimmed.phone,
                city: trimmed.city,
                job_type,
                shift,
            }),
            _ => Err(errors),
        }
    }
}

impl From<JobSeekerDraft> for SubmissionDraft {
    fn from(draft: JobSeekerDraft) -> Self {
        Self::JobSeeker(draft)
    }
}

/// A validated job seeker submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerSubmission {
    /// Full name, trimmed.
    pub name: String,
    /// Phone number, trimmed but otherwise as entered.
    pub phone: String,
    /// City, trimmed.
    pub city: String,
    /// Kind of support work.
    pub job_type: JobType,
    /// Preferred shift.
    pub shift: ShiftPreference,
}

/// Controller of the job seeker form.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use supporthire_forms::{
///     JobSeekerField, JobSeekerForm, MemorySink, RecordingNavigator, SubmitOutcome,
/// };
///
/// # tokio_test::block_on(async {
/// let sink = Arc::new(MemorySink::new());
/// let navigator = Arc::new(RecordingNavigator::new());
/// let mut form = JobSeekerForm::new(sink.clone(), navigator.clone());
///
/// form.set_field(JobSeekerField::Name, "Priya Sharma").unwrap();
/// form.set_field(JobSeekerField::Phone, "9876543210").unwrap();
/// form.set_field(JobSeekerField::City, "Pune").unwrap();
/// form.set_field(JobSeekerField::JobType, "inbound").unwrap();
/// form.set_field(JobSeekerField::Shift, "day").unwrap();
///
/// assert_eq!(form.submit().await, SubmitOutcome::Submitted);
/// assert_eq!(navigator.last().as_deref(), Some("/success?type=job-seeker"));
/// # });
/// ```
pub struct JobSeekerForm {
    draft: JobSeekerDraft,
    state: FormState<JobSeekerField>,
    sink: Arc<dyn SubmissionSink>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for JobSeekerForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobSeekerForm")
            .field("draft", &self.draft)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl JobSeekerForm {
    /// Submit button label when idle.
    pub const CALL_TO_ACTION: &'static str = "Get Early Access";

    /// Creates an empty form writing to `sink`.
    pub fn new(sink: Arc<dyn SubmissionSink>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            draft: JobSeekerDraft::default(),
            state: FormState::new(Self::CALL_TO_ACTION),
            sink,
            navigator,
        }
    }

    /// Returns the current values.
    pub fn draft(&self) -> &JobSeekerDraft {
        &self.draft
    }

    /// Returns the field error map.
    pub fn errors(&self) -> &FieldErrors<JobSeekerField> {
        &self.state.errors
    }

    /// Returns the current values as a tagged draft.
    pub fn snapshot(&self) -> SubmissionDraft {
        self.draft.clone().into()
    }

    /// Returns the submit status.
    pub fn status(&self) -> SubmitStatus {
        self.state.status.get()
    }

    /// Returns a handle that reads the submit status while `submit` runs.
    pub fn status_handle(&self) -> StatusHandle {
        self.state.status.clone()
    }

    /// Returns whether a submit is in flight or has completed.
    pub fn is_submitting(&self) -> bool {
        self.state.status.is_submitting()
    }

    /// Returns the aggregate submit error message.
    pub fn submit_error(&self) -> Option<&'static str> {
        self.state.status.submit_error()
    }

    /// Returns the submit button label.
    pub fn submit_label(&self) -> &'static str {
        self.state.status.submit_label()
    }

    /// Overwrites a field and clears its error.
    ///
    /// Selection fields take the option's stored value; the empty string
    /// clears the selection. A value outside the option set is rejected and
    /// leaves the form untouched.
    pub fn set_field(&mut self, field: JobSeekerField, value: &str) -> Result<()> {
        match field {
            JobSeekerField::Name => self.draft.name = value.to_string(),
            JobSeekerField::Phone => self.draft.phone = value.to_string(),
            JobSeekerField::City => self.draft.city = value.to_string(),
            JobSeekerField::JobType => {
                self.draft.job_type = parse_choice(field.name(), value)?;
            }
            JobSeekerField::Shift => self.draft.shift = parse_choice(field.name(), value)?,
        }
        self.state.field_edited(field);
        Ok(())
    }

    /// Overwrites a field addressed by its wire name.
    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<()> {
        let field = JobSeekerField::from_name(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.set_field(field, value)
    }

    /// Validates one field against the value already in the draft.
    ///
    /// The value is read untrimmed, as typed. Set the field with
    /// [`set_field`](Self::set_field) before calling this on blur; the
    /// outcome replaces or clears the field's error.
    pub fn validate_field_on_blur(&mut self, field: JobSeekerField) {
        let outcome = self.draft.validate_field(field);
        self.state.blurred(field, outcome);
    }

    /// Validates the whole form and, if valid, writes it to the sink.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.draft.validate() {
            Ok(submission) => {
                let record = SubmissionRecord::pending(Submission::JobSeeker(submission));
                self.state
                    .persist(record, self.sink.as_ref(), self.navigator.as_ref())
                    .await
            }
            Err(errors) => self.state.reject(errors),
        }
    }
}
