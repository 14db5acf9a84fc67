//! The recruiter interest form.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, FormError, Result};
use crate::fields::{FormField, HiringRole, MonthlyVolume, WillingToPay};
use crate::form::{parse_choice, FormState, StatusHandle, SubmitOutcome, SubmitStatus};
use crate::record::{Submission, SubmissionDraft, SubmissionRecord};
use crate::sink::{Navigator, SubmissionSink};
use crate::validation::{
    validate_company_name, validate_non_empty_set, validate_person_name, validate_phone_number,
    validate_selection, ValidationOutcome, SELECT_AN_OPTION, SELECT_MONTHLY_VOLUME,
};

/// Fields of the recruiter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecruiterField {
    /// Company name.
    CompanyName,
    /// Recruiter's own name.
    RecruiterName,
    /// Phone number.
    Phone,
    /// Roles being hired for.
    HiringRoles,
    /// Hires per month.
    MonthlyVolume,
    /// Willingness to pay for candidates.
    WillingToPay,
}

impl FormField for RecruiterField {
    const ALL: &'static [Self] = &[
        Self::CompanyName,
        Self::RecruiterName,
        Self::Phone,
        Self::HiringRoles,
        Self::MonthlyVolume,
        Self::WillingToPay,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::RecruiterName => "recruiterName",
            Self::Phone => "phone",
            Self::HiringRoles => "hiringRoles",
            Self::MonthlyVolume => "monthlyVolume",
            Self::WillingToPay => "willingToPay",
        }
    }
}

/// Values of the recruiter form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecruiterDraft {
    /// Company name.
    pub company_name: String,
    /// Recruiter's own name.
    pub recruiter_name: String,
    /// Phone number.
    pub phone: String,
    /// Roles being hired for, toggled one at a time.
    pub hiring_roles: BTreeSet<HiringRole>,
    /// Hires per month.
    pub monthly_volume: Option<MonthlyVolume>,
    /// Willingness to pay for candidates.
    pub willing_to_pay: Option<WillingToPay>,
}

impl RecruiterDraft {
    /// Returns a copy with every text field trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            company_name: self.company_name.trim().to_string(),
            recruiter_name: self.recruiter_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..self.clone()
        }
    }

    /// Runs the rule of one field against its current value.
    pub fn validate_field(&self, field: RecruiterField) -> ValidationOutcome {
        match field {
            RecruiterField::CompanyName => validate_company_name(&self.company_name),
            RecruiterField::RecruiterName => validate_person_name(&self.recruiter_name),
            RecruiterField::Phone => validate_phone_number(&self.phone),
            RecruiterField::HiringRoles => validate_non_empty_set(&self.hiring_roles),
            RecruiterField::MonthlyVolume => {
                validate_selection(self.monthly_volume, SELECT_MONTHLY_VOLUME)
            }
            RecruiterField::WillingToPay => validate_selection(self.willing_to_pay, SELECT_AN_OPTION),
        }
    }

    /// Trims the draft and validates every field.
    pub fn validate(
        &self,
    ) -> std::result::Result<RecruiterSubmission, FieldErrors<RecruiterField>> {
        let trimmed = self.trimmed();
        let mut errors = FieldErrors::new();
        for &field in RecruiterField::ALL {
            if let Err(message) = trimmed.validate_field(field) {
                errors.set(field, message);
            }
        }

        match (trimmed.monthly_volume, trimmed.willing_to_pay) {
            (Some(monthly_volume), Some(willing_to_pay)) if errors.is_empty() => {
                Ok(RecruiterSubmission {
                    company_name: trimmed.company_name,
                    recruiter_name: trimmed.recruiter_name,
                    phone: trimmed.phone,
                    hiring_roles: trimmed.hiring_roles,
                    monthly_volume,
                    willing_to_pay,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<RecruiterDraft> for SubmissionDraft {
    fn from(draft: RecruiterDraft) -> Self {
        Self::Recruiter(draft)
    }
}

/// A validated recruiter submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterSubmission {
    /// Company name, trimmed.
    pub company_name: String,
    /// Recruiter's own name, trimmed.
    pub recruiter_name: String,
    /// Phone number, trimmed but otherwise as entered.
    pub phone: String,
    /// Roles being hired for; never empty.
    pub hiring_roles: BTreeSet<HiringRole>,
    /// Hires per month.
    pub monthly_volume: MonthlyVolume,
    /// Willingness to pay for candidates.
    pub willing_to_pay: WillingToPay,
}

/// Controller of the recruiter form.
///
/// Works like [`JobSeekerForm`](crate::JobSeekerForm), with one extra
/// multi-select: hiring roles are toggled with [`toggle_role`](Self::toggle_role)
/// rather than assigned from text.
pub struct RecruiterForm {
    draft: RecruiterDraft,
    state: FormState<RecruiterField>,
    sink: Arc<dyn SubmissionSink>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for RecruiterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecruiterForm")
            .field("draft", &self.draft)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl RecruiterForm {
    /// Submit button label when idle.
    pub const CALL_TO_ACTION: &'static str = "Join as Early Recruiter";

    /// Creates an empty form writing to `sink`.
    pub fn new(sink: Arc<dyn SubmissionSink>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            draft: RecruiterDraft::default(),
            state: FormState::new(Self::CALL_TO_ACTION),
            sink,
            navigator,
        }
    }

    /// Returns the current values.
    pub fn draft(&self) -> &RecruiterDraft {
        &self.draft
    }

    /// Returns the field error map.
    pub fn errors(&self) -> &FieldErrors<RecruiterField> {
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

    /// Overwrites a field addressed by its wire name.
    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<()> {
        let field = RecruiterField::from_name(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.set_field(field, value)
    }

    /// Adds `role` if absent, removes it if present.
    ///
    /// The hiring roles error is cleared only when the selection ends up
    /// non-empty.
    pub fn toggle_role(&mut self, role: HiringRole) {
        if !self.draft.hiring_roles.remove(&role) {
            self.draft.hiring_roles.insert(role);
        }
        if !self.draft.hiring_roles.is_empty() {
            self.state.field_edited(RecruiterField::HiringRoles);
        }
    }

    /// Returns whether `role` is selected.
    pub fn is_role_selected(&self, role: HiringRole) -> bool {
        self.draft.hiring_roles.contains(&role)
    }

    /// Validates one field against the value already in the draft.
    ///
    /// The value is read untrimmed, as typed. Set the field with
    /// [`set_field`](Self::set_field) before calling this on blur; the
    /// outcome replaces or clears the field's error.
    pub fn validate_field_on_blur(&mut self, field: RecruiterField) {
        let outcome = self.draft.validate_field(field);
        self.state.blurred(field, outcome);
    }

    /// Validates the whole form and, if valid, writes it to the sink.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.draft.validate() {
            Ok(submission) => {
                let record = SubmissionRecord::pending(Submission::Recruiter(submission));
                self.state
                    .persist(record, self.sink.as_ref(), self.navigator.as_ref())
                    .await
            }
            Err(errors) => self.state.reject(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{SINK_FAILED_MESSAGE, VALIDATION_FAILED_MESSAGE};
    use crate::sink::{MemorySink, RecordingNavigator};
    use crate::validation::{COMPANY_INVALID, SELECT_HIRING_ROLE};
    use serde_json::json;

    fn form_with(sink: &Arc<MemorySink>, navigator: &Arc<RecordingNavigator>) -> RecruiterForm {
        RecruiterForm::new(sink.clone(), navigator.clone())
    }

    fn fill(form: &mut RecruiterForm) {
        form.set_field(RecruiterField::CompanyName, " ABC BPO Pvt. Ltd. ").unwrap();
        form.set_field(RecruiterField::RecruiterName, "Meera Iyer").unwrap();
        form.set_field(RecruiterField::Phone, "+91 (98765) 43210").unwrap();
        form.toggle_role(HiringRole::InboundVoice);
        form.toggle_role(HiringRole::Chat);
        form.set_field(RecruiterField::MonthlyVolume, "11-30").unwrap();
        form.set_field(RecruiterField::WillingToPay, "yes").unwrap();
    }

    #[test]
    fn test_toggle_role_twice_restores_selection() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        form.toggle_role(HiringRole::Blended);
        let before = form.draft().hiring_roles.clone();

        form.toggle_role(HiringRole::Email);
        form.toggle_role(HiringRole::Email);
        assert_eq!(form.draft().hiring_roles, before);

        form.toggle_role(HiringRole::Blended);
        form.toggle_role(HiringRole::Blended);
        assert_eq!(form.draft().hiring_roles, before);
        assert!(form.is_role_selected(HiringRole::Blended));
    }

    #[test]
    fn test_toggle_clears_role_error_only_when_non_empty() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        form.validate_field_on_blur(RecruiterField::HiringRoles);
        assert_eq!(
            form.errors().get(RecruiterField::HiringRoles),
            Some(SELECT_HIRING_ROLE)
        );

        form.toggle_role(HiringRole::Chat);
        assert_eq!(form.errors().get(RecruiterField::HiringRoles), None);

        // Emptying the selection again does not re-validate it.
        form.toggle_role(HiringRole::Chat);
        assert!(form.draft().hiring_roles.is_empty());
        assert_eq!(form.errors().get(RecruiterField::HiringRoles), None);
    }

    #[test]
    fn test_hiring_roles_not_assignable_from_text() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        let err = form.set_field_by_name("hiringRoles", "chat").unwrap_err();
        assert!(matches!(err, FormError::NotTextField("hiringRoles")));
    }

    #[test]
    fn test_company_blur_and_clear() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        form.set_field(RecruiterField::CompanyName, "Acme@Corp").unwrap();
        form.validate_field_on_blur(RecruiterField::CompanyName);
        assert_eq!(
            form.errors().get_by_name("companyName"),
            Some(COMPANY_INVALID)
        );

        form.set_field(RecruiterField::CompanyName, "Acme Corp").unwrap();
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_missing_roles_blocks_submit() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        fill(&mut form);
        form.toggle_role(HiringRole::InboundVoice);
        form.toggle_role(HiringRole::Chat);

        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().get(RecruiterField::HiringRoles),
            Some(SELECT_HIRING_ROLE)
        );
        assert_eq!(form.submit_error(), Some(VALIDATION_FAILED_MESSAGE));
        assert_eq!(sink.write_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_submit_writes_document() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        fill(&mut form);

        assert_eq!(form.submit().await, SubmitOutcome::Submitted);
        let docs = sink.documents("submissions");
        assert_eq!(docs.len(), 1);
        let doc = &docs[0];
        assert_eq!(doc["type"], "recruiter");
        assert_eq!(doc["companyName"], "ABC BPO Pvt. Ltd.");
        assert_eq!(doc["recruiterName"], "Meera Iyer");
        assert_eq!(doc["phone"], "+91 (98765) 43210");
        assert_eq!(doc["hiringRoles"], json!(["inbound_voice", "chat"]));
        assert_eq!(doc["monthlyVolume"], "11-30");
        assert_eq!(doc["willingToPay"], "yes");

        assert_eq!(navigator.last().as_deref(), Some("/success?type=recruiter"));
        assert!(form.is_submitting());
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_roles_and_values() {
        let sink = Arc::new(MemorySink::failing());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        fill(&mut form);
        let before = form.draft().clone();

        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.submit_error(), Some(SINK_FAILED_MESSAGE));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), RecruiterForm::CALL_TO_ACTION);
        assert_eq!(form.draft(), &before);
        assert!(navigator.paths().is_empty());
    }

    #[test]
    fn test_snapshot_carries_roles() {
        let sink = Arc::new(MemorySink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut form = form_with(&sink, &navigator);
        form.toggle_role(HiringRole::Blended);

        let snapshot = form.snapshot();
        assert_eq!(snapshot.kind(), crate::SubmissionKind::Recruiter);
        assert_eq!(snapshot, SubmissionDraft::Recruiter(form.draft().clone()));
    }
}
