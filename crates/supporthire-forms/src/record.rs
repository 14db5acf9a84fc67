//! Submission drafts and the documents written to the sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::job_seeker::{JobSeekerDraft, JobSeekerSubmission};
use crate::recruiter::{RecruiterDraft, RecruiterSubmission};

/// A schemaless document as stored by a sink.
pub type Document = serde_json::Map<String, Value>;

/// Key under which the creation timestamp is stored.
pub const CREATED_AT_KEY: &str = "createdAt";

/// Key under which the submission kind is stored.
pub const TYPE_KEY: &str = "type";

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionKind {
    /// The job seeker form.
    JobSeeker,
    /// The recruiter form.
    Recruiter,
}

impl SubmissionKind {
    /// Returns the discriminant stored in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "job-seeker",
            Self::Recruiter => "recruiter",
        }
    }

    /// Parses a kind from its discriminant.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "job-seeker" => Some(Self::JobSeeker),
            "recruiter" => Some(Self::Recruiter),
            _ => None,
        }
    }

    /// Returns the confirmation path to navigate to after a recorded write.
    pub fn success_path(self) -> String {
        format!("/success?type={}", self.as_str())
    }
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-progress value set of either form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDraft {
    /// Job seeker draft.
    JobSeeker(JobSeekerDraft),
    /// Recruiter draft.
    Recruiter(RecruiterDraft),
}

impl SubmissionDraft {
    /// Returns which form the draft belongs to.
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::JobSeeker(_) => SubmissionKind::JobSeeker,
            Self::Recruiter(_) => SubmissionKind::Recruiter,
        }
    }
}

/// A validated, trimmed submission, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Submission {
    /// A job seeker's details.
    JobSeeker(JobSeekerSubmission),
    /// A recruiter's hiring pattern.
    Recruiter(RecruiterSubmission),
}

impl Submission {
    /// Returns which form the submission came from.
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::JobSeeker(_) => SubmissionKind::JobSeeker,
            Self::Recruiter(_) => SubmissionKind::Recruiter,
        }
    }
}

/// A submission together with its creation timestamp.
///
/// Controllers build records with `created_at: None`; the sink fills it in
/// from its own clock when the document is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// The submitted values.
    #[serde(flatten)]
    pub submission: Submission,
    /// When the sink stored the record.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SubmissionRecord {
    /// Creates a record whose timestamp is left to the sink.
    pub fn pending(submission: Submission) -> Self {
        Self {
            submission,
            created_at: None,
        }
    }

    /// Returns which form the record came from.
    pub fn kind(&self) -> SubmissionKind {
        self.submission.kind()
    }

    /// Encodes the record as a document.
    pub fn to_document(&self) -> serde_json::Result<Document> {
        match serde_json::to_value(self)? {
            Value::Object(document) => Ok(document),
            _ => Err(serde::ser::Error::custom(
                "submission record did not encode as an object",
            )),
        }
    }

    /// Decodes a record from a stored document.
    pub fn from_document(document: Document) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(document))
    }
}

/// Stamps a document with a creation time, replacing any placeholder.
pub fn stamp_created_at(document: &mut Document, at: DateTime<Utc>) {
    document.insert(
        CREATED_AT_KEY.to_string(),
        Value::String(at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{HiringRole, JobType, MonthlyVolume, ShiftPreference, WillingToPay};
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn job_seeker() -> Submission {
        Submission::JobSeeker(JobSeekerSubmission {
            name: "Priya Sharma".to_string(),
            phone: "9876543210".to_string(),
            city: "Pune".to_string(),
            job_type: JobType::Inbound,
            shift: ShiftPreference::Day,
        })
    }

    #[test]
    fn test_job_seeker_document_shape() {
        let document = SubmissionRecord::pending(job_seeker())
            .to_document()
            .unwrap();
        assert_eq!(
            Value::Object(document),
            json!({
                "type": "job-seeker",
                "name": "Priya Sharma",
                "phone": "9876543210",
                "city": "Pune",
                "jobType": "inbound",
                "shift": "day",
                "createdAt": null,
            })
        );
    }

    #[test]
    fn test_recruiter_document_shape() {
        let roles: BTreeSet<_> = [HiringRole::TechnicalSupport, HiringRole::InboundVoice]
            .into_iter()
            .collect();
        let record = SubmissionRecord::pending(Submission::Recruiter(RecruiterSubmission {
            company_name: "ABC BPO Pvt. Ltd.".to_string(),
            recruiter_name: "Meera Iyer".to_string(),
            phone: "+91 98765 43210".to_string(),
            hiring_roles: roles,
            monthly_volume: MonthlyVolume::UpTo75,
            willing_to_pay: WillingToPay::Maybe,
        }));

        let document = record.to_document().unwrap();
        assert_eq!(document["type"], "recruiter");
        assert_eq!(document["companyName"], "ABC BPO Pvt. Ltd.");
        assert_eq!(
            document["hiringRoles"],
            json!(["inbound_voice", "technical_support"])
        );
        assert_eq!(document["monthlyVolume"], "31-75");
        assert_eq!(document["willingToPay"], "maybe");
    }

    #[test]
    fn test_stamped_document_decodes() {
        let mut document = SubmissionRecord::pending(job_seeker())
            .to_document()
            .unwrap();
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        stamp_created_at(&mut document, at);

        let record = SubmissionRecord::from_document(document).unwrap();
        assert_eq!(record.created_at, Some(at));
        assert_eq!(record.kind(), SubmissionKind::JobSeeker);
    }

    #[test]
    fn test_kind_paths() {
        assert_eq!(
            SubmissionKind::JobSeeker.success_path(),
            "/success?type=job-seeker"
        );
        assert_eq!(SubmissionKind::parse("recruiter"), Some(SubmissionKind::Recruiter));
        assert_eq!(SubmissionKind::parse("employer"), None);
    }

    #[test]
    fn test_draft_kind_follows_variant() {
        let draft: SubmissionDraft = JobSeekerDraft::default().into();
        assert_eq!(draft.kind(), SubmissionKind::JobSeeker);

        let draft = SubmissionDraft::from(RecruiterDraft {
            willing_to_pay: Some(WillingToPay::No),
            ..RecruiterDraft::default()
        });
        assert_eq!(draft.kind(), SubmissionKind::Recruiter);
    }
}
