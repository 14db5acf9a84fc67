//! End-to-end behaviour of both forms against hand-written sink doubles.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use supporthire_forms::fields::{Choice, HiringRole, JobType, ShiftPreference};
use supporthire_forms::validation::validate_person_name;
use supporthire_forms::{
    BoxFuture, Document, JobSeekerField, JobSeekerForm, Navigator, RecruiterField, RecruiterForm,
    SinkError, SubmissionRecord, SubmissionSink, SubmitOutcome, SubmitStatus, SINK_FAILED_MESSAGE,
    SUBMISSIONS_COLLECTION, SUBMITTING_LABEL, VALIDATION_FAILED_MESSAGE,
};

/// How the double answers writes.
#[derive(Clone, Copy)]
enum Reply {
    Accept,
    Reject,
    Crash,
}

/// Records every call and answers with a fixed reply.
struct ScriptedSink {
    reply: Reply,
    calls: Mutex<Vec<(String, Document)>>,
}

impl ScriptedSink {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Document)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SubmissionSink for ScriptedSink {
    fn write<'a>(
        &'a self,
        collection: &'a str,
        document: Document,
    ) -> BoxFuture<'a, Result<(), SinkError>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((collection.to_string(), document));
            match self.reply {
                Reply::Accept => Ok(()),
                Reply::Reject => Err(SinkError::Rejected("quota exceeded".to_string())),
                Reply::Crash => Err(SinkError::other(std::io::Error::other("connection reset"))),
            }
        })
    }
}

#[derive(Default)]
struct Paths(Mutex<Vec<String>>);

impl Navigator for Paths {
    fn navigate_to(&self, path: &str) {
        self.0.lock().unwrap().push(path.to_string());
    }
}

impl Paths {
    fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

fn priya(form: &mut JobSeekerForm) {
    form.set_field(JobSeekerField::Name, "Priya Sharma").unwrap();
    form.set_field(JobSeekerField::Phone, "9876543210").unwrap();
    form.set_field(JobSeekerField::City, "Pune").unwrap();
    form.set_field(JobSeekerField::JobType, JobType::Inbound.value())
        .unwrap();
    form.set_field(JobSeekerField::Shift, ShiftPreference::Day.value())
        .unwrap();
}

#[test]
fn test_names_of_allowed_characters_pass() {
    let samples = [
        "Al", "Priya Sharma", "O'Neil", "Jean-Luc", "Mary  Ann", "a-'", " Zo ", "ab\tcd",
    ];
    for sample in samples {
        assert!(validate_person_name(sample).is_ok(), "{sample:?}");
    }
}

#[test]
fn test_short_names_fail_whatever_the_content() {
    let samples = ["", " ", "A", " b ", "7", "@", "\u{00e9}", "  -  "];
    for sample in samples {
        assert!(validate_person_name(sample).is_err(), "{sample:?}");
    }
}

#[tokio::test]
async fn test_valid_job_seeker_reaches_sink_once() {
    let sink = ScriptedSink::new(Reply::Accept);
    let paths = Arc::new(Paths::default());
    let mut form = JobSeekerForm::new(sink.clone(), paths.clone());
    priya(&mut form);
    form.set_field(JobSeekerField::Name, "  Priya Sharma  ").unwrap();

    assert_eq!(form.submit().await, SubmitOutcome::Submitted);

    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    let (collection, document) = &calls[0];
    assert_eq!(collection, SUBMISSIONS_COLLECTION);
    assert_eq!(document["type"], "job-seeker");
    assert_eq!(document["name"], "Priya Sharma");
    assert!(document["createdAt"].is_null());

    let record = SubmissionRecord::from_document(document.clone()).unwrap();
    assert_eq!(record.created_at, None);

    assert_eq!(paths.all(), vec!["/success?type=job-seeker"]);
}

#[tokio::test]
async fn test_one_bad_field_means_one_error_and_no_write() {
    let sink = ScriptedSink::new(Reply::Accept);
    let paths = Arc::new(Paths::default());
    let mut form = JobSeekerForm::new(sink.clone(), paths.clone());
    priya(&mut form);
    form.set_field(JobSeekerField::City, "Pune 411001").unwrap();

    assert_eq!(form.submit().await, SubmitOutcome::Invalid);
    assert_eq!(form.errors().len(), 1);
    assert!(form.errors().contains(JobSeekerField::City));
    assert_eq!(form.submit_error(), Some(VALIDATION_FAILED_MESSAGE));
    assert!(sink.calls().is_empty());
    assert!(paths.all().is_empty());
}

#[tokio::test]
async fn test_every_sink_failure_maps_to_the_same_message() {
    for reply in [Reply::Reject, Reply::Crash] {
        let sink = ScriptedSink::new(reply);
        let paths = Arc::new(Paths::default());
        let mut form = RecruiterForm::new(sink.clone(), paths.clone());
        form.set_field(RecruiterField::CompanyName, "Acme Support").unwrap();
        form.set_field(RecruiterField::RecruiterName, "Ravi Kumar").unwrap();
        form.set_field(RecruiterField::Phone, "98765-43210").unwrap();
        form.toggle_role(HiringRole::TechnicalSupport);
        form.set_field(RecruiterField::MonthlyVolume, "76+").unwrap();
        form.set_field(RecruiterField::WillingToPay, "no").unwrap();
        let before = form.draft().clone();

        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.submit_error(), Some(SINK_FAILED_MESSAGE));
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &before);
        assert_eq!(sink.calls().len(), 1);
        assert!(paths.all().is_empty());
    }
}

#[tokio::test]
async fn test_edit_after_blur_clears_error_immediately() {
    let sink = ScriptedSink::new(Reply::Accept);
    let paths = Arc::new(Paths::default());
    let mut form = RecruiterForm::new(sink, paths);

    form.set_field(RecruiterField::Phone, "12345").unwrap();
    form.validate_field_on_blur(RecruiterField::Phone);
    assert!(form.errors().contains(RecruiterField::Phone));

    form.set_field(RecruiterField::Phone, "123456").unwrap();
    assert!(!form.errors().contains(RecruiterField::Phone));
}

/// Parks each write until released, then rejects it.
#[derive(Default)]
struct StalledSink {
    entered: Notify,
    release: Notify,
}

impl SubmissionSink for StalledSink {
    fn write<'a>(
        &'a self,
        _collection: &'a str,
        _document: Document,
    ) -> BoxFuture<'a, Result<(), SinkError>> {
        Box::pin(async move {
            self.entered.notify_one();
            self.release.notified().await;
            Err(SinkError::Unavailable("timed out".to_string()))
        })
    }
}

#[tokio::test]
async fn test_pending_write_disables_submit_until_it_fails() {
    let sink = Arc::new(StalledSink::default());
    let paths = Arc::new(Paths::default());
    let mut form = RecruiterForm::new(sink.clone(), paths.clone());
    form.set_field(RecruiterField::CompanyName, "Acme Support").unwrap();
    form.set_field(RecruiterField::RecruiterName, "Ravi Kumar").unwrap();
    form.set_field(RecruiterField::Phone, "9876543210").unwrap();
    form.toggle_role(HiringRole::Chat);
    form.set_field(RecruiterField::MonthlyVolume, "1-10").unwrap();
    form.set_field(RecruiterField::WillingToPay, "yes").unwrap();
    let status = form.status_handle();

    let (outcome, ()) = tokio::join!(form.submit(), async {
        sink.entered.notified().await;
        assert_eq!(status.get(), SubmitStatus::Submitting);
        assert_eq!(status.submit_label(), SUBMITTING_LABEL);
        sink.release.notify_one();
    });

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!status.is_submitting());
    assert_eq!(status.submit_label(), RecruiterForm::CALL_TO_ACTION);
    assert_eq!(status.submit_error(), Some(SINK_FAILED_MESSAGE));
    assert!(paths.all().is_empty());
}

