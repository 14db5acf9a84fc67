//! Capture two leads into a SQLite database and print what was stored.
//!
//! Run with:
//! ```sh
//! DATABASE_URL=sqlite:demo.sqlite3?mode=rwc cargo run -p supporthire-store --example capture_interest
//! ```

use std::sync::Arc;

use supporthire_forms::fields::HiringRole;
use supporthire_forms::{
    ConfirmationPage, JobSeekerField, JobSeekerForm, RecordingNavigator, RecruiterField,
    RecruiterForm, SubmitOutcome, SUBMISSIONS_COLLECTION,
};
use supporthire_store::{SqliteSubmissionSink, StoreConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = StoreConfig::from_env()?;
    let sink = Arc::new(SqliteSubmissionSink::new(config.connect().await?));
    sink.ensure_table().await?;
    let navigator = Arc::new(RecordingNavigator::new());

    let mut seeker = JobSeekerForm::new(sink.clone(), navigator.clone());
    seeker.set_field_by_name("name", "Priya Sharma")?;
    seeker.set_field_by_name("phone", "+91 98765 43210")?;
    seeker.set_field_by_name("city", "Pune 411001")?;
    seeker.set_field_by_name("jobType", "inbound")?;
    seeker.set_field_by_name("shift", "rotational")?;

    seeker.validate_field_on_blur(JobSeekerField::City);
    if let Some(message) = seeker.errors().get(JobSeekerField::City) {
        info!(message, "city rejected, correcting");
        seeker.set_field(JobSeekerField::City, "Pune")?;
    }
    if seeker.submit().await != SubmitOutcome::Submitted {
        anyhow::bail!("job seeker submission failed: {}", seeker.errors());
    }

    let mut recruiter = RecruiterForm::new(sink.clone(), navigator.clone());
    recruiter.set_field(RecruiterField::CompanyName, "ABC BPO Pvt. Ltd.")?;
    recruiter.set_field(RecruiterField::RecruiterName, "Meera Iyer")?;
    recruiter.set_field(RecruiterField::Phone, "9876543210")?;
    recruiter.toggle_role(HiringRole::InboundVoice);
    recruiter.toggle_role(HiringRole::TechnicalSupport);
    recruiter.set_field(RecruiterField::MonthlyVolume, "11-30")?;
    recruiter.set_field(RecruiterField::WillingToPay, "maybe")?;
    if recruiter.submit().await != SubmitOutcome::Submitted {
        anyhow::bail!("recruiter submission failed: {}", recruiter.errors());
    }

    if let Some(path) = navigator.last() {
        println!("{}", ConfirmationPage::for_path(&path).render());
    }

    for stored in sink.list(SUBMISSIONS_COLLECTION).await? {
        println!(
            "#{} {} {}",
            stored.id,
            stored.kind(),
            serde_json::to_string(&stored.document)?
        );
    }

    Ok(())
}
