use artist_intake::error::AppError;
use artist_intake::workflows::registration::seed::demo_records;
use artist_intake::workflows::registration::{
    validate, ApplicationFilter, ApplicationRecord, ApplicationStats, ApplicationStatus,
    ApplicationStore, ArtistProfile, Category, RegistrationService, RegistrationSubmission,
    TransitionPolicy, ValidationError,
};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Path to a JSON registration submission
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Case-insensitive search across name, email, and city
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Only list one category (e.g. "DJ", "Singer/Vocalist")
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<Category>,
    /// Only list one status (pending, approved, rejected)
    #[arg(long, value_parser = parse_status)]
    pub(crate) status: Option<ApplicationStatus>,
    /// Simulated acknowledgement delay for the sample submission, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub(crate) delay_ms: u64,
    /// Allow any status to overwrite any other
    #[arg(long)]
    pub(crate) unguarded: bool,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_label(raw.trim()).ok_or_else(|| {
        let known: Vec<_> = Category::ALL.iter().map(|item| item.label()).collect();
        format!("unknown category '{raw}' (expected one of: {})", known.join(", "))
    })
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, String> {
    ApplicationStatus::from_label(raw)
        .ok_or_else(|| format!("unknown status '{raw}' (expected pending, approved, or rejected)"))
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let submission: RegistrationSubmission = serde_json::from_str(&raw)?;

    match validate(&submission) {
        Ok(profile) => {
            render_profile(&profile);
            Ok(())
        }
        Err(error) => {
            render_validation_errors(&error);
            Err(error.into())
        }
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        search,
        category,
        status,
        delay_ms,
        unguarded,
    } = args;

    let policy = if unguarded {
        TransitionPolicy::Unguarded
    } else {
        TransitionPolicy::Guarded
    };
    let store = ApplicationStore::with_records(demo_records(), policy);
    let service = RegistrationService::new(store, Duration::from_millis(delay_ms));

    println!("Artist intake demo");
    println!("\nSubmitting sample application for {}", sample_submission().name);
    let record = service.submit(sample_submission()).await?;
    println!("- accepted as {} ({})", record.id, record.status);

    let mut rejected = sample_submission();
    rejected.email = "short.bio@example.com".to_string();
    rejected.bio = "too short".to_string();
    println!("\nSubmitting an application with a short bio");
    if let Err(error) = service.submit(rejected).await {
        println!("- refused: {error}");
    }

    let approved = service.set_status(&record.id, ApplicationStatus::Approved)?;
    println!("\nReviewed {}: {}", approved.id, approved.status);

    render_stats(&service.stats());

    let filter = ApplicationFilter {
        search,
        category,
        status,
    };
    render_roster(&service.list(&filter));
    Ok(())
}

fn sample_submission() -> RegistrationSubmission {
    RegistrationSubmission {
        name: "Jo Lee".to_string(),
        email: "jo@x.com".to_string(),
        phone: "+14155550100".to_string(),
        category: Category::Dj.label().to_string(),
        city: "Reno".to_string(),
        state: "Delhi".to_string(),
        fee: Some(500.0),
        experience: "Beginner (0-2 years)".to_string(),
        skills: vec!["Live Performance".to_string(), "Audio Production".to_string()],
        bio: "Club and festival DJ blending house and regional folk samples into long-form sets for late-night crowds.".to_string(),
        portfolio: String::new(),
        availability: vec!["Weekends".to_string(), "Evenings".to_string()],
    }
}

fn render_profile(profile: &ArtistProfile) {
    println!("Submission is valid");
    println!("- {} <{}>, {}", profile.name, profile.email, profile.phone);
    println!(
        "- {} / {} based in {}, {}",
        profile.category.label(),
        profile.experience.label(),
        profile.city,
        profile.state.label()
    );
    println!("- fee {:.2}", profile.fee);
}

fn render_validation_errors(error: &ValidationError) {
    println!("Submission is invalid");
    for (field, message) in error.field_messages() {
        println!("- {field}: {message}");
    }
}

fn render_stats(stats: &ApplicationStats) {
    println!("\nDashboard totals");
    println!(
        "- {} total, {} pending, {} approved, {} rejected",
        stats.total, stats.pending, stats.approved, stats.rejected
    );
}

fn render_roster(records: &[ApplicationRecord]) {
    if records.is_empty() {
        println!("\nApplications: none match");
        return;
    }

    println!("\nApplications");
    for record in records {
        let profile = &record.profile;
        println!(
            "- {} | {} | {} | {}, {} | {} | submitted {}",
            record.id,
            profile.name,
            profile.category.label(),
            profile.city,
            profile.state.label(),
            record.status,
            record.submitted_at.format("%Y-%m-%d")
        );
    }
}
