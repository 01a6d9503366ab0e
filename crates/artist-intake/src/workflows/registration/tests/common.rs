use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::registration::seed::demo_records;
use crate::workflows::registration::{
    registration_router, validate, ApplicationStore, ArtistProfile, RegistrationService,
    RegistrationSubmission, TransitionPolicy,
};

pub(super) fn submission() -> RegistrationSubmission {
    RegistrationSubmission {
        name: "Jo Lee".to_string(),
        email: "jo@x.com".to_string(),
        phone: "+14155550100".to_string(),
        category: "DJ".to_string(),
        city: "Reno".to_string(),
        state: "Delhi".to_string(),
        fee: Some(500.0),
        experience: "Beginner (0-2 years)".to_string(),
        skills: vec!["Live Performance".to_string()],
        bio: "x".repeat(60),
        portfolio: String::new(),
        availability: vec!["Weekends".to_string()],
    }
}

pub(super) fn submission_from(email: &str) -> RegistrationSubmission {
    let mut submission = submission();
    submission.email = email.to_string();
    submission
}

pub(super) fn profile() -> ArtistProfile {
    validate(&submission()).expect("fixture submission is valid")
}

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn seeded_store() -> ApplicationStore {
    ApplicationStore::with_records(demo_records(), TransitionPolicy::Guarded)
}

pub(super) fn build_service() -> RegistrationService {
    RegistrationService::new(seeded_store(), Duration::ZERO)
}

pub(super) fn empty_service(delay: Duration) -> RegistrationService {
    RegistrationService::new(ApplicationStore::default(), delay)
}

pub(super) fn router_with_service(service: RegistrationService) -> axum::Router {
    registration_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
