//! End-to-end scenarios for artist registration and manager review, driven through the
//! public service facade and HTTP router only.

use std::sync::Arc;
use std::time::Duration;

use artist_intake::workflows::registration::seed::demo_records;
use artist_intake::workflows::registration::{
    registration_router, ApplicationFilter, ApplicationStatus, ApplicationStore, Category, Field,
    RegistrationService, RegistrationServiceError, RegistrationSubmission, TransitionPolicy,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn reference_submission() -> RegistrationSubmission {
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

fn seeded_service() -> RegistrationService {
    let store = ApplicationStore::with_records(demo_records(), TransitionPolicy::Guarded);
    RegistrationService::new(store, Duration::ZERO)
}

#[tokio::test]
async fn submission_then_review_round_trip() {
    let service = seeded_service();

    let record = service
        .submit(reference_submission())
        .await
        .expect("reference submission is valid");
    assert_eq!(record.status, ApplicationStatus::Pending);

    let everything = service.list(&ApplicationFilter::default());
    assert_eq!(everything[0].id, record.id);
    assert_eq!(
        everything.iter().filter(|item| item.id == record.id).count(),
        1
    );

    let lowercase_city = service.list(&ApplicationFilter::search("reno"));
    assert_eq!(lowercase_city.len(), 1);
    assert_eq!(lowercase_city[0].id, record.id);

    let before = service.stats();
    service
        .set_status(&record.id, ApplicationStatus::Approved)
        .expect("pending application can be approved");
    let after = service.stats();
    assert_eq!(after.pending + 1, before.pending);
    assert_eq!(after.approved, before.approved + 1);

    let djs = service.list(&ApplicationFilter::default().with_category(Category::Dj));
    assert_eq!(djs.len(), 1);

    assert!(service.delete(&record.id).is_some());
    assert!(service.delete(&record.id).is_none());
    assert_eq!(service.stats().total, before.total - 1);
}

#[tokio::test]
async fn short_bio_is_rejected_without_touching_the_roster() {
    let service = seeded_service();
    let mut submission = reference_submission();
    submission.bio = "too short".to_string();

    match service.submit(submission).await {
        Err(RegistrationServiceError::Validation(error)) => {
            assert_eq!(error.fields().collect::<Vec<_>>(), vec![Field::Bio]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(service.stats().total, demo_records().len());
}

#[tokio::test]
async fn http_surface_accepts_and_lists_submissions() {
    let router = registration_router(Arc::new(seeded_service()));

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/artists/applications")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&reference_submission()).expect("serializable"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .oneshot(
            Request::get("/api/v1/artists/applications?status=pending")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let records: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let names: Vec<_> = records
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|record| record["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Jo Lee", "Marcus Rodriguez"]);
}
