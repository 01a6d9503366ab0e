use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::workflows::registration::{
    ApplicationFilter, ApplicationId, ApplicationStatus, Field, RegistrationServiceError,
    StoreError,
};

#[tokio::test]
async fn submit_adds_pending_record_with_fresh_id() {
    let service = build_service();

    let record = service
        .submit(submission())
        .await
        .expect("submission accepted");

    assert_eq!(record.status, ApplicationStatus::Pending);
    assert_eq!(record.profile.city, "Reno");
    let listed = service.list(&ApplicationFilter::default());
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].id, record.id);
    assert_eq!(service.stats().pending, 2);
    assert_eq!(service.in_flight(), 0);
}

#[tokio::test]
async fn rejected_submission_leaves_store_unchanged() {
    let service = build_service();
    let mut candidate = submission();
    candidate.bio = "too short".to_string();

    match service.submit(candidate).await {
        Err(RegistrationServiceError::Validation(error)) => {
            assert_eq!(error.fields().collect::<Vec<_>>(), vec![Field::Bio]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(service.stats().total, 4);
}

#[tokio::test(start_paused = true)]
async fn duplicate_submission_is_refused_while_in_flight() {
    let service = Arc::new(empty_service(Duration::from_secs(2)));

    let first = tokio::spawn({
        let service = service.clone();
        async move { service.submit(submission()).await }
    });
    tokio::task::yield_now().await;
    assert_eq!(service.in_flight(), 1);

    match service.submit(submission_from("JO@x.com")).await {
        Err(RegistrationServiceError::InFlight(key)) => assert_eq!(key, "jo@x.com"),
        other => panic!("expected in-flight refusal, got {other:?}"),
    }

    let other_artist = service
        .submit(submission_from("sam@x.com"))
        .await
        .expect("different submitter is not blocked");
    assert_eq!(other_artist.profile.email, "sam@x.com");

    let record = first
        .await
        .expect("task joins")
        .expect("first submission lands");
    assert_eq!(service.in_flight(), 0);
    assert_eq!(service.stats().total, 2);
    assert_eq!(service.get(&record.id).expect("stored").id, record.id);
}

#[test]
fn set_status_and_delete_delegate_to_store() {
    let service = build_service();
    let id = ApplicationId("2".to_string());

    let record = service
        .set_status(&id, ApplicationStatus::Rejected)
        .expect("pending can be rejected");
    assert_eq!(record.status, ApplicationStatus::Rejected);

    match service.set_status(&id, ApplicationStatus::Approved) {
        Err(RegistrationServiceError::Store(StoreError::InvalidTransition { .. })) => {}
        other => panic!("expected invalid transition, got {other:?}"),
    }

    assert!(service.delete(&id).is_some());
    assert!(service.delete(&id).is_none());
    match service.get(&id) {
        Err(RegistrationServiceError::Store(StoreError::NotFound(missing))) => {
            assert_eq!(missing, id)
        }
        other => panic!("expected not found, got {other:?}"),
    }
}
