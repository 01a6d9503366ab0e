use std::collections::HashSet;

use super::common::*;
use crate::workflows::registration::seed::demo_records;
use crate::workflows::registration::{
    ApplicationFilter, ApplicationId, ApplicationStatus, ApplicationStore, Category, StoreError,
    TransitionPolicy,
};

#[test]
fn add_places_new_pending_record_at_front() {
    let mut store = seeded_store();
    let before = store.len();

    let id = store.add_at(profile(), submitted_at()).id.clone();

    let filter = ApplicationFilter::default();
    let view: Vec<_> = store.filtered_view(&filter).collect();
    assert_eq!(view.len(), before + 1);
    assert_eq!(view[0].id, id);
    assert_eq!(view[0].status, ApplicationStatus::Pending);
    assert_eq!(view[0].submitted_at, submitted_at());
    assert_eq!(view.iter().filter(|record| record.id == id).count(), 1);
}

#[test]
fn ids_stay_unique_across_adds_and_deletes() {
    let mut store = ApplicationStore::default();
    let mut seen = HashSet::new();
    for _ in 0..5 {
        let id = store.add(profile()).id.clone();
        assert!(seen.insert(id));
    }

    let first = store.records()[4].id.clone();
    store.delete(&first);
    let id = store.add(profile()).id.clone();
    assert!(seen.insert(id), "deleted ids are not reissued");
}

#[test]
fn generated_ids_skip_injected_collisions() {
    let mut seeded = seeded_store().records().to_vec();
    seeded[0].id = ApplicationId("artist-000001".to_string());
    let mut store = ApplicationStore::with_records(seeded, TransitionPolicy::Guarded);

    let id = store.add(profile()).id.clone();
    assert_eq!(id, ApplicationId("artist-000002".to_string()));
}

#[test]
fn injected_duplicate_ids_keep_only_the_first_record() {
    let mut records = demo_records();
    let mut repeated = demo_records();
    repeated[0].status = ApplicationStatus::Pending;
    records.extend(repeated);

    let mut store = ApplicationStore::with_records(records, TransitionPolicy::Guarded);
    assert_eq!(store.len(), 4);

    let first = store
        .get(&ApplicationId("1".to_string()))
        .expect("seeded record");
    assert_eq!(first.status, ApplicationStatus::Approved);

    let id = ApplicationId("1".to_string());
    assert!(store.delete(&id).is_some());
    assert!(store.get(&id).is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn approving_moves_counts_from_pending_to_approved() {
    let mut store = seeded_store();
    let before = store.stats();
    assert_eq!(before.total, 4);
    assert_eq!(before.pending, 1);
    assert_eq!(before.approved, 2);
    assert_eq!(before.rejected, 1);

    let id = ApplicationId("2".to_string());
    let record = store
        .set_status(&id, ApplicationStatus::Approved)
        .expect("pending record can be approved");
    assert_eq!(record.status, ApplicationStatus::Approved);

    let after = store.stats();
    assert_eq!(after.pending, before.pending - 1);
    assert_eq!(after.approved, before.approved + 1);
    assert_eq!(after.total, before.total);
}

#[test]
fn guarded_store_rejects_moves_out_of_terminal_states() {
    let mut store = seeded_store();
    let id = ApplicationId("1".to_string());

    match store.set_status(&id, ApplicationStatus::Rejected) {
        Err(StoreError::InvalidTransition { from, to, .. }) => {
            assert_eq!(from, ApplicationStatus::Approved);
            assert_eq!(to, ApplicationStatus::Rejected);
        }
        other => panic!("expected invalid transition, got {other:?}"),
    }
    assert_eq!(
        store.get(&id).map(|record| record.status),
        Some(ApplicationStatus::Approved)
    );
}

#[test]
fn unguarded_store_overwrites_any_status() {
    let records = seeded_store().records().to_vec();
    let mut store = ApplicationStore::with_records(records, TransitionPolicy::Unguarded);
    let id = ApplicationId("4".to_string());

    store
        .set_status(&id, ApplicationStatus::Pending)
        .expect("unguarded policy permits reopening");
    assert_eq!(store.stats().pending, 2);
}

#[test]
fn set_status_reports_unknown_ids() {
    let mut store = seeded_store();
    let missing = ApplicationId("missing".to_string());
    assert_eq!(
        store.set_status(&missing, ApplicationStatus::Approved).err(),
        Some(StoreError::NotFound(missing))
    );
}

#[test]
fn delete_is_idempotent() {
    let mut store = seeded_store();
    let id = ApplicationId("3".to_string());

    let removed = store.delete(&id).expect("record existed");
    assert_eq!(removed.profile.name, "Emma Chen");
    assert_eq!(store.len(), 3);

    assert!(store.delete(&id).is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn search_is_case_insensitive_across_name_email_and_city() {
    let mut store = seeded_store();
    store.add_at(profile(), submitted_at());

    let by_city = ApplicationFilter::search("reno");
    let names: Vec<_> = store
        .filtered_view(&by_city)
        .map(|record| record.profile.name.as_str())
        .collect();
    assert_eq!(names, vec!["Jo Lee"]);

    let by_email = ApplicationFilter::search("EMMA.CHEN@");
    assert_eq!(store.filtered_view(&by_email).count(), 1);

    let by_name = ApplicationFilter::search("thomp");
    assert_eq!(store.filtered_view(&by_name).count(), 1);
}

#[test]
fn filters_combine_with_search() {
    let store = seeded_store();

    let approved = ApplicationFilter::default().with_status(ApplicationStatus::Approved);
    assert_eq!(store.filtered_view(&approved).count(), 2);

    let approved_dancers = approved.clone().with_category(Category::Dancer);
    let ids: Vec<_> = store
        .filtered_view(&approved_dancers)
        .map(|record| record.id.as_str())
        .collect();
    assert_eq!(ids, vec!["3"]);

    let mismatch = ApplicationFilter::search("marcus").with_status(ApplicationStatus::Approved);
    assert_eq!(store.filtered_view(&mismatch).count(), 0);
}

#[test]
fn filtered_view_leaves_store_untouched() {
    let store = seeded_store();
    let filter = ApplicationFilter::search("no such artist");
    assert_eq!(store.filtered_view(&filter).count(), 0);
    assert_eq!(store.len(), 4);
    assert!(!filter.matches(&store.records()[0]));
}
