use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::domain::{
    ApplicationId, ApplicationRecord, ApplicationStats, ApplicationStatus, ArtistProfile, Category,
};
use super::lifecycle::TransitionPolicy;

/// Store failures surfaced to callers; deletes of unknown ids are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("application {0} not found")]
    NotFound(ApplicationId),
    #[error("application {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: ApplicationId,
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
}

/// Dashboard query: free-text search plus optional exact category and status filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub search: String,
    pub category: Option<Category>,
    pub status: Option<ApplicationStatus>,
}

impl ApplicationFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        self.matches_term(&self.search.to_lowercase(), record)
    }

    fn matches_term(&self, needle: &str, record: &ApplicationRecord) -> bool {
        let profile = &record.profile;
        let matches_search = needle.is_empty()
            || profile.name.to_lowercase().contains(needle)
            || profile.email.to_lowercase().contains(needle)
            || profile.city.to_lowercase().contains(needle);
        let matches_category = self
            .category
            .map_or(true, |category| profile.category == category);
        let matches_status = self.status.map_or(true, |status| record.status == status);

        matches_search && matches_category && matches_status
    }
}

/// In-memory roster of applications, newest first.
#[derive(Debug, Clone)]
pub struct ApplicationStore {
    records: Vec<ApplicationRecord>,
    policy: TransitionPolicy,
    next_sequence: u64,
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::new(TransitionPolicy::default())
    }
}

impl ApplicationStore {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self::with_records(Vec::new(), policy)
    }

    /// Start from existing records, kept in the order given (expected newest first).
    /// Later records repeating an earlier id are dropped.
    pub fn with_records(records: Vec<ApplicationRecord>, policy: TransitionPolicy) -> Self {
        let mut unique: Vec<ApplicationRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|kept| kept.id == record.id) {
                warn!(application_id = %record.id, "dropping record with duplicate id");
                continue;
            }
            unique.push(record);
        }

        Self {
            records: unique,
            policy,
            next_sequence: 1,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn add(&mut self, profile: ArtistProfile) -> &ApplicationRecord {
        self.add_at(profile, Utc::now())
    }

    /// Append a pending record at the front with a fresh id and the given timestamp.
    pub fn add_at(
        &mut self,
        profile: ArtistProfile,
        submitted_at: DateTime<Utc>,
    ) -> &ApplicationRecord {
        let id = self.next_id();
        info!(application_id = %id, category = profile.category.label(), "application added");
        self.records.insert(
            0,
            ApplicationRecord {
                id,
                profile,
                submitted_at,
                status: ApplicationStatus::Pending,
            },
        );
        &self.records[0]
    }

    pub fn get(&self, id: &ApplicationId) -> Option<&ApplicationRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn set_status(
        &mut self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<&ApplicationRecord, StoreError> {
        let policy = self.policy;
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if !policy.permits(record.status, status) {
            return Err(StoreError::InvalidTransition {
                id: id.clone(),
                from: record.status,
                to: status,
            });
        }

        info!(
            application_id = %id,
            from = record.status.label(),
            to = status.label(),
            "application status changed"
        );
        record.status = status;
        Ok(record)
    }

    /// Remove the record with `id`; returns `None` when nothing matched.
    pub fn delete(&mut self, id: &ApplicationId) -> Option<ApplicationRecord> {
        match self.records.iter().position(|record| &record.id == id) {
            Some(index) => {
                info!(application_id = %id, "application deleted");
                Some(self.records.remove(index))
            }
            None => {
                debug!(application_id = %id, "delete ignored for unknown application");
                None
            }
        }
    }

    /// Records matching `filter`, in store order. Borrowing the store keeps the view
    /// in step with the latest mutation.
    pub fn filtered_view<'a>(
        &'a self,
        filter: &'a ApplicationFilter,
    ) -> impl Iterator<Item = &'a ApplicationRecord> + 'a {
        let needle = filter.search.to_lowercase();
        self.records
            .iter()
            .filter(move |record| filter.matches_term(&needle, record))
    }

    // Full scan per call; fine at dashboard sizes.
    pub fn stats(&self) -> ApplicationStats {
        self.records
            .iter()
            .fold(ApplicationStats::default(), |stats, record| {
                stats.record(record.status)
            })
    }

    fn next_id(&mut self) -> ApplicationId {
        loop {
            let candidate = ApplicationId(format!("artist-{:06}", self.next_sequence));
            self.next_sequence += 1;
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
