use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{info, warn};

use super::domain::{
    ApplicationId, ApplicationRecord, ApplicationStats, ApplicationStatus, ArtistProfile,
    RegistrationSubmission,
};
use super::store::{ApplicationFilter, ApplicationStore, StoreError};
use super::validation::{self, ValidationError};

/// Service fronting the store with validation and the simulated acknowledgement delay.
pub struct RegistrationService {
    store: Mutex<ApplicationStore>,
    in_flight: Mutex<HashSet<String>>,
    submission_delay: Duration,
}

impl RegistrationService {
    pub fn new(store: ApplicationStore, submission_delay: Duration) -> Self {
        Self {
            store: Mutex::new(store),
            in_flight: Mutex::new(HashSet::new()),
            submission_delay,
        }
    }

    pub fn submission_delay(&self) -> Duration {
        self.submission_delay
    }

    pub fn validate(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<ArtistProfile, ValidationError> {
        validation::validate(submission)
    }

    /// Validate, hold the submitter's in-flight slot for the acknowledgement delay,
    /// then append the new pending record.
    pub async fn submit(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let profile = match validation::validate(&submission) {
            Ok(profile) => profile,
            Err(error) => {
                let fields: Vec<&str> = error.fields().map(|field| field.name()).collect();
                warn!(?fields, "submission rejected");
                return Err(error.into());
            }
        };

        let _slot = self.claim_slot(&profile.email)?;
        if !self.submission_delay.is_zero() {
            tokio::time::sleep(self.submission_delay).await;
        }

        let record = self.lock_store().add(profile).clone();
        info!(application_id = %record.id, "submission acknowledged");
        Ok(record)
    }

    pub fn in_flight(&self) -> usize {
        self.lock_in_flight().len()
    }

    pub fn get(&self, id: &ApplicationId) -> Result<ApplicationRecord, RegistrationServiceError> {
        self.lock_store()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()).into())
    }

    pub fn list(&self, filter: &ApplicationFilter) -> Vec<ApplicationRecord> {
        self.lock_store().filtered_view(filter).cloned().collect()
    }

    pub fn set_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let mut store = self.lock_store();
        let record = store.set_status(id, status)?;
        Ok(record.clone())
    }

    pub fn delete(&self, id: &ApplicationId) -> Option<ApplicationRecord> {
        self.lock_store().delete(id)
    }

    pub fn stats(&self) -> ApplicationStats {
        self.lock_store().stats()
    }

    fn claim_slot(&self, email: &str) -> Result<InFlightSlot<'_>, RegistrationServiceError> {
        let key = email.to_lowercase();
        let mut pending = self.lock_in_flight();
        if !pending.insert(key.clone()) {
            return Err(RegistrationServiceError::InFlight(key));
        }
        Ok(InFlightSlot {
            registry: &self.in_flight,
            key,
        })
    }

    fn lock_store(&self) -> MutexGuard<'_, ApplicationStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, HashSet<String>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the submitter's key when the submission resolves or is dropped.
struct InFlightSlot<'a> {
    registry: &'a Mutex<HashSet<String>>,
    key: String,
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("a submission for {0} is already in flight")]
    InFlight(String),
}
