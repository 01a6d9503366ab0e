use artist_intake::config::IntakeConfig;
use artist_intake::workflows::registration::seed::demo_records;
use artist_intake::workflows::registration::{ApplicationStore, RegistrationService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Compose the store and service the way the intake settings ask for.
pub(crate) fn build_registration_service(config: &IntakeConfig) -> RegistrationService {
    let records = if config.seed_demo_data {
        demo_records()
    } else {
        Vec::new()
    };
    info!(
        seeded = records.len(),
        policy = ?config.status_policy,
        delay_ms = config.submission_delay.as_millis() as u64,
        "registration store initialised"
    );

    let store = ApplicationStore::with_records(records, config.status_policy);
    RegistrationService::new(store, config.submission_delay)
}
