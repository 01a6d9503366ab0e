use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    ApplicationId, ApplicationStatus, Category, FormOptions, RegistrationSubmission,
};
use super::service::{RegistrationService, RegistrationServiceError};
use super::store::{ApplicationFilter, StoreError};

/// Router builder exposing intake and review endpoints.
pub fn registration_router(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route(
            "/api/v1/artists/applications",
            post(submit_handler).get(list_handler),
        )
        .route(
            "/api/v1/artists/applications/:application_id",
            get(detail_handler).delete(delete_handler),
        )
        .route(
            "/api/v1/artists/applications/:application_id/status",
            post(status_handler),
        )
        .route("/api/v1/artists/stats", get(stats_handler))
        .route("/api/v1/artists/options", get(options_handler))
        .with_state(service)
}

/// Dashboard query string. Empty values mean "match all".
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> Result<ApplicationFilter, String> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                Category::from_label(raw).ok_or_else(|| format!("unknown category '{raw}'"))?,
            ),
        };
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_status(raw)?),
        };

        Ok(ApplicationFilter {
            search: self.search.unwrap_or_default(),
            category,
            status,
        })
    }
}

/// Review decision body. The status label is read the same way as the list filter.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusChange {
    pub(crate) status: String,
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, String> {
    ApplicationStatus::from_label(raw).ok_or_else(|| format!("unknown status '{}'", raw.trim()))
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<RegistrationService>>,
    axum::Json(submission): axum::Json<RegistrationSubmission>,
) -> Response {
    match service.submit(submission).await {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(RegistrationServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "errors": error.field_messages(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RegistrationServiceError::InFlight(_)) => {
            let payload = json!({
                "error": "submission already in progress",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other),
    }
}

pub(crate) async fn list_handler(
    State(service): State<Arc<RegistrationService>>,
    Query(query): Query<ListQuery>,
) -> Response {
    match query.into_filter() {
        Ok(filter) => {
            let records = service.list(&filter);
            (StatusCode::OK, axum::Json(records)).into_response()
        }
        Err(message) => {
            (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": message }))).into_response()
        }
    }
}

pub(crate) async fn detail_handler(
    State(service): State<Arc<RegistrationService>>,
    Path(application_id): Path<String>,
) -> Response {
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn status_handler(
    State(service): State<Arc<RegistrationService>>,
    Path(application_id): Path<String>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Response {
    let status = match parse_status(&change.status) {
        Ok(status) => status,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": message })))
                .into_response()
        }
    };
    match service.set_status(&ApplicationId(application_id), status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn delete_handler(
    State(service): State<Arc<RegistrationService>>,
    Path(application_id): Path<String>,
) -> StatusCode {
    service.delete(&ApplicationId(application_id));
    StatusCode::NO_CONTENT
}

pub(crate) async fn stats_handler(State(service): State<Arc<RegistrationService>>) -> Response {
    (StatusCode::OK, axum::Json(service.stats())).into_response()
}

pub(crate) async fn options_handler() -> Response {
    (StatusCode::OK, axum::Json(FormOptions::collect())).into_response()
}

fn store_error_response(error: RegistrationServiceError) -> Response {
    match error {
        RegistrationServiceError::Store(StoreError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, &error)
        }
        RegistrationServiceError::Store(StoreError::InvalidTransition { .. }) => {
            error_response(StatusCode::CONFLICT, &error)
        }
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other),
    }
}

fn error_response(status: StatusCode, error: &RegistrationServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
