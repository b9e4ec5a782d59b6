use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::{Briefing, BriefingError, BriefingPipeline, BriefingStore, DeleteOutcome};
use std::sync::Arc;
use tracing::error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<BriefingPipeline>,
    pub store: BriefingStore,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/briefing",
            get(list_briefings)
                .post(ingest_briefing)
                .delete(delete_briefing),
        )
        .with_state(state)
}

/// Error type for HTTP handlers: a status code plus the human-readable
/// message that becomes the `{error}` payload. Full detail is logged
/// server-side; nothing else leaks into the response body.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<BriefingError> for ApiError {
    fn from(err: BriefingError) -> Self {
        error!("request failed: {err}");
        let status = match &err {
            BriefingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct HealthResponse {
    healthy: bool,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn list_briefings(State(state): State<AppState>) -> Json<Vec<Briefing>> {
    Json(state.store.list())
}

async fn ingest_briefing(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<Briefing>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;
    let briefing = state.pipeline.ingest(&bytes, &filename)?;
    Ok(Json(briefing))
}

#[derive(Deserialize)]
struct DeleteParams {
    id: Option<String>,
}

async fn delete_briefing(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let id: i64 = params
        .id
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ApiError::bad_request("Missing or non-numeric id"))?;

    match state.store.delete(id)? {
        DeleteOutcome::NoCollection => Err(ApiError::not_found("No briefings recorded yet")),
        // Deleting an id with no matching record is still a success.
        DeleteOutcome::Deleted | DeleteOutcome::NoSuchRecord => {
            Ok(Json(json!({ "success": true })))
        }
    }
}
