use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app_state::AppState;
use crate::error::Error;
use crate::storage::info::StorageSnapshot;

pub type SharedState = Arc<AppState>;

/// Wire format for `GET /`. Field names and order match what the
/// dashboard consumer expects.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageResponse {
    pub available_storage: u64,
    pub used_storage: u64,
    pub total_storage: u64,
}

impl From<StorageSnapshot> for StorageResponse {
    fn from(snapshot: StorageSnapshot) -> Self {
        Self {
            available_storage: snapshot.available_bytes,
            used_storage: snapshot.used_bytes,
            total_storage: snapshot.total_bytes,
        }
    }
}

#[derive(Serialize, Debug)]
struct ErrorBody {
    error: String,
}

/// Maps a failed filesystem-statistics query to an HTTP 500 response.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to read storage statistics: {}", self.0);
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Handler for `GET /`: query the OS facility once and serialize the
/// snapshot. Nothing is cached across requests.
pub async fn storage_handler(
    State(state): State<SharedState>,
) -> Result<Json<StorageResponse>, ApiError> {
    let snapshot = state.reader.snapshot()?;
    Ok(Json(StorageResponse::from(snapshot)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_snapshot() {
        let snapshot = StorageSnapshot {
            total_bytes: 1000,
            used_bytes: 400,
            available_bytes: 600,
        };
        let response = StorageResponse::from(snapshot);
        assert_eq!(response.available_storage, 600);
        assert_eq!(response.used_storage, 400);
        assert_eq!(response.total_storage, 1000);
    }

    #[test]
    fn test_response_serializes_expected_keys() {
        let response = StorageResponse {
            available_storage: 600,
            used_storage: 400,
            total_storage: 1000,
        };
        let value = serde_json::to_value(response).expect("serialize");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("available_storage"));
        assert!(object.contains_key("used_storage"));
        assert!(object.contains_key("total_storage"));
    }
}
