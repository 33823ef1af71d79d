use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use moodboard_core::{MoodServiceError, MoodValidationError};
use serde::Serialize;
use thiserror::Error;

/// Request failure surfaced to HTTP clients.
///
/// `Display` is the client-facing message; internal causes are only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid mood value")]
    InvalidMood(#[from] MoodValidationError),

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Failed to save mood")]
    SaveFailed(#[source] MoodServiceError),

    #[error("Failed to fetch moods")]
    FetchFailed(#[source] MoodServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidMood(_) | Self::MalformedPayload => StatusCode::BAD_REQUEST,
            Self::SaveFailed(_) | Self::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure envelope: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidMood(err) => {
                warn!("event=request_rejected module=http status=error error_code=invalid_mood error={err}");
            }
            Self::MalformedPayload => {
                warn!("event=request_rejected module=http status=error error_code=malformed_payload");
            }
            Self::SaveFailed(err) => {
                error!("event=mood_submit module=http status=error error_code=save_failed error={err}");
            }
            Self::FetchFailed(err) => {
                error!("event=mood_list module=http status=error error_code=fetch_failed error={err}");
            }
        }

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};
    use http_body_util::BodyExt;
    use moodboard_core::MoodServiceError;

    #[tokio::test]
    async fn internal_failures_hide_details() {
        let response = ApiError::SaveFailed(MoodServiceError::StorePoisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to save mood");
        assert!(!bytes.windows(8).any(|window| window == b"poisoned"));
    }

    #[test]
    fn fetch_failure_maps_to_server_error() {
        let err = ApiError::FetchFailed(MoodServiceError::StorePoisoned);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch moods");
    }
}
