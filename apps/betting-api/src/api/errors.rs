use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::BettingError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 502 Bad Gateway error
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<BettingError> for ApiError {
    fn from(err: BettingError) -> Self {
        match err {
            BettingError::BetNotFound(_) | BettingError::MatchNotFound(_) => {
                Self::not_found(err.to_string())
            }
            BettingError::MatchNotPlayed(_) => Self::conflict(err.to_string()),
            BettingError::Upstream(reason) => {
                tracing::error!(error = %reason, "Championship service failure");
                Self::bad_gateway("Championship service unavailable")
            }
            BettingError::Storage(message) => {
                tracing::error!(error = %message, "Storage failure");
                Self::internal_server_error("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn not_found_errors_map_to_404() {
        let err = ApiError::from(BettingError::BetNotFound(Uuid::new_v4()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = ApiError::from(BettingError::MatchNotFound(Uuid::new_v4()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn unplayed_match_is_a_conflict() {
        let match_id = Uuid::new_v4();
        let err = ApiError::from(BettingError::MatchNotPlayed(match_id));

        assert_eq!(err.status, StatusCode::CONFLICT);
        assert!(err.message.contains(&match_id.to_string()));
    }

    #[test]
    fn upstream_failure_is_bad_gateway() {
        let err = ApiError::from(BettingError::Upstream("connection refused".into()));

        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(!err.message.contains("connection refused"));
    }

    #[test]
    fn storage_details_are_hidden() {
        let err = ApiError::from(BettingError::Storage("disk full".into()));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("disk full"));
    }
}
