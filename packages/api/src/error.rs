use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::leaderboard::ErrorResponse;
use shared::services::errors::leaderboard_service_errors::LeaderboardServiceError;

#[derive(Debug)]
pub enum ApiError {
    LeaderboardService(LeaderboardServiceError),
}

impl From<LeaderboardServiceError> for ApiError {
    fn from(error: LeaderboardServiceError) -> Self {
        ApiError::LeaderboardService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::LeaderboardService(LeaderboardServiceError::UserNotFound) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            ApiError::LeaderboardService(LeaderboardServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
