use axum::{extract::State, routing::post, Json, Router};
use shared::models::leaderboard::{MessageResponse, UpdateRatingRequest};
use tracing::error;

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/update-rating", post(update_rating))
}

async fn update_rating(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRatingRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .leaderboard_service
        .update_rating(payload.user_id, payload.rating)
        .await
        .map_err(|e| {
            error!("Failed to update rating for user {}: {}", payload.user_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse {
        message: "Rating updated successfully".to_string(),
    }))
}
