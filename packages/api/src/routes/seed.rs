use axum::{extract::State, routing::post, Json, Router};
use shared::models::leaderboard::SeedResponse;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/seed", post(seed_database))
}

async fn seed_database(State(state): State<AppState>) -> Json<SeedResponse> {
    let summary = state.leaderboard_service.seed_users().await;
    let message = if summary.seeded {
        format!("Database seeded with {} users", summary.total)
    } else {
        "Database already seeded".to_string()
    };

    Json(SeedResponse {
        message,
        total: summary.total,
    })
}
