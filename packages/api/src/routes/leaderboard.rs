use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shared::models::leaderboard::LeaderboardPage;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    page: Option<usize>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/leaderboard", get(get_leaderboard))
}

async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Json<LeaderboardPage> {
    let page = params.page.unwrap_or(1);
    Json(state.leaderboard_service.get_leaderboard(page).await)
}
