use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shared::models::user::User;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search_users))
}

async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    let query = params.q.unwrap_or_default();
    state
        .leaderboard_service
        .search_users(&query)
        .await
        .map(Json)
        .map_err(|e| {
            debug!("Search rejected: {}", e);
            ApiError::from(e)
        })
}
