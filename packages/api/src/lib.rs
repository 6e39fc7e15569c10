use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod simulator;
pub mod state;

use state::AppState;

/// Assembles the full API router so the binary and the integration tests
/// serve the exact same application.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::leaderboard::routes())
        .merge(routes::search::routes())
        .merge(routes::seed::routes())
        .merge(routes::rating::routes())
        .layer(cors)
        .with_state(state)
}
