use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::simulator::RatingSimulator;
use api::state::AppState;
use shared::repositories::user_repository::InMemoryUserRepository;
use shared::services::leaderboard_service::LeaderboardService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // Composition root: the store is built here and handed to the service
    // layer and the background simulator, never held globally.
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let leaderboard_service = Arc::new(LeaderboardService::new(user_repository.clone()));

    // Auto-seed on startup
    let summary = leaderboard_service.seed_users().await;
    info!("Store ready with {} users", summary.total);

    let simulator = RatingSimulator::new(user_repository, Duration::from_secs(2));
    tokio::spawn(simulator.run());

    let app = api::app(AppState {
        leaderboard_service,
    });

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
