use std::sync::Arc;

use shared::services::leaderboard_service::LeaderboardService;

#[derive(Clone)]
pub struct AppState {
    pub leaderboard_service: Arc<LeaderboardService>,
}
