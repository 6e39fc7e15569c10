use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// One page of the ranked leaderboard, with totals computed from the full
/// (unpaginated) user count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardPage {
    pub users: Vec<User>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Outcome of a bulk-seed attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedSummary {
    pub seeded: bool,
    pub total: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateRatingRequest {
    pub user_id: u64,
    pub rating: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
