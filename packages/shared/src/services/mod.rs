pub mod errors;
pub mod leaderboard_service;
pub mod ranking;
