pub mod leaderboard;
pub mod user;
