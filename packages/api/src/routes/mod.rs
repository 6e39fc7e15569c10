pub mod health;
pub mod leaderboard;
pub mod rating;
pub mod search;
pub mod seed;
