pub mod leaderboard_service_errors;
