use std::fmt;

#[derive(Debug, PartialEq)]
pub enum LeaderboardServiceError {
    UserNotFound,
    ValidationError(String),
}

impl fmt::Display for LeaderboardServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LeaderboardServiceError::UserNotFound => write!(f, "User not found"),
            LeaderboardServiceError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for LeaderboardServiceError {}
