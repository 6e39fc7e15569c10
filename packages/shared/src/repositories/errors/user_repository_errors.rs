#[derive(Debug, PartialEq)]
pub enum UserRepositoryError {
    NotFound,
}

impl std::fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRepositoryError::NotFound => write!(f, "User not found"),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
