use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest rating a user can hold.
pub const RATING_MIN: i32 = 100;
/// Highest rating a user can hold.
pub const RATING_MAX: i32 = 5000;

/// Clamps a rating into the supported `[RATING_MIN, RATING_MAX]` range.
pub fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(RATING_MIN, RATING_MAX)
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub rating: i32,
    /// Dense competition rank. Derived, only meaningful right after a
    /// ranking pass over a specific snapshot.
    pub rank: u64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: u64, username: String, rating: i32) -> Self {
        User {
            id,
            username,
            rating,
            rank: 0,
            created_at: Utc::now(),
        }
    }
}
