use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::models::leaderboard::{LeaderboardPage, SeedSummary};
use crate::models::user::{User, RATING_MAX, RATING_MIN};
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::leaderboard_service_errors::LeaderboardServiceError;
use crate::services::ranking;

const SEED_USER_COUNT: usize = 10_000;

const FIRST_NAMES: &[&str] = &[
    "rahul", "priya", "amit", "sneha", "vikram", "anjali", "raj", "pooja", "arjun", "neha",
    "rohan", "kavya", "aditya", "ishita", "karan", "divya", "sanjay", "meera", "naveen", "riya",
];

const LAST_NAMES: &[&str] = &[
    "kumar", "sharma", "patel", "singh", "gupta", "reddy", "verma", "mathur", "agarwal", "joshi",
    "rao", "burman", "kapoor", "nair", "das", "iyer",
];

pub struct LeaderboardService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        LeaderboardService { repository }
    }

    /// Ranks the full user set and returns the requested page of 50, along
    /// with totals computed from the unpaginated count.
    pub async fn get_leaderboard(&self, page: usize) -> LeaderboardPage {
        let mut users = self.repository.get_all_users().await;
        ranking::calculate_ranks(&mut users);

        let total = users.len();
        let page = page.max(1);
        let page_users = ranking::page(&users, page, ranking::PAGE_SIZE).to_vec();

        LeaderboardPage {
            users: page_users,
            total,
            page,
            total_pages: (total + ranking::PAGE_SIZE - 1) / ranking::PAGE_SIZE,
        }
    }

    /// Substring search with each match carrying its rank in the full ranked
    /// set (not a rank within the match subset), sorted ascending by rank.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, LeaderboardServiceError> {
        if query.is_empty() {
            return Err(LeaderboardServiceError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let mut results = self.repository.search_by_username(query).await;

        let mut all_users = self.repository.get_all_users().await;
        ranking::calculate_ranks(&mut all_users);
        let rank_by_id: HashMap<u64, u64> =
            all_users.iter().map(|user| (user.id, user.rank)).collect();

        for user in &mut results {
            if let Some(rank) = rank_by_id.get(&user.id) {
                user.rank = *rank;
            }
        }
        results.sort_by_key(|user| user.rank);

        Ok(results)
    }

    pub async fn update_rating(
        &self,
        user_id: u64,
        new_rating: i32,
    ) -> Result<(), LeaderboardServiceError> {
        if !(RATING_MIN..=RATING_MAX).contains(&new_rating) {
            return Err(LeaderboardServiceError::ValidationError(format!(
                "Rating must be between {} and {}",
                RATING_MIN, RATING_MAX
            )));
        }

        self.repository
            .update_rating(user_id, new_rating)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => LeaderboardServiceError::UserNotFound,
            })
    }

    /// One-time bulk population with synthetic users. A no-op reporting the
    /// current total when the store already holds users.
    pub async fn seed_users(&self) -> SeedSummary {
        let existing = self.repository.count().await;
        if existing > 0 {
            return SeedSummary {
                seeded: false,
                total: existing,
            };
        }

        info!("Seeding store with {} synthetic users", SEED_USER_COUNT);

        let mut rng = StdRng::from_entropy();
        for _ in 0..SEED_USER_COUNT {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let username = format!("{}_{}{}", first, last, rng.gen_range(0..1000));
            let rating = rng.gen_range(RATING_MIN..=RATING_MAX);
            self.repository.add_user(&username, rating).await;
        }

        let total = self.repository.count().await;
        info!("Seeding complete, {} users in store", total);

        SeedSummary {
            seeded: true,
            total,
        }
    }
}
