use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::models::user::clamp_rating;
use shared::repositories::user_repository::UserRepository;
use tracing::debug;

/// Background task that nudges one random user's rating every tick so the
/// leaderboard keeps moving between requests.
pub struct RatingSimulator {
    repository: Arc<dyn UserRepository + Send + Sync>,
    period: Duration,
}

impl RatingSimulator {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>, period: Duration) -> Self {
        RatingSimulator { repository, period }
    }

    /// Runs until the process exits. There is no graceful-stop mechanism.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.period);
        let mut rng = StdRng::from_entropy();
        loop {
            interval.tick().await;
            self.tick(&mut rng).await;
        }
    }

    /// One perturbation: pick a user uniformly at random, shift its rating by
    /// a uniform delta in [-50, 50], clamp into bounds, write back. A no-op
    /// on an empty store; update failures are ignored.
    pub async fn tick(&self, rng: &mut StdRng) {
        let users = self.repository.get_all_users().await;
        if users.is_empty() {
            return;
        }

        let user = &users[rng.gen_range(0..users.len())];
        let delta = rng.gen_range(-50..=50);
        let new_rating = clamp_rating(user.rating + delta);

        if let Err(e) = self.repository.update_rating(user.id, new_rating).await {
            debug!("Simulated update for user {} skipped: {}", user.id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::user::{RATING_MAX, RATING_MIN};
    use shared::repositories::user_repository::InMemoryUserRepository;

    #[tokio::test]
    async fn test_tick_on_empty_store_is_a_noop() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let simulator = RatingSimulator::new(repository.clone(), Duration::from_secs(2));
        let mut rng = StdRng::seed_from_u64(7);

        simulator.tick(&mut rng).await;

        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_tick_keeps_ratings_within_bounds() {
        let repository = Arc::new(InMemoryUserRepository::new());
        // users pinned to both bounds so clamping is exercised
        repository.add_user("arjun_kapoor1", RATING_MIN).await;
        repository.add_user("ishita_agarwal2", RATING_MAX).await;

        let simulator = RatingSimulator::new(repository.clone(), Duration::from_secs(2));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            simulator.tick(&mut rng).await;
        }

        for user in repository.get_all_users().await {
            assert!((RATING_MIN..=RATING_MAX).contains(&user.rating));
        }
    }

    #[tokio::test]
    async fn test_tick_moves_at_most_one_user() {
        let repository = Arc::new(InMemoryUserRepository::new());
        for _ in 0..10 {
            repository.add_user("naveen_verma5", 2500).await;
        }

        let simulator = RatingSimulator::new(repository.clone(), Duration::from_secs(2));
        let mut rng = StdRng::seed_from_u64(42);

        simulator.tick(&mut rng).await;

        let changed = repository
            .get_all_users()
            .await
            .iter()
            .filter(|user| user.rating != 2500)
            .count();
        assert!(changed <= 1);
    }
}
