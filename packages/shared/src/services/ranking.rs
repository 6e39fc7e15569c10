use crate::models::user::User;

/// Number of users returned per leaderboard page.
pub const PAGE_SIZE: usize = 50;

/// Sorts users descending by rating (ties broken ascending by username) and
/// assigns dense competition ranks in place: tied ratings share a rank, and
/// the rank after a tie group jumps to that entry's 1-based sorted position.
pub fn calculate_ranks(users: &mut [User]) {
    users.sort_by(|a, b| {
        b.rating
            .cmp(&a.rating)
            .then_with(|| a.username.cmp(&b.username))
    });

    let mut current_rank: u64 = 1;
    for i in 0..users.len() {
        if i > 0 && users[i].rating != users[i - 1].rating {
            current_rank = i as u64 + 1;
        }
        users[i].rank = current_rank;
    }
}

/// Returns the 1-indexed `page` of `users`. A start offset past the end
/// yields an empty slice; the end offset is clamped to the collection
/// length. Page 0 is treated as page 1.
pub fn page(users: &[User], page: usize, page_size: usize) -> &[User] {
    let page = page.max(1);
    let start = (page - 1) * page_size;
    if start >= users.len() {
        return &[];
    }
    let end = (start + page_size).min(users.len());
    &users[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, username: &str, rating: i32) -> User {
        User::new(id, username.to_string(), rating)
    }

    #[test]
    fn test_ranks_sorted_descending_with_username_tiebreak() {
        let mut users = vec![
            user(1, "neha_das4", 1500),
            user(2, "aditya_rao1", 3000),
            user(3, "kavya_iyer6", 1500),
            user(4, "divya_burman2", 2200),
        ];

        calculate_ranks(&mut users);

        let ratings: Vec<i32> = users.iter().map(|u| u.rating).collect();
        assert_eq!(ratings, vec![3000, 2200, 1500, 1500]);
        // tied ratings are ordered by username
        assert_eq!(users[2].username, "kavya_iyer6");
        assert_eq!(users[3].username, "neha_das4");
    }

    #[test]
    fn test_competition_ranks_skip_after_tie_groups() {
        let mut users = vec![
            user(1, "a", 3000),
            user(2, "b", 3000),
            user(3, "c", 2500),
            user(4, "d", 2500),
            user(5, "e", 2500),
            user(6, "f", 1000),
        ];

        calculate_ranks(&mut users);

        let ranks: Vec<u64> = users.iter().map(|u| u.rank).collect();
        assert_eq!(ranks, vec![1, 1, 3, 3, 3, 6]);
    }

    #[test]
    fn test_rank_recurrence_holds_for_every_entry() {
        let mut users: Vec<User> = (0..40)
            .map(|i| user(i + 1, &format!("user{}", i), ((i * 7) % 9) as i32 * 100 + 100))
            .collect();

        calculate_ranks(&mut users);

        assert_eq!(users[0].rank, 1);
        for i in 1..users.len() {
            if users[i].rating == users[i - 1].rating {
                assert_eq!(users[i].rank, users[i - 1].rank);
            } else {
                assert_eq!(users[i].rank, i as u64 + 1);
            }
        }
    }

    #[test]
    fn test_ranks_on_empty_slice_is_a_noop() {
        let mut users: Vec<User> = Vec::new();
        calculate_ranks(&mut users);
        assert!(users.is_empty());
    }

    #[test]
    fn test_pagination_boundaries_with_120_users() {
        let users: Vec<User> = (1..=120)
            .map(|i| user(i, &format!("user{}", i), 1000))
            .collect();

        assert_eq!(page(&users, 1, 50).len(), 50);
        assert_eq!(page(&users, 1, 50)[0].id, 1);
        assert_eq!(page(&users, 1, 50)[49].id, 50);

        let third = page(&users, 3, 50);
        assert_eq!(third.len(), 20);
        assert_eq!(third[0].id, 101);
        assert_eq!(third[19].id, 120);

        assert!(page(&users, 4, 50).is_empty());
    }

    #[test]
    fn test_page_zero_is_treated_as_page_one() {
        let users: Vec<User> = (1..=10)
            .map(|i| user(i, &format!("user{}", i), 1000))
            .collect();

        assert_eq!(page(&users, 0, 50), page(&users, 1, 50));
    }

    #[test]
    fn test_page_of_empty_collection_is_empty() {
        let users: Vec<User> = Vec::new();
        assert!(page(&users, 1, 50).is_empty());
    }
}
