// User data model
// Matches the Qiita /users/{id} response shape

use serde::Deserialize;

use crate::utils::points::calculate_contribution;

use super::item::ItemRecord;

/// Profile counts from /users/{id}
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub followees_count: u64,
    pub followers_count: u64,
}

/// Fully aggregated user, one row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub followees: u64,
    pub followers: u64,
    pub items: u64,
    pub likes: u64,
    pub stockers: u64,
    pub comments: u64,
    pub contribution: u64,
}

impl UserRecord {
    /// Build the record from a profile and every item the user wrote.
    /// Out-of-window items carry zeroed metrics, so only the item count
    /// needs to look at `is_valid`.
    pub fn from_items(user_id: &str, profile: UserProfile, items: &[ItemRecord]) -> Self {
        let count = items.iter().filter(|i| i.is_valid).count() as u64;
        let likes = items.iter().map(|i| i.likes_count).sum();
        let stockers = items.iter().map(|i| i.stockers_count).sum();
        let comments = items.iter().map(|i| i.comments_count).sum();

        Self {
            user_id: user_id.to_string(),
            followees: profile.followees_count,
            followers: profile.followers_count,
            items: count,
            likes,
            stockers,
            comments,
            contribution: calculate_contribution(count, likes, stockers),
        }
    }
}
