//! Predicate filters over catalog records.

use sundry_records::{Item, User};

use crate::config::Config;

/// Keeps items rated 4 or higher, in input order.
#[must_use]
pub fn filter_by_rating(items: &[Item]) -> Vec<Item> {
    filter_by_rating_with(items, &Config::default())
}

/// Keeps items whose rating is at least `config.min_rating`.
#[must_use]
pub fn filter_by_rating_with(items: &[Item], config: &Config) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.rating >= config.min_rating)
        .cloned()
        .collect()
}

/// Keeps active users, in input order.
#[must_use]
pub fn filter_active_users(users: &[User]) -> Vec<User> {
    users.iter().filter(|user| user.is_active).cloned().collect()
}
