//! User filtering

use sampleboard_core::{Post, UserId};

/// Posts written by `user_id`, in input order.
pub fn filter_by_user(posts: &[Post], user_id: UserId) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.user_id == user_id)
        .cloned()
        .collect()
}

/// Distinct authors in the order they first appear.
pub fn distinct_user_ids(posts: &[Post]) -> Vec<UserId> {
    let mut seen = Vec::new();
    for post in posts {
        if !seen.contains(&post.user_id) {
            seen.push(post.user_id);
        }
    }
    seen
}
