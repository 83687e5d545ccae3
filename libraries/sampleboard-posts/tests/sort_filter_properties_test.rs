//! Property tests for the pure sort and filter functions.

use proptest::prelude::*;
use sampleboard_core::Post;
use sampleboard_posts::{filter_by_user, sort_posts, SortDirection};
use std::collections::HashSet;

fn posts_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec((1u64..5, "[a-dA-D]{0,4}"), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (user_id, title))| Post::new(i as u64 + 1, user_id, title, ""))
            .collect()
    })
}

fn distinct_titles_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::hash_set("[a-z]{1,6}", 0..20).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Post::new(i as u64 + 1, 1, title, ""))
            .collect()
    })
}

proptest! {
    #[test]
    fn desc_reverses_asc_for_distinct_titles(posts in distinct_titles_strategy()) {
        let asc = sort_posts(&posts, SortDirection::Asc);
        let mut desc = sort_posts(&asc, SortDirection::Desc);
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn reset_returns_input_order(posts in posts_strategy()) {
        prop_assert_eq!(sort_posts(&posts, SortDirection::Reset), posts.clone());
    }

    #[test]
    fn sorting_is_a_permutation(posts in posts_strategy()) {
        let sorted = sort_posts(&posts, SortDirection::Asc);
        let before: HashSet<u64> = posts.iter().map(|p| p.id).collect();
        let after: HashSet<u64> = sorted.iter().map(|p| p.id).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(sorted.len(), posts.len());
    }

    #[test]
    fn equal_titles_keep_input_order(posts in posts_strategy()) {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_posts(&posts, direction);
            for pair in sorted.windows(2) {
                if pair[0].title == pair[1].title {
                    // ids are assigned in input order
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    #[test]
    fn filter_keeps_only_user_in_order(posts in posts_strategy(), user_id in 1u64..5) {
        let filtered = filter_by_user(&posts, user_id);
        prop_assert!(filtered.iter().all(|p| p.user_id == user_id));
        prop_assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert_eq!(
            filtered.len(),
            posts.iter().filter(|p| p.user_id == user_id).count()
        );
    }

    #[test]
    fn filter_is_a_fixed_point(posts in posts_strategy(), user_id in 1u64..5) {
        let once = filter_by_user(&posts, user_id);
        prop_assert_eq!(filter_by_user(&once, user_id), once.clone());
    }
}
