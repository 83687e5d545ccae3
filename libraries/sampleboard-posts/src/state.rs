//! Posts view state
//!
//! Everything the accordion shows is derived from these three values.

use sampleboard_core::{Post, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title ordering applied by the sort button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// A to Z
    #[default]
    Asc,

    /// Z to A
    Desc,

    /// Fetch order
    Reset,
}

impl SortDirection {
    /// The direction that follows this one: asc -> desc -> reset -> asc
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Reset,
            SortDirection::Reset => SortDirection::Asc,
        }
    }

    /// Lowercase name as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
            SortDirection::Reset => "reset",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            "reset" => Ok(SortDirection::Reset),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// The minimal state the rendered accordion is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsViewState {
    posts: Vec<Post>,
    filtered_user_id: Option<UserId>,
    sort_direction: SortDirection,
}

impl PostsViewState {
    /// Empty state: no posts, no filter, ascending sort next
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding a freshly fetched collection
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// The full collection in fetch order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Active user filter, if any
    pub fn filtered_user_id(&self) -> Option<UserId> {
        self.filtered_user_id
    }

    /// Direction the next sort click will apply
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub(crate) fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub(crate) fn set_filter(&mut self, user_id: Option<UserId>) {
        self.filtered_user_id = user_id;
    }

    /// Advance the direction and return the one that was current.
    pub(crate) fn advance_sort(&mut self) -> SortDirection {
        let current = self.sort_direction;
        self.sort_direction = current.next();
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_cycles_through_three_states() {
        let d = SortDirection::default();
        assert_eq!(d, SortDirection::Asc);
        assert_eq!(d.next(), SortDirection::Desc);
        assert_eq!(d.next().next(), SortDirection::Reset);
        assert_eq!(d.next().next().next(), SortDirection::Asc);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("reset".parse::<SortDirection>().unwrap(), SortDirection::Reset);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn advance_returns_previous_direction() {
        let mut state = PostsViewState::new();
        assert_eq!(state.advance_sort(), SortDirection::Asc);
        assert_eq!(state.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn new_state_has_no_filter() {
        let state = PostsViewState::with_posts(vec![Post::new(1, 1, "a", "b")]);
        assert_eq!(state.posts().len(), 1);
        assert_eq!(state.filtered_user_id(), None);
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }
}
