//! SampleBoard Posts
//!
//! The posts viewer: fetch a collection of posts, show it as an accordion,
//! sort it by title and filter it by author.
//!
//! # Architecture
//!
//! - [`sort_posts`] and [`filter_by_user`] are pure functions over slices
//! - [`PostsViewState`] holds the only state the view is derived from
//! - [`PostsViewController`] reacts to user events and redraws through a
//!   [`PostsRenderer`]
//! - [`HttpPostsSource`] fetches the collection over HTTP
//!
//! # Example
//!
//! ```rust
//! use sampleboard_core::Post;
//! use sampleboard_posts::{filter_by_user, sort_posts, SortDirection};
//!
//! let posts = vec![
//!     Post::new(1, 1, "B", ""),
//!     Post::new(2, 2, "A", ""),
//!     Post::new(3, 1, "C", ""),
//! ];
//!
//! let sorted = sort_posts(&filter_by_user(&posts, 1), SortDirection::Asc);
//! let titles: Vec<_> = sorted.iter().map(|p| p.title.as_str()).collect();
//! assert_eq!(titles, ["B", "C"]);
//! ```

mod controller;
mod filter;
mod render;
mod sort;
mod source;
mod state;

pub use controller::{FilterOutcome, PostsViewController};
pub use filter::{distinct_user_ids, filter_by_user};
pub use render::{filter_label, Accordion, PostsRenderer};
pub use sort::{compare_titles, sort_posts};
pub use source::{HttpPostsSource, PostsSource, DEFAULT_POSTS_ENDPOINT};
pub use state::{PostsViewState, SortDirection};
