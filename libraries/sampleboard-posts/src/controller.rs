//! Posts view controller
//!
//! Owns the [`PostsViewState`] and turns user events (sort click, filter
//! selection, group button, item header click) into full re-renders.
//!
//! Every state change re-derives the visible list from
//! `(posts, filtered_user_id, sort_direction)` and redraws it from scratch;
//! nothing is patched incrementally.

use crate::filter::{distinct_user_ids, filter_by_user};
use crate::render::{filter_label, Accordion, PostsRenderer};
use crate::sort::sort_posts;
use crate::source::PostsSource;
use crate::state::{PostsViewState, SortDirection};
use sampleboard_core::{messages, Post, Result, UserId};
use tracing::{debug, error, info};

/// What a filter selection did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The filter now shows only this user's posts
    Applied(UserId),

    /// The active filter was selected again and has been removed
    Cleared,

    /// The user has no entry in the filter menu; nothing changed
    Ignored,
}

/// Controller for the posts accordion widget.
pub struct PostsViewController<S, R> {
    source: S,
    renderer: R,
    state: PostsViewState,
    accordion: Accordion,
    filter_users: Vec<UserId>,
    filter_menu_visible: bool,
}

impl<S, R> PostsViewController<S, R>
where
    S: PostsSource,
    R: PostsRenderer,
{
    /// Create a controller with an empty view.
    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            state: PostsViewState::new(),
            accordion: Accordion::default(),
            filter_users: Vec::new(),
            filter_menu_visible: false,
        }
    }

    /// Load the collection, render it in fetch order and fill the filter menu.
    ///
    /// On failure the static error message is written to the error slot and
    /// the view stays empty. The error is still returned so the host can
    /// decide how to exit; there is no retry.
    pub async fn fetch_posts(&mut self) -> Result<usize> {
        let posts = match self.source.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                error!(error = %e, "Failed to load posts");
                self.renderer.show_error(messages::POSTS_LOAD_FAILED);
                return Err(e);
            }
        };

        let count = posts.len();
        self.state.set_posts(posts);
        draw(&mut self.renderer, &mut self.accordion, self.state.posts());

        self.filter_users = distinct_user_ids(self.state.posts());
        self.renderer.clear_filter_entries();
        for user_id in &self.filter_users {
            self.renderer.add_filter_entry(*user_id, &filter_label(*user_id));
        }

        info!(
            posts = count,
            users = self.filter_users.len(),
            "Posts loaded"
        );
        Ok(count)
    }

    /// Sort the visible posts by the current direction, then advance it.
    ///
    /// Returns the direction that was applied. Starting from a fresh view,
    /// successive clicks apply asc, desc, reset, asc, ...
    pub fn handle_sort_click(&mut self) -> SortDirection {
        let direction = self.state.advance_sort();
        let visible = match self.state.filtered_user_id() {
            Some(user_id) => filter_by_user(self.state.posts(), user_id),
            None => self.state.posts().to_vec(),
        };
        let sorted = sort_posts(&visible, direction);

        debug!(
            applied = %direction,
            next = %self.state.sort_direction(),
            visible = sorted.len(),
            "Sort clicked"
        );
        draw(&mut self.renderer, &mut self.accordion, &sorted);
        direction
    }

    /// Select a user in the filter menu.
    ///
    /// Selecting the active user clears the filter and shows every post in
    /// fetch order. Selecting another user replaces the filter and, unless
    /// the sort direction is `Reset`, sorts the subset by it. Either way the
    /// menu closes.
    pub fn handle_filter_select(&mut self, user_id: UserId) -> FilterOutcome {
        if !self.filter_users.contains(&user_id) {
            debug!(user_id, "Ignoring selection of unknown user");
            return FilterOutcome::Ignored;
        }

        self.set_filter_menu_visible(false);

        if self.state.filtered_user_id() == Some(user_id) {
            self.state.set_filter(None);
            self.renderer.set_filter_selection(None);
            draw(&mut self.renderer, &mut self.accordion, self.state.posts());
            debug!(user_id, "User filter cleared");
            return FilterOutcome::Cleared;
        }

        self.state.set_filter(Some(user_id));
        self.renderer.set_filter_selection(Some(user_id));

        let direction = self.state.sort_direction();
        let mut filtered = filter_by_user(self.state.posts(), user_id);
        if direction != SortDirection::Reset {
            filtered = sort_posts(&filtered, direction);
        }

        debug!(user_id, sort = %direction, visible = filtered.len(), "User filter applied");
        draw(&mut self.renderer, &mut self.accordion, &filtered);
        FilterOutcome::Applied(user_id)
    }

    /// Show or hide the filter menu (the group button). Returns the new visibility.
    pub fn toggle_filter_menu(&mut self) -> bool {
        self.set_filter_menu_visible(!self.filter_menu_visible);
        self.filter_menu_visible
    }

    /// Expand or collapse one rendered item.
    ///
    /// Returns the new expanded flag, or `None` when the post is not on screen.
    pub fn toggle_item(&mut self, post_id: u64) -> Option<bool> {
        let expanded = self.accordion.toggle(post_id)?;
        self.renderer.set_post_expanded(post_id, expanded);
        Some(expanded)
    }

    /// Redraw the accordion with `posts`, all items collapsed.
    pub fn render(&mut self, posts: &[Post]) {
        draw(&mut self.renderer, &mut self.accordion, posts);
    }

    /// Current view state
    pub fn state(&self) -> &PostsViewState {
        &self.state
    }

    /// Items currently on screen
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    /// Users listed in the filter menu, first-seen order
    pub fn filter_users(&self) -> &[UserId] {
        &self.filter_users
    }

    /// Whether the filter menu is open
    pub fn filter_menu_visible(&self) -> bool {
        self.filter_menu_visible
    }

    /// Borrow the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn set_filter_menu_visible(&mut self, visible: bool) {
        self.filter_menu_visible = visible;
        self.renderer.set_filter_menu_visible(visible);
    }
}

fn draw<R: PostsRenderer>(renderer: &mut R, accordion: &mut Accordion, posts: &[Post]) {
    renderer.clear_posts();
    for post in posts {
        renderer.append_post(post);
    }
    accordion.reset(posts);
}
