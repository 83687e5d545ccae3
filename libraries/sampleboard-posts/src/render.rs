//! Render boundary for the posts widget
//!
//! The controller never touches a concrete surface. It drives a
//! [`PostsRenderer`], and keeps the per-item expanded flags in an
//! [`Accordion`] that is rebuilt on every render.

use sampleboard_core::{ErrorSlot, Post, UserId};

/// Surface the posts controller draws on.
///
/// Implementations own the pre-existing containers of the hosting page:
/// the accordion list, the user filter menu and the error slot.
pub trait PostsRenderer: ErrorSlot {
    /// Remove every item from the accordion container.
    fn clear_posts(&mut self);

    /// Append one collapsed header + body pair.
    fn append_post(&mut self, post: &Post);

    /// Show or hide the body of an already rendered item.
    fn set_post_expanded(&mut self, post_id: u64, expanded: bool);

    /// Remove every entry from the user filter menu.
    fn clear_filter_entries(&mut self);

    /// Append one entry to the user filter menu.
    fn add_filter_entry(&mut self, user_id: UserId, label: &str);

    /// Mark `selected` as the single selected menu entry, or clear the selection.
    fn set_filter_selection(&mut self, selected: Option<UserId>);

    /// Show or hide the user filter menu.
    fn set_filter_menu_visible(&mut self, visible: bool);
}

/// Label of the filter menu entry for `user_id`
pub fn filter_label(user_id: UserId) -> String {
    format!("User {}", user_id)
}

/// Expanded/collapsed flags of the currently rendered items.
///
/// Not part of the view state: a re-render starts every item collapsed,
/// and any number of items may be open at once.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<(u64, bool)>,
}

impl Accordion {
    /// Replace the rendered items, all collapsed.
    pub fn reset<'a>(&mut self, posts: impl IntoIterator<Item = &'a Post>) {
        self.items = posts.into_iter().map(|post| (post.id, false)).collect();
    }

    /// Flip one item. Returns the new expanded flag, or `None` if the item is not rendered.
    pub fn toggle(&mut self, post_id: u64) -> Option<bool> {
        let (_, expanded) = self.items.iter_mut().find(|(id, _)| *id == post_id)?;
        *expanded = !*expanded;
        Some(*expanded)
    }

    /// Whether an item is currently expanded
    pub fn is_expanded(&self, post_id: u64) -> bool {
        self.items
            .iter()
            .any(|(id, expanded)| *id == post_id && *expanded)
    }

    /// Rendered post ids in display order
    pub fn post_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(|(id, _)| *id)
    }

    /// Number of rendered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is rendered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
