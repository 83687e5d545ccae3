//! Line-oriented renderers writing to a terminal.
//!
//! Both renderers print every change as it happens instead of redrawing a
//! screen, so the output reads as a log of what the widget would show.

use sampleboard_audio::{AudioCardRenderer, PlaybackGlyph};
use sampleboard_core::{ErrorSlot, Post, UserId};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use tracing::warn;

/// Free-form feedback to the person at the terminal.
pub trait Notice {
    fn notice(&mut self, message: &str);
}

fn emit<W: Write>(out: &mut W, args: fmt::Arguments<'_>) {
    if let Err(e) = out.write_fmt(args).and_then(|()| out.flush()) {
        warn!(error = %e, "Failed to write to terminal");
    }
}

/// Posts accordion printed as an indented list.
pub struct TerminalPostsRenderer<W> {
    out: W,
    posts: HashMap<u64, Post>,
    filter_entries: Vec<(UserId, String)>,
    selected: Option<UserId>,
}

impl<W: Write> TerminalPostsRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            posts: HashMap::new(),
            filter_entries: Vec::new(),
            selected: None,
        }
    }

    /// Consume the renderer and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorSlot for TerminalPostsRenderer<W> {
    fn show_error(&mut self, message: &str) {
        emit(&mut self.out, format_args!("! {}\n", message));
    }
}

impl<W: Write> Notice for TerminalPostsRenderer<W> {
    fn notice(&mut self, message: &str) {
        emit(&mut self.out, format_args!("{}\n", message));
    }
}

impl<W: Write> sampleboard_posts::PostsRenderer for TerminalPostsRenderer<W> {
    fn clear_posts(&mut self) {
        self.posts.clear();
        emit(&mut self.out, format_args!("---\n"));
    }

    fn append_post(&mut self, post: &Post) {
        emit(&mut self.out, format_args!("+ [{}] {}\n", post.id, post.title));
        self.posts.insert(post.id, post.clone());
    }

    fn set_post_expanded(&mut self, post_id: u64, expanded: bool) {
        let Some(post) = self.posts.get(&post_id) else {
            return;
        };
        if expanded {
            emit(
                &mut self.out,
                format_args!("- [{}] {}\n    {}\n", post.id, post.title, post.body.replace('\n', "\n    ")),
            );
        } else {
            emit(&mut self.out, format_args!("+ [{}] {}\n", post.id, post.title));
        }
    }

    fn clear_filter_entries(&mut self) {
        self.filter_entries.clear();
    }

    fn add_filter_entry(&mut self, user_id: UserId, label: &str) {
        self.filter_entries.push((user_id, label.to_string()));
    }

    fn set_filter_selection(&mut self, selected: Option<UserId>) {
        self.selected = selected;
    }

    fn set_filter_menu_visible(&mut self, visible: bool) {
        if !visible {
            return;
        }
        emit(&mut self.out, format_args!("Filter by user:\n"));
        for (user_id, label) in &self.filter_entries {
            let marker = if self.selected == Some(*user_id) { "*" } else { " " };
            emit(&mut self.out, format_args!("  {} {:>3}  {}\n", marker, user_id, label));
        }
    }
}

/// Audio cards printed as `[index] glyph name` lines.
pub struct TerminalCardRenderer<W> {
    out: W,
    names: Vec<String>,
}

impl<W: Write> TerminalCardRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: Vec::new(),
        }
    }

    /// Consume the renderer and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_card(&mut self, index: usize, glyph: PlaybackGlyph) {
        let name = self.names.get(index).map_or("", String::as_str);
        emit(&mut self.out, format_args!("[{}] {} {}\n", index, glyph.icon(), name));
    }
}

impl<W: Write> ErrorSlot for TerminalCardRenderer<W> {
    fn show_error(&mut self, message: &str) {
        emit(&mut self.out, format_args!("! {}\n", message));
    }
}

impl<W: Write> Notice for TerminalCardRenderer<W> {
    fn notice(&mut self, message: &str) {
        emit(&mut self.out, format_args!("{}\n", message));
    }
}

impl<W: Write> AudioCardRenderer for TerminalCardRenderer<W> {
    fn clear_cards(&mut self) {
        self.names.clear();
    }

    fn append_card(&mut self, index: usize, name: &str) {
        if self.names.len() <= index {
            self.names.resize(index + 1, String::new());
        }
        self.names[index] = name.to_string();
        self.print_card(index, PlaybackGlyph::Play);
    }

    fn set_glyph(&mut self, index: usize, glyph: PlaybackGlyph) {
        self.print_card(index, glyph);
    }
}
