/// Render capabilities shared by every widget.

/// The page-level slot that displays one static error message.
///
/// Both widgets write into the same kind of slot; a renderer decides where
/// the text ends up (a DOM node, a terminal line, a test buffer).
pub trait ErrorSlot {
    /// Replace the slot content with `message`.
    fn show_error(&mut self, message: &str);
}
