use shared_types::ChatMessage;

/// Handle to a bubble previously pushed onto a [`ChatSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BubbleId(pub usize);

/// The view a [`crate::ChatSession`] drives while a submission runs.
///
/// Implemented by the Dioxus widget over signals and by recording fakes in
/// tests, so the submit flow never touches a real document.
pub trait ChatSurface {
    /// Render a new bubble at the bottom of the message list.
    fn push_message(&mut self, message: ChatMessage) -> BubbleId;

    /// Append streamed text to an existing bubble.
    fn append_to_message(&mut self, bubble: BubbleId, text: &str);

    fn clear_input(&mut self);

    /// Show or hide the typing indicator below the last message.
    fn set_loading_indicator(&mut self, visible: bool);

    /// Enable or disable the text input and the send button together.
    fn set_controls_enabled(&mut self, enabled: bool);

    fn focus_input(&mut self);

    fn scroll_to_bottom(&mut self);
}
