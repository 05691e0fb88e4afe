use chat_core::{BubbleId, ChatSurface};
use dioxus::prelude::*;
use shared_types::ChatMessage;

/// [`ChatSurface`] over the `ChatView` signals.
///
/// Focus and scroll are requests: the view's effects perform them after the
/// next render, once the input is enabled again and the new text is laid out.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub messages: Signal<Vec<ChatMessage>>,
    pub input_text: Signal<String>,
    /// Mirrors the session loading flag; the input and send button are
    /// disabled while it is set.
    pub loading: Signal<bool>,
    pub show_indicator: Signal<bool>,
    pub focus_requests: Signal<u32>,
    pub scroll_requests: Signal<u32>,
}

impl ChatSurface for SignalSurface {
    fn push_message(&mut self, message: ChatMessage) -> BubbleId {
        let mut messages = self.messages.write();
        messages.push(message);
        BubbleId(messages.len() - 1)
    }

    fn append_to_message(&mut self, bubble: BubbleId, text: &str) {
        if let Some(message) = self.messages.write().get_mut(bubble.0) {
            message.text.push_str(text);
        }
    }

    fn clear_input(&mut self) {
        self.input_text.set(String::new());
    }

    fn set_loading_indicator(&mut self, visible: bool) {
        self.show_indicator.set(visible);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.loading.set(!enabled);
    }

    fn focus_input(&mut self) {
        *self.focus_requests.write() += 1;
    }

    fn scroll_to_bottom(&mut self) {
        *self.scroll_requests.write() += 1;
    }
}
