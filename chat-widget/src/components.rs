use std::rc::Rc;

use chat_core::{ChatConfig, ChatSession, SubmitOutcome, ThemeController};
use dioxus::prelude::*;
use shared_types::{ChatMessage, Sender, Theme};

use crate::dom::{focus_element, scroll_to_bottom, INPUT_ID, MESSAGE_LIST_ID};
use crate::styles::CHAT_STYLES;
use crate::surface::SignalSurface;
use crate::theme::WebThemeHost;
use crate::transport::FetchTransport;

const BOT_AVATAR_PATH: &str =
    "M12 3L1 9L12 15L23 9L12 3ZM5 10.17L12 13.5L19 10.17V14.17L12 17.5L5 14.17V10.17Z";

/// Whole widget: header with the theme switcher above the chat.
#[component]
pub fn ChatApp() -> Element {
    let config = use_hook(ChatConfig::from_build_env);
    let theme_key = config.theme_storage_key.clone();
    let mut theme =
        use_signal(move || ThemeController::initialize(WebThemeHost::new(theme_key)));

    let toggle_theme = use_callback(move |_| {
        let next = theme.write().toggle();
        dioxus_logger::tracing::debug!("Theme switched to {}", next);
    });

    rsx! {
        style { {CHAT_STYLES} }

        div {
            class: "chat-container",

            div {
                class: "chat-header",
                div {
                    class: "chat-title",
                    span { class: "chat-icon", "💬" }
                    span { "Chat" }
                }
                ThemeSwitcher {
                    theme: theme.read().current(),
                    on_toggle: toggle_theme,
                }
            }

            ChatView { config: config.clone() }
        }
    }
}

#[component]
pub fn ThemeSwitcher(theme: Theme, on_toggle: Callback<()>) -> Element {
    rsx! {
        button {
            id: "theme-switcher",
            class: "theme-switcher",
            r#type: "button",
            title: "Toggle theme",
            onclick: move |_| on_toggle.call(()),
            if theme == Theme::Dark {
                span { id: "theme-icon-moon", class: "theme-icon", "🌙" }
            } else {
                span { id: "theme-icon-sun", class: "theme-icon", "☀️" }
            }
        }
    }
}

#[component]
pub fn ChatView(config: ChatConfig) -> Element {
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut input_text = use_signal(String::new);
    let loading = use_signal(|| false);
    let show_indicator = use_signal(|| false);
    let focus_requests = use_signal(|| 0u32);
    let scroll_requests = use_signal(|| 0u32);

    let session = use_hook(move || Rc::new(ChatSession::new(config, FetchTransport)));

    let surface = SignalSurface {
        messages,
        input_text,
        loading,
        show_indicator,
        focus_requests,
        scroll_requests,
    };

    use_effect(move || {
        if focus_requests() > 0 {
            focus_element(INPUT_ID);
        }
    });

    use_effect(move || {
        if scroll_requests() > 0 {
            scroll_to_bottom(MESSAGE_LIST_ID);
        }
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let session = session.clone();
        let text = input_text();
        let mut surface = surface;
        spawn(async move {
            match session.submit(&text, &mut surface).await {
                SubmitOutcome::Completed(summary) => {
                    if summary.skipped > 0 {
                        dioxus_logger::tracing::warn!(
                            "Reply finished with {} unparseable records",
                            summary.skipped
                        );
                    }
                }
                SubmitOutcome::Failed(err) => {
                    dioxus_logger::tracing::error!("Chat request failed: {}", err);
                }
                SubmitOutcome::Ignored(reason) => {
                    dioxus_logger::tracing::debug!("Submission ignored: {:?}", reason);
                }
            }
        });
    };

    rsx! {
        div {
            id: MESSAGE_LIST_ID,
            class: "messages-scroll-area",
            div {
                class: "messages-list",
                if messages.read().is_empty() && !show_indicator() {
                    div {
                        class: "empty-state",
                        div { class: "empty-icon", "💬" }
                        p { "Start a conversation" }
                        span { "Type a message below to begin chatting" }
                    }
                }
                for msg in messages.iter() {
                    MessageBubble { key: "{msg.id}", message: msg.clone() }
                }
                if show_indicator() {
                    LoadingIndicator {}
                }
            }
        }

        form {
            id: "chat-form",
            class: "chat-input-area",
            onsubmit,
            div {
                class: "input-wrapper",
                input {
                    id: INPUT_ID,
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Type a message...",
                    autocomplete: "off",
                    value: "{input_text}",
                    disabled: loading(),
                    oninput: move |e| input_text.set(e.value()),
                }
                button {
                    id: "send-button",
                    class: "send-button",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        div {
                            class: "spinner",
                            span { "◐" }
                        }
                    } else {
                        span { "➤" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let is_user = matches!(message.sender, Sender::User);

    rsx! {
        div {
            class: message_row_class(message.sender),
            if !is_user {
                BotAvatar {}
            }
            div {
                class: "message-bubble",
                "{message.text}"
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            id: "loading-indicator",
            class: "message bot loading-indicator",
            BotAvatar {}
            div {
                class: "message-bubble",
                span { class: "dot" }
                span { class: "dot" }
                span { class: "dot" }
            }
        }
    }
}

#[component]
fn BotAvatar() -> Element {
    rsx! {
        div {
            class: "avatar",
            svg {
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: BOT_AVATAR_PATH }
            }
        }
    }
}

fn message_row_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message user",
        Sender::Assistant => "message bot",
    }
}
