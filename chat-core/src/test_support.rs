//! Fakes for driving a `ChatSession` without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::mpsc::UnboundedReceiver;
use futures::stream::{self, StreamExt};
use shared_types::{ChatMessage, ChatRequest, Sender};

use crate::error::ChatError;
use crate::surface::{BubbleId, ChatSurface};
use crate::transport::{ByteStream, ChatTransport};

pub enum Scripted {
    Status(u16),
    NoBody,
    Network(String),
    Chunks(Vec<Result<Vec<u8>, ChatError>>),
    Channel(UnboundedReceiver<Result<Vec<u8>, ChatError>>),
}

impl Scripted {
    pub fn chunks(parts: &[&str]) -> Self {
        Scripted::Chunks(parts.iter().map(|p| Ok(p.as_bytes().to_vec())).collect())
    }
}

#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<(String, ChatRequest)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Scripted) {
        self.script.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<(String, ChatRequest)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ChatTransport for ScriptedTransport {
    async fn open(&self, endpoint: &str, request: &ChatRequest) -> Result<ByteStream, ChatError> {
        self.requests
            .borrow_mut()
            .push((endpoint.to_string(), request.clone()));

        let next = self.script.borrow_mut().pop_front();
        match next.expect("unexpected request: script exhausted") {
            Scripted::Status(status) => Err(ChatError::Transport { status }),
            Scripted::NoBody => Err(ChatError::StreamUnavailable),
            Scripted::Network(reason) => Err(ChatError::Network(reason)),
            Scripted::Chunks(chunks) => Ok(stream::iter(chunks).boxed_local()),
            Scripted::Channel(rx) => Ok(rx.boxed_local()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Pushed(Sender, String),
    Appended(BubbleId, String),
    ClearedInput,
    Indicator(bool),
    Controls(bool),
    FocusedInput,
    Scrolled,
}

#[derive(Default)]
struct SurfaceLog {
    messages: Vec<ChatMessage>,
    events: Vec<SurfaceEvent>,
}

/// Records every call; clones share one log.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log.borrow().messages.clone()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.log.borrow().events.clone()
    }

    pub fn control_toggles(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Controls(enabled) => Some(enabled),
                _ => None,
            })
            .collect()
    }

    pub fn indicator_visible(&self) -> bool {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Indicator(visible) => Some(visible),
                _ => None,
            })
            .last()
            .unwrap_or(false)
    }

    fn record(&self, event: SurfaceEvent) {
        self.log.borrow_mut().events.push(event);
    }
}

impl ChatSurface for RecordingSurface {
    fn push_message(&mut self, message: ChatMessage) -> BubbleId {
        self.record(SurfaceEvent::Pushed(message.sender, message.text.clone()));
        let mut log = self.log.borrow_mut();
        log.messages.push(message);
        BubbleId(log.messages.len() - 1)
    }

    fn append_to_message(&mut self, bubble: BubbleId, text: &str) {
        self.record(SurfaceEvent::Appended(bubble, text.to_string()));
        if let Some(message) = self.log.borrow_mut().messages.get_mut(bubble.0) {
            message.text.push_str(text);
        }
    }

    fn clear_input(&mut self) {
        self.record(SurfaceEvent::ClearedInput);
    }

    fn set_loading_indicator(&mut self, visible: bool) {
        self.record(SurfaceEvent::Indicator(visible));
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.record(SurfaceEvent::Controls(enabled));
    }

    fn focus_input(&mut self) {
        self.record(SurfaceEvent::FocusedInput);
    }

    fn scroll_to_bottom(&mut self) {
        self.record(SurfaceEvent::Scrolled);
    }
}
