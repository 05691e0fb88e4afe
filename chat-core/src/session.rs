//! Submit flow for one chat widget instance.
//!
//! A [`ChatSession`] owns the per-page state: the session identifier sent with
//! every request and the loading flag that allows at most one request in
//! flight. The UI calls [`ChatSession::submit`] and hands it a
//! [`ChatSurface`] to render into.

use std::cell::Cell;

use shared_types::{ChatMessage, ChatRequest, SessionId};

use crate::config::ChatConfig;
use crate::consumer::{StreamConsumer, StreamSummary};
use crate::error::ChatError;
use crate::surface::ChatSurface;
use crate::transport::ChatTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty or whitespace only
    EmptyInput,
    /// Another submission is still streaming
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent and the surface was left untouched
    Ignored(IgnoreReason),
    Completed(StreamSummary),
    /// The request failed; an error bubble was rendered
    Failed(ChatError),
}

pub struct ChatSession<T> {
    config: ChatConfig,
    transport: T,
    session_id: SessionId,
    loading: Cell<bool>,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(config: ChatConfig, transport: T) -> Self {
        Self::with_session_id(config, transport, SessionId::new())
    }

    pub fn with_session_id(config: ChatConfig, transport: T, session_id: SessionId) -> Self {
        tracing::debug!(
            session_id = %session_id,
            endpoint = %config.endpoint,
            "Chat session created"
        );
        Self {
            config,
            transport,
            session_id,
            loading: Cell::new(false),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `text` and stream the reply into `surface`.
    ///
    /// Takes `&self` so the UI can call it again while a request is in flight;
    /// such calls return `Ignored(Busy)` without touching the surface.
    pub async fn submit<S: ChatSurface>(&self, text: &str, surface: &mut S) -> SubmitOutcome {
        let query = text.trim();
        if query.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }
        if self.loading.get() {
            tracing::debug!("Submission ignored while a reply is streaming");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }

        surface.push_message(ChatMessage::user(query));
        surface.scroll_to_bottom();
        surface.clear_input();

        let mut guard = LoadingGuard::engage(&self.loading, surface);
        guard.surface.set_loading_indicator(true);
        guard.surface.scroll_to_bottom();

        let outcome = match self.stream_reply(query, &mut *guard.surface).await {
            Ok(summary) => SubmitOutcome::Completed(summary),
            Err(e) => {
                tracing::error!("Error fetching chat response: {}", e);
                guard.surface.set_loading_indicator(false);
                guard
                    .surface
                    .push_message(ChatMessage::assistant(ChatError::user_message(
                        &self.config.endpoint,
                    )));
                guard.surface.scroll_to_bottom();
                SubmitOutcome::Failed(e)
            }
        };

        drop(guard);
        outcome
    }

    async fn stream_reply<S: ChatSurface>(
        &self,
        query: &str,
        surface: &mut S,
    ) -> Result<StreamSummary, ChatError> {
        let request = ChatRequest {
            query: query.to_string(),
            session_id: self.session_id.clone(),
        };

        let stream = self.transport.open(&self.config.endpoint, &request).await?;

        surface.set_loading_indicator(false);
        let bubble = surface.push_message(ChatMessage::assistant(""));
        surface.scroll_to_bottom();

        StreamConsumer::new()
            .consume(stream, |content| {
                surface.append_to_message(bubble, content);
                surface.scroll_to_bottom();
            })
            .await
    }
}

/// Busy state of one submission. Engaging it raises the loading flag and
/// disables the controls; dropping it restores the idle state, including when
/// the submit future is dropped mid-stream.
struct LoadingGuard<'a, S: ChatSurface> {
    flag: &'a Cell<bool>,
    surface: &'a mut S,
}

impl<'a, S: ChatSurface> LoadingGuard<'a, S> {
    fn engage(flag: &'a Cell<bool>, surface: &'a mut S) -> Self {
        flag.set(true);
        surface.set_controls_enabled(false);
        Self { flag, surface }
    }
}

impl<S: ChatSurface> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.surface.set_loading_indicator(false);
        self.surface.set_controls_enabled(true);
        self.surface.focus_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSurface, Scripted, ScriptedTransport, SurfaceEvent};
    use futures::channel::mpsc;
    use shared_types::Sender;

    const ENDPOINT: &str = "http://localhost:8000/api/v1/chat/stream";

    fn session(transport: ScriptedTransport) -> ChatSession<ScriptedTransport> {
        ChatSession::with_session_id(
            ChatConfig::default().with_endpoint(ENDPOINT),
            transport,
            SessionId("session_1700000000000_abc1234".to_string()),
        )
    }

    #[tokio::test]
    async fn test_hello_scenario_renders_concatenated_reply() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::chunks(&["{\"content\":\"Hi\"}\n{\"content\":\" there\"}\n"]));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        let outcome = session.submit("hello", &mut surface).await;

        match outcome {
            SubmitOutcome::Completed(summary) => assert_eq!(summary.text, "Hi there"),
            other => panic!("unexpected outcome {other:?}"),
        }
        let messages = surface.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[1].text, "Hi there");

        let requests = session.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, ENDPOINT);
        assert_eq!(requests[0].1.query, "hello");
        assert_eq!(requests[0].1.session_id.as_str(), "session_1700000000000_abc1234");
    }

    #[tokio::test]
    async fn test_loading_flag_cycles_once_per_submission() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::chunks(&["{\"content\":\"1\"}\n"]));
        transport.push(Scripted::chunks(&["{\"content\":\"2\"}\n"]));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        assert!(!session.is_loading());
        session.submit("first", &mut surface).await;
        assert!(!session.is_loading());
        session.submit("second", &mut surface).await;
        assert!(!session.is_loading());

        assert_eq!(surface.control_toggles(), vec![false, true, false, true]);
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_sending() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::chunks(&[]));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        session.submit("  spaced out \n", &mut surface).await;

        assert_eq!(session.transport().requests()[0].1.query, "spaced out");
        assert_eq!(surface.messages()[0].text, "spaced out");
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_request() {
        let session = session(ScriptedTransport::new());
        let mut surface = RecordingSurface::new();

        for text in ["", "   ", "\n\t"] {
            assert_eq!(
                session.submit(text, &mut surface).await,
                SubmitOutcome::Ignored(IgnoreReason::EmptyInput)
            );
        }
        assert!(session.transport().requests().is_empty());
        assert!(surface.events().is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_a_no_op() {
        let (tx, rx) = mpsc::unbounded();
        let transport = ScriptedTransport::new();
        transport.push(Scripted::Channel(rx));
        let session = session(transport);
        let mut first_surface = RecordingSurface::new();
        let mut second_surface = RecordingSurface::new();

        let first = session.submit("first", &mut first_surface);
        futures::pin_mut!(first);
        assert!(futures::poll!(&mut first).is_pending());
        assert!(session.is_loading());

        let second = session.submit("second", &mut second_surface).await;
        assert_eq!(second, SubmitOutcome::Ignored(IgnoreReason::Busy));
        assert!(second_surface.events().is_empty());
        assert_eq!(session.transport().requests().len(), 1);

        tx.unbounded_send(Ok(b"{\"content\":\"done\"}\n".to_vec()))
            .unwrap();
        drop(tx);
        let outcome = first.await;

        assert!(matches!(outcome, SubmitOutcome::Completed(ref s) if s.text == "done"));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_dropping_in_flight_submit_clears_loading() {
        let (_tx, rx) = mpsc::unbounded();
        let transport = ScriptedTransport::new();
        transport.push(Scripted::Channel(rx));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        {
            let pending = session.submit("abandoned", &mut surface);
            futures::pin_mut!(pending);
            assert!(futures::poll!(&mut pending).is_pending());
            assert!(session.is_loading());
        }

        assert!(!session.is_loading());
        assert_eq!(surface.control_toggles(), vec![false, true]);
        assert!(!surface.indicator_visible());
        assert_eq!(surface.events().last(), Some(&SurfaceEvent::FocusedInput));
    }

    #[tokio::test]
    async fn test_every_appended_fragment_scrolls_to_newest() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::chunks(&[
            "{\"content\":\"a\"}\n{\"content\":\"b\"}\n",
            "{\"content\":\"c\"}\n",
        ]));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        session.submit("hello", &mut surface).await;

        let events = surface.events();
        let appended: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, SurfaceEvent::Appended(..)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(appended.len(), 3);
        for i in appended {
            assert_eq!(events.get(i + 1), Some(&SurfaceEvent::Scrolled), "event {i}");
        }
    }

    #[tokio::test]
    async fn test_http_500_renders_one_error_bubble_and_restores_idle() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::Status(500));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        let outcome = session.submit("hello", &mut surface).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ChatError::Transport { status: 500 })
        );
        let assistant: Vec<_> = surface
            .messages()
            .into_iter()
            .filter(|m| m.sender == Sender::Assistant)
            .collect();
        assert_eq!(assistant.len(), 1);
        assert!(assistant[0].text.contains(ENDPOINT));

        assert!(!session.is_loading());
        assert_eq!(surface.control_toggles(), vec![false, true]);
        let events = surface.events();
        assert_eq!(events.last(), Some(&SurfaceEvent::FocusedInput));
        assert!(!surface.indicator_visible());
    }

    #[tokio::test]
    async fn test_missing_body_and_network_failure_are_fatal() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::NoBody);
        transport.push(Scripted::Network("CORS rejected".to_string()));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        assert_eq!(
            session.submit("one", &mut surface).await,
            SubmitOutcome::Failed(ChatError::StreamUnavailable)
        );
        assert_eq!(
            session.submit("two", &mut surface).await,
            SubmitOutcome::Failed(ChatError::Network("CORS rejected".to_string()))
        );
        assert!(!session.is_loading());
        assert_eq!(surface.control_toggles(), vec![false, true, false, true]);
    }

    #[tokio::test]
    async fn test_mid_stream_failure_keeps_partial_reply_and_adds_error() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::Chunks(vec![
            Ok(b"{\"content\":\"Half\"}\n".to_vec()),
            Err(ChatError::StreamRead("connection reset".to_string())),
        ]));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        let outcome = session.submit("hello", &mut surface).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ChatError::StreamRead(_))));
        let messages = surface.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "Half");
        assert!(messages[2].text.contains(ENDPOINT));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_indicator_is_replaced_by_reply_bubble() {
        let transport = ScriptedTransport::new();
        transport.push(Scripted::chunks(&["{\"content\":\"x\"}\n"]));
        let session = session(transport);
        let mut surface = RecordingSurface::new();

        session.submit("hello", &mut surface).await;

        let events = surface.events();
        let shown = events
            .iter()
            .position(|e| *e == SurfaceEvent::Indicator(true))
            .unwrap();
        let hidden = events
            .iter()
            .position(|e| *e == SurfaceEvent::Indicator(false))
            .unwrap();
        let reply = events
            .iter()
            .position(|e| matches!(e, SurfaceEvent::Pushed(Sender::Assistant, _)))
            .unwrap();
        assert!(shown < hidden && hidden < reply);
        assert!(events.contains(&SurfaceEvent::ClearedInput));
    }
}
