//! Streaming chat logic shared by every front end.
//!
//! Nothing in this crate touches a document: the Dioxus widget plugs in
//! through [`ChatTransport`], [`ChatSurface`] and [`ThemeHost`].

pub mod config;
pub mod consumer;
pub mod decoder;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod session;
pub mod surface;
pub mod theme;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use config::ChatConfig;
pub use consumer::{StreamConsumer, StreamSummary};
pub use decoder::RecordDecoder;
pub use error::ChatError;
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use session::{ChatSession, IgnoreReason, SubmitOutcome};
pub use surface::{BubbleId, ChatSurface};
pub use theme::{ThemeController, ThemeHost};
pub use transport::{ByteStream, ChatTransport};

pub use shared_types::{ChatMessage, ChatRequest, Sender, SessionId, StreamRecord, Theme};
