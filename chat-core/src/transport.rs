use async_trait::async_trait;
use futures::stream::LocalBoxStream;
use shared_types::ChatRequest;

use crate::error::ChatError;

/// Response body as a sequence of byte chunks, in transport order.
pub type ByteStream = LocalBoxStream<'static, Result<Vec<u8>, ChatError>>;

/// Issues the streaming chat request.
///
/// Implementations POST `request` as JSON with `Content-Type` and `Accept`
/// set to `application/json`, and map failures onto [`ChatError`]:
/// a non-success status is `Transport`, a missing body is
/// `StreamUnavailable`, a request that never got a response is `Network`.
///
/// Futures are not `Send`: the browser transport holds JS handles and runs on
/// the page's only thread.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn open(&self, endpoint: &str, request: &ChatRequest) -> Result<ByteStream, ChatError>;
}
