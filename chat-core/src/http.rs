//! `reqwest` transport for native callers.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use shared_types::ChatRequest;

use crate::error::ChatError;
use crate::transport::{ByteStream, ChatTransport};

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ChatTransport for ReqwestTransport {
    async fn open(&self, endpoint: &str, request: &ChatRequest) -> Result<ByteStream, ChatError> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Transport {
                status: status.as_u16(),
            });
        }

        let stream = response.bytes_stream().map(|chunk| {
            chunk
                .map(|bytes| bytes.to_vec())
                .map_err(|e| ChatError::StreamRead(e.to_string()))
        });
        Ok(stream.boxed_local())
    }
}
