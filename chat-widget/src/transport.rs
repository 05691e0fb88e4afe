//! Browser `fetch` transport with incremental body reads.

use async_trait::async_trait;
use chat_core::{ByteStream, ChatError, ChatTransport};
use futures_util::stream::{self, StreamExt};
use gloo_net::http::Request;
use js_sys::{Reflect, Uint8Array};
use shared_types::ChatRequest;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ReadableStreamDefaultReader, RequestMode};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn open(&self, endpoint: &str, request: &ChatRequest) -> Result<ByteStream, ChatError> {
        let body = serde_json::to_string(request)
            .map_err(|e| ChatError::Network(format!("Failed to serialize request: {e}")))?;

        let response = Request::post(endpoint)
            .mode(RequestMode::Cors)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| ChatError::Network(format!("Failed to build request: {e}")))?
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("Request failed: {e}")))?;

        if !response.ok() {
            return Err(ChatError::Transport {
                status: response.status(),
            });
        }

        let body = response.body().ok_or(ChatError::StreamUnavailable)?;
        let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();
        Ok(reader_stream(reader))
    }
}

/// Pull chunks until the reader reports `done`. A failed read ends the
/// stream after yielding the error.
fn reader_stream(reader: ReadableStreamDefaultReader) -> ByteStream {
    stream::unfold(Some(reader), |state| async move {
        let reader = state?;
        match read_chunk(&reader).await {
            Ok(Some(bytes)) => Some((Ok(bytes), Some(reader))),
            Ok(None) => None,
            Err(e) => Some((Err(e), None)),
        }
    })
    .boxed_local()
}

async fn read_chunk(reader: &ReadableStreamDefaultReader) -> Result<Option<Vec<u8>>, ChatError> {
    let result = JsFuture::from(reader.read())
        .await
        .map_err(|e| ChatError::StreamRead(js_error_text(&e)))?;

    let done = Reflect::get(&result, &JsValue::from_str("done"))
        .map_err(|e| ChatError::StreamRead(js_error_text(&e)))?
        .as_bool()
        .unwrap_or(true);
    if done {
        return Ok(None);
    }

    let value = Reflect::get(&result, &JsValue::from_str("value"))
        .map_err(|e| ChatError::StreamRead(js_error_text(&e)))?;
    Ok(Some(Uint8Array::new(&value).to_vec()))
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
