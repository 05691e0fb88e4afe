use futures::{Stream, StreamExt};

use crate::decoder::{DecodedLine, RecordDecoder};
use crate::error::ChatError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Concatenation of every `content` fragment in record order
    pub text: String,
    /// Records that parsed, with or without content
    pub records: usize,
    /// Lines skipped because they were not valid JSON
    pub skipped: usize,
}

/// Drives a response body through the record decoder and hands every content
/// fragment to the caller as soon as its line is complete.
#[derive(Debug, Default)]
pub struct StreamConsumer {
    decoder: RecordDecoder,
    summary: StreamSummary,
}

impl StreamConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `stream` until the transport signals completion.
    ///
    /// A fatal read error aborts with `ChatError::StreamRead`; malformed
    /// records, whether decoded here or reported by the transport, are
    /// skipped.
    pub async fn consume<S, F>(
        mut self,
        mut stream: S,
        mut on_content: F,
    ) -> Result<StreamSummary, ChatError>
    where
        S: Stream<Item = Result<Vec<u8>, ChatError>> + Unpin,
        F: FnMut(&str),
    {
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => self.feed(&bytes, &mut on_content),
                Err(e) if !e.is_fatal() => self.skip(&e),
                Err(e @ ChatError::StreamRead(_)) => return Err(e),
                Err(other) => return Err(ChatError::StreamRead(other.to_string())),
            }
        }
        Ok(self.finish(&mut on_content))
    }

    pub fn feed<F: FnMut(&str)>(&mut self, chunk: &[u8], on_content: &mut F) {
        let lines = self.decoder.push(chunk);
        self.apply(lines, on_content);
    }

    pub fn finish<F: FnMut(&str)>(mut self, on_content: &mut F) -> StreamSummary {
        let lines = self.decoder.finish();
        self.apply(lines, on_content);
        tracing::debug!(
            records = self.summary.records,
            skipped = self.summary.skipped,
            chars = self.summary.text.chars().count(),
            "Chat stream completed"
        );
        self.summary
    }

    fn apply<F: FnMut(&str)>(&mut self, lines: Vec<DecodedLine>, on_content: &mut F) {
        for line in lines {
            match line {
                Ok(record) => {
                    self.summary.records += 1;
                    if let Some(content) = record.content {
                        self.summary.text.push_str(&content);
                        on_content(&content);
                    }
                }
                Err(e) => self.skip(&e),
            }
        }
    }

    fn skip(&mut self, error: &ChatError) {
        self.summary.skipped += 1;
        tracing::warn!("Could not parse JSON chunk: {}", error);
    }
}
