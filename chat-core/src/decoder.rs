//! Restartable decoder for newline-delimited JSON records.
//!
//! Bytes are buffered until a `\n` arrives, so a record (or a multi-byte UTF-8
//! sequence) split across chunk boundaries is reassembled instead of being
//! dropped as a parse failure.

use shared_types::StreamRecord;

use crate::error::ChatError;

/// Outcome of one non-blank line: a record, or `ChatError::MalformedRecord`.
pub type DecodedLine = Result<StreamRecord, ChatError>;

#[derive(Debug, Default)]
pub struct RecordDecoder {
    buffer: Vec<u8>,
    // Prefix of `buffer` already known to contain no newline.
    scanned: usize,
}

impl RecordDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every line it completed, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<DecodedLine> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n') {
            let end = self.scanned + offset;
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            self.scanned = 0;
            if let Some(decoded) = decode_line(&line) {
                lines.push(decoded);
            }
        }
        self.scanned = self.buffer.len();
        lines
    }

    /// Flush a trailing line that was never terminated by a newline.
    pub fn finish(&mut self) -> Vec<DecodedLine> {
        let rest = std::mem::take(&mut self.buffer);
        self.scanned = 0;
        decode_line(&rest).into_iter().collect()
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.buffer.len()
    }
}

fn decode_line(bytes: &[u8]) -> Option<DecodedLine> {
    let text = String::from_utf8_lossy(bytes);
    let line = text.trim();
    if line.is_empty() {
        return None;
    }

    Some(
        serde_json::from_str::<serde_json::Value>(line)
            .map(|value| StreamRecord::from_value(&value))
            .map_err(|e| ChatError::MalformedRecord {
                line: line.to_string(),
                reason: e.to_string(),
            }),
    )
}
