use thiserror::Error;

/// Failures of a single chat submission.
///
/// Everything except [`ChatError::MalformedRecord`] is fatal to the request.
/// Malformed records are logged and skipped by the consumer and never
/// returned from a submit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    #[error("response body is not readable as a stream")]
    StreamUnavailable,

    #[error("request failed: {0}")]
    Network(String),

    #[error("stream read failed: {0}")]
    StreamRead(String),

    #[error("could not parse record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },
}

impl ChatError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ChatError::MalformedRecord { .. })
    }

    /// Static text shown in the assistant bubble when a request fails.
    pub fn user_message(endpoint: &str) -> String {
        format!(
            "Failed to connect to the server. Make sure the backend is running at {endpoint} and CORS is configured correctly."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_carries_status() {
        let err = ChatError::Transport { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_record_is_not_fatal() {
        let err = ChatError::MalformedRecord {
            line: "{oops".to_string(),
            reason: "EOF while parsing".to_string(),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_user_message_names_endpoint() {
        let text = ChatError::user_message("http://localhost:8000/api/v1/chat/stream");
        assert!(text.contains("http://localhost:8000/api/v1/chat/stream"));
    }
}
