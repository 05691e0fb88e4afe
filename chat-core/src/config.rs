pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/v1/chat/stream";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Streaming chat endpoint every submission is POSTed to
    pub endpoint: String,
    /// Local storage key holding the theme preference
    pub theme_storage_key: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl ChatConfig {
    /// Configuration baked in at compile time.
    ///
    /// The browser has no process environment, so `CHAT_API_ENDPOINT` is read
    /// when the crate is built.
    pub fn from_build_env() -> Self {
        Self {
            endpoint: build_env_str(option_env!("CHAT_API_ENDPOINT"), DEFAULT_ENDPOINT),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn build_env_str(value: Option<&'static str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
