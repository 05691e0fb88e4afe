use chat_core::ThemeHost;
use shared_types::Theme;

/// Theme preference backed by `localStorage`, `matchMedia` and the
/// `data-theme` attribute on `<html>`.
pub struct WebThemeHost {
    storage_key: String,
}

impl WebThemeHost {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl ThemeHost for WebThemeHost {
    fn stored_theme(&self) -> Option<String> {
        self.storage()
            .and_then(|storage| storage.get_item(&self.storage_key).ok().flatten())
    }

    fn store_theme(&mut self, theme: Theme) {
        if let Some(storage) = self.storage() {
            if storage.set_item(&self.storage_key, theme.as_str()).is_err() {
                dioxus_logger::tracing::warn!("Failed to persist theme preference");
            }
        }
    }

    fn system_prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn apply_to_document(&mut self, theme: Theme) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        }
    }
}
