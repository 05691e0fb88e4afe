//! Light/dark theme selection.
//!
//! The initial theme comes from, in order: the persisted choice, the system
//! `prefers-color-scheme: dark` signal, then [`Theme::default`] (light).

use shared_types::Theme;

/// Where a [`ThemeController`] reads preferences from and writes them to.
pub trait ThemeHost {
    /// Raw persisted value, if any.
    fn stored_theme(&self) -> Option<String>;

    fn store_theme(&mut self, theme: Theme);

    fn system_prefers_dark(&self) -> bool;

    /// Set the document-level theme attribute and anything keyed off it.
    fn apply_to_document(&mut self, theme: Theme);
}

pub fn resolve_initial_theme<H: ThemeHost + ?Sized>(host: &H) -> Theme {
    if let Some(stored) = host.stored_theme() {
        match stored.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!("Ignoring stored theme preference: {}", e),
        }
    }

    if host.system_prefers_dark() {
        Theme::Dark
    } else {
        Theme::default()
    }
}

pub struct ThemeController<H> {
    host: H,
    current: Theme,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Resolve the starting theme and apply it.
    pub fn initialize(host: H) -> Self {
        let theme = resolve_initial_theme(&host);
        let mut controller = Self {
            host,
            current: theme,
        };
        controller.apply(theme);
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`. Applying the current theme again is harmless.
    pub fn apply(&mut self, theme: Theme) {
        self.host.apply_to_document(theme);
        self.host.store_theme(theme);
        self.current = theme;
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
