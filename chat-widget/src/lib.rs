pub mod components;
pub mod dom;
pub mod styles;
pub mod surface;
pub mod theme;
pub mod transport;

pub use components::*;
pub use surface::SignalSurface;
pub use theme::WebThemeHost;
pub use transport::FetchTransport;
