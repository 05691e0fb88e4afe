use dioxus::launch;
use dioxus_logger::tracing::Level;

use chat_widget::ChatApp;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(ChatApp);
}
