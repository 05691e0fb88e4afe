use wasm_bindgen::JsCast;

pub const INPUT_ID: &str = "chat-input";
pub const MESSAGE_LIST_ID: &str = "message-list";

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

pub fn focus_element(id: &str) {
    if let Some(element) =
        element_by_id(id).and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

pub fn scroll_to_bottom(id: &str) {
    if let Some(element) = element_by_id(id) {
        element.set_scroll_top(element.scroll_height());
    }
}
