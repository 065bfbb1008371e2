//! Small wrappers over `web-sys` used by every feature module.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, Node, Window};

/// Log a failed DOM call and turn it into an `Option`.
pub fn check<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {err:?}");
            None
        }
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Run `f` once the document has been parsed. Runs immediately when the
/// module is loaded after `DOMContentLoaded` has already fired.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once(f);
    if check(
        document.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref()),
        "listen for DOMContentLoaded",
    )
    .is_some()
    {
        callback.forget();
    }
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if check(
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        &format!("listen for {event}"),
    )
    .is_some()
    {
        closure.forget();
    }
}

/// The node an event was dispatched to, if it is one.
pub fn event_node(event: &Event) -> Option<Node> {
    event.target().and_then(|t| t.dyn_into::<Node>().ok())
}

/// A `window` global as a string: strings verbatim, other values as JSON.
pub fn global(window: &Window, name: &str) -> Option<String> {
    let value = check(js_sys::Reflect::get(window, &JsValue::from_str(name)), "read page global")?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    check(js_sys::JSON::stringify(&value), "serialize page global").map(String::from)
}
