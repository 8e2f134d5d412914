use leptos::ev;
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

/// Calls `on_dismiss` for every document click that lands outside the
/// element returned by `boundary`. A `None` boundary means nothing is open.
pub fn use_dismiss_on_outside<B, D>(boundary: B, on_dismiss: D)
where
    B: Fn() -> Option<web_sys::Element> + 'static,
    D: Fn() + 'static,
{
    // the listener is removed with the calling component's owner
    let _stop = use_event_listener(use_document(), ev::click, move |event| {
        let Some(boundary) = boundary() else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !boundary.contains(target.as_ref()) {
            on_dismiss();
        }
    });
}
