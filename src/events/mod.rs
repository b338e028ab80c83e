pub mod pointer;
pub mod theme;

use backdrop_core::Tracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Forward window resizes into the tracker; attached layers rebuild from there.
pub fn wire_resize(tracker: &Tracker) {
    let tracker = tracker.clone();
    let closure = Closure::wrap(Box::new(move || {
        let v = dom::window_viewport();
        tracker.set_viewport(v.width, v.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
