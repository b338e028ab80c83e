use backdrop_core::Tracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport (client) coordinates.
///
/// Both canvases cover the window, so client coordinates are canvas
/// coordinates as well.
pub fn wire_pointermove(tracker: &Tracker) {
    let tracker = tracker.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        tracker.set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
