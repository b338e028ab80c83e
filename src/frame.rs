use backdrop_core::{FrameLoop, Layer, LoopControl, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &RafSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_loop` from `requestAnimationFrame` until its token is cancelled.
///
/// On cancellation the callback releases itself, which also drops this
/// task's reference to the loop.
pub fn start_loop<L, S>(frame_loop: Rc<RefCell<FrameLoop<L, S>>>)
where
    L: Layer + 'static,
    S: Surface + 'static,
{
    let tick: RafSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let name = frame_loop.borrow().layer().name();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let control = match frame_loop.try_borrow_mut() {
            Ok(mut fl) => fl.tick(),
            Err(_) => LoopControl::Continue,
        };
        match control {
            LoopControl::Continue => request_frame(&tick_clone),
            LoopControl::Stop => {
                log::info!("[{}] frame loop stopped", name);
                _ = tick_clone.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
