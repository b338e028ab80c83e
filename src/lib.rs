#![cfg(target_arch = "wasm32")]
use backdrop_core::{
    attach, FrameLoop, LoopHandle, OrbLayer, ParticleField, Surface, Theme, ThemeSource, Tracker,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

use canvas::CanvasSurface;
use constants::{ORB_CANVAS_ID, PARTICLE_CANVAS_ID};

/// Live backdrop state: shared inputs plus the owners of both loops.
struct Backdrop {
    theme: ThemeSource,
    loops: Vec<LoopHandle>,
    theme_observer: Option<web::MutationObserver>,
}

impl Backdrop {
    fn teardown(&mut self) {
        if let Some(obs) = self.theme_observer.take() {
            obs.disconnect();
        }
        for handle in &mut self.loops {
            handle.cancel();
        }
        self.loops.clear();
    }
}

thread_local! {
    static BACKDROP: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[backdrop] starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[backdrop] init error: {:?}", e);
        }
    });
    Ok(())
}

/// Switch the theme from script. Unknown names select the light theme.
#[wasm_bindgen]
pub fn set_theme(name: &str) {
    let theme = Theme::from_attribute(Some(name));
    if let Some(document) = dom::window_document() {
        dom::set_body_theme(&document, theme);
    }
    BACKDROP.with(|b| {
        if let Some(b) = b.borrow().as_ref() {
            b.theme.set(theme);
        }
    });
}

/// Stop both loops and detach every subscription.
#[wasm_bindgen]
pub fn teardown() {
    let taken = BACKDROP.with(|b| b.borrow_mut().take());
    if let Some(mut b) = taken {
        b.teardown();
        log::info!("[backdrop] torn down");
    }
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = dom::window_viewport();
    let theme = ThemeSource::new(dom::body_theme(&document));
    let tracker = Tracker::new(viewport);

    let mut particle_surface =
        CanvasSurface::new(dom::canvas_by_id(&document, PARTICLE_CANVAS_ID)?)?;
    let mut orb_surface = CanvasSurface::new(dom::canvas_by_id(&document, ORB_CANVAS_ID)?)?;
    particle_surface.resize(viewport);
    orb_surface.resize(viewport);

    let particles = ParticleField::new(tracker.clone(), theme.clone(), StdRng::from_entropy());
    let orbs = OrbLayer::new(viewport, theme.clone());
    log::info!(
        "[backdrop] {}x{} theme={} particles={} orbs={}",
        viewport.width,
        viewport.height,
        theme.get(),
        particles.particles().len(),
        orbs.orbs().len()
    );

    let particle_loop = Rc::new(RefCell::new(FrameLoop::new(particles, particle_surface)));
    let orb_loop = Rc::new(RefCell::new(FrameLoop::new(orbs, orb_surface)));
    let loops = vec![
        attach(&orb_loop, &theme, &tracker),
        attach(&particle_loop, &theme, &tracker),
    ];

    events::wire_resize(&tracker);
    events::pointer::wire_pointermove(&tracker);
    let theme_observer = match events::theme::wire_theme_observer(&document, &theme) {
        Ok(obs) => Some(obs),
        Err(e) => {
            log::warn!("[theme] observer unavailable: {:?}", e);
            None
        }
    };

    frame::start_loop(orb_loop);
    frame::start_loop(particle_loop);

    BACKDROP.with(|b| {
        *b.borrow_mut() = Some(Backdrop {
            theme,
            loops,
            theme_observer,
        })
    });
    Ok(())
}
