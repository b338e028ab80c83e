//! Per-layer frame loop with explicit cancellation.
//!
//! Each layer gets its own [`FrameLoop`]; the host drives `tick` once per
//! display refresh and stops re-arming as soon as it returns
//! [`LoopControl::Stop`]. [`attach`] wires theme and resize notifications
//! into the loop's layer and hands back a [`LoopHandle`] that owns the
//! cancellation token.

use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::observable::SubscriptionId;
use crate::surface::Surface;
use crate::theme::{Theme, ThemeSource};
use crate::tracker::{Tracker, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A continuously animated layer.
pub trait Layer {
    fn name(&self) -> &'static str;

    /// Advance and paint one frame onto an already cleared surface.
    fn render_frame(&mut self, surface: &mut dyn Surface);

    fn on_resize(&mut self, viewport: Viewport);

    fn on_theme_change(&mut self, theme: Theme);
}

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Rolling frame-time summary, logged at debug level.
#[derive(Debug)]
pub struct FrameStats {
    frames: u64,
    window_frames: u64,
    window_busy: Duration,
    window_start: Instant,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frames: 0,
            window_frames: 0,
            window_busy: Duration::ZERO,
            window_start: Instant::now(),
        }
    }
}

impl FrameStats {
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn record(&mut self, layer: &str, busy: Duration) {
        self.frames += 1;
        self.window_frames += 1;
        self.window_busy += busy;
        if self.window_frames >= STATS_LOG_INTERVAL_FRAMES {
            let elapsed = self.window_start.elapsed().as_secs_f32().max(1e-6);
            let avg_ms = self.window_busy.as_secs_f32() * 1000.0 / self.window_frames as f32;
            log::debug!(
                "[{}] {:.1} fps, {:.2} ms/frame work",
                layer,
                self.window_frames as f32 / elapsed,
                avg_ms
            );
            self.window_frames = 0;
            self.window_busy = Duration::ZERO;
            self.window_start = Instant::now();
        }
    }
}

pub struct FrameLoop<L, S> {
    layer: L,
    surface: S,
    token: CancelToken,
    stats: FrameStats,
}

impl<L: Layer, S: Surface> FrameLoop<L, S> {
    pub fn new(layer: L, surface: S) -> Self {
        Self {
            layer,
            surface,
            token: CancelToken::new(),
            stats: FrameStats::default(),
        }
    }

    #[inline]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut L {
        &mut self.layer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Clear and render one frame unless the loop has been cancelled.
    pub fn tick(&mut self) -> LoopControl {
        if self.token.is_cancelled() {
            return LoopControl::Stop;
        }
        let started = Instant::now();
        self.surface.clear();
        self.layer.render_frame(&mut self.surface);
        self.stats.record(self.layer.name(), started.elapsed());
        LoopControl::Continue
    }

    /// Resize the surface, then rebuild the layer for the new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        self.layer.on_resize(viewport);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.layer.on_theme_change(theme);
    }
}

/// Owner of a running loop. Cancels and detaches on [`LoopHandle::cancel`] or drop.
pub struct LoopHandle {
    name: &'static str,
    token: CancelToken,
    theme: ThemeSource,
    tracker: Tracker,
    theme_sub: Option<SubscriptionId>,
    resize_sub: Option<SubscriptionId>,
}

impl LoopHandle {
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.theme_sub.take() {
            self.theme.unsubscribe(id);
        }
        if let Some(id) = self.resize_sub.take() {
            self.tracker.remove_resize_handler(id);
        }
        if !self.token.is_cancelled() {
            log::info!("[{}] loop cancelled", self.name);
        }
        self.token.cancel();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Subscribe `frame_loop`'s layer to theme and resize changes.
///
/// Handlers rebuild or recolour the layer synchronously, so the next
/// `tick` always sees a complete entity set.
pub fn attach<L, S>(
    frame_loop: &Rc<RefCell<FrameLoop<L, S>>>,
    theme: &ThemeSource,
    tracker: &Tracker,
) -> LoopHandle
where
    L: Layer + 'static,
    S: Surface + 'static,
{
    let (name, token) = {
        let fl = frame_loop.borrow();
        (fl.layer.name(), fl.token())
    };

    let on_theme = frame_loop.clone();
    let theme_sub = theme.subscribe(move |t| match on_theme.try_borrow_mut() {
        Ok(mut fl) => {
            log::info!("[theme] {} -> {}", name, t);
            fl.set_theme(t);
        }
        Err(_) => log::warn!("[theme] {} busy, change to {} dropped", name, t),
    });

    let on_resize = frame_loop.clone();
    let resize_sub = tracker.on_resize(move |v| match on_resize.try_borrow_mut() {
        Ok(mut fl) => {
            log::info!("[resize] {} -> {}x{}", name, v.width, v.height);
            fl.resize(v);
        }
        Err(_) => log::warn!("[resize] {} busy, resize dropped", name),
    });

    LoopHandle {
        name,
        token,
        theme: theme.clone(),
        tracker: tracker.clone(),
        theme_sub: Some(theme_sub),
        resize_sub: Some(resize_sub),
    }
}
