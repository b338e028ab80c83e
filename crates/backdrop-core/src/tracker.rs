//! Last-known pointer position and viewport size, written by input events.

use crate::constants::{MIN_VIEWPORT_DIM, POINTER_RADIUS};
use crate::observable::{Observable, SubscriptionId};
use glam::Vec2;

/// Drawable area in CSS pixels. Dimensions are never below [`MIN_VIEWPORT_DIM`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_dim(width),
            height: clamp_dim(height),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MIN_VIEWPORT_DIM, MIN_VIEWPORT_DIM)
    }
}

#[inline]
fn clamp_dim(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_DIM)
    } else {
        MIN_VIEWPORT_DIM
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub radius: f32,
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            radius: POINTER_RADIUS,
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// Cloneable handle over the shared pointer and viewport state.
#[derive(Clone, Debug)]
pub struct Tracker {
    pointer: Observable<PointerState>,
    viewport: Observable<Viewport>,
}

impl Tracker {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: Observable::new(PointerState::default()),
            viewport: Observable::new(viewport),
        }
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer.get()
    }

    pub fn set_pointer(&self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer.set(PointerState::at(x, y));
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    pub fn set_viewport(&self, width: f32, height: f32) {
        self.viewport.set(Viewport::new(width, height));
    }

    pub fn on_resize(&self, f: impl FnMut(Viewport) + 'static) -> SubscriptionId {
        self.viewport.subscribe(f)
    }

    pub fn remove_resize_handler(&self, id: SubscriptionId) -> bool {
        self.viewport.unsubscribe(id)
    }
}
