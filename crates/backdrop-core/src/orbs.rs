//! Ambient orbs: a few large radial-gradient blobs drifting behind the particles.

use crate::constants::{ORB_ANCHORS, ORB_COUNT, ORB_DRIFT, ORB_RADII};
use crate::scheduler::Layer;
use crate::surface::Surface;
use crate::theme::{Rgba, Theme, ThemeSource};
use crate::tracker::Viewport;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub drift: Vec2,
}

pub type OrbSet = SmallVec<[Orb; ORB_COUNT]>;

/// Fixed layout scaled to the viewport, coloured from `theme`'s orb palette.
pub fn spawn_orbs(viewport: Viewport, theme: Theme) -> OrbSet {
    let size = viewport.size();
    let palette = theme.orb_palette();
    (0..ORB_COUNT)
        .map(|i| Orb {
            position: Vec2::from(ORB_ANCHORS[i]) * size,
            radius: ORB_RADII[i],
            color: palette[i],
            drift: Vec2::from(ORB_DRIFT[i]),
        })
        .collect()
}

/// Advance by the drift vector; reverse an axis only once the whole disc
/// has left the viewport on that axis.
pub fn move_orb(orb: &mut Orb, viewport: Viewport) {
    orb.position += orb.drift;

    let (p, r) = (orb.position, orb.radius);
    if p.x - r > viewport.width || p.x + r < 0.0 {
        orb.drift.x = -orb.drift.x;
    }
    if p.y - r > viewport.height || p.y + r < 0.0 {
        orb.drift.y = -orb.drift.y;
    }
}

#[inline]
pub fn draw_orb(surface: &mut dyn Surface, orb: &Orb) {
    surface.fill_radial_gradient(orb.position, orb.radius, orb.color, Rgba::TRANSPARENT);
}

pub struct OrbLayer {
    orbs: OrbSet,
    viewport: Viewport,
    theme: ThemeSource,
}

impl OrbLayer {
    pub fn new(viewport: Viewport, theme: ThemeSource) -> Self {
        let orbs = spawn_orbs(viewport, theme.get());
        Self {
            orbs,
            viewport,
            theme,
        }
    }

    #[inline]
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rebuild all orbs for the current theme; positions restart from the layout.
    pub fn reinitialize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.orbs = spawn_orbs(viewport, self.theme.get());
    }
}

impl Layer for OrbLayer {
    fn name(&self) -> &'static str {
        "orbs"
    }

    // Draw first, then move; back-to-front in spawn order.
    fn render_frame(&mut self, surface: &mut dyn Surface) {
        for orb in &self.orbs {
            draw_orb(surface, orb);
        }
        for orb in &mut self.orbs {
            move_orb(orb, self.viewport);
        }
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.reinitialize(viewport);
    }

    fn on_theme_change(&mut self, theme: Theme) {
        self.orbs = spawn_orbs(self.viewport, theme);
    }
}
