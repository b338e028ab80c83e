//! Particle field: small drifting dots that bounce off the viewport edges,
//! shy away from the pointer and link up with nearby neighbours.

use crate::constants::*;
use crate::scheduler::Layer;
use crate::surface::Surface;
use crate::theme::{Rgba, Theme, ThemeSource};
use crate::tracker::{PointerState, Tracker, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Disc radius in [1, 4).
    pub size: f32,
    pub color: Rgba,
    /// Base opacity in [0.2, 1). Kept with the particle but not composited
    /// into the fill; the palette colour carries the visible alpha.
    pub opacity: f32,
}

#[inline]
pub fn pick_color<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Rgba {
    let palette = theme.particle_palette();
    palette[rng.gen_range(0..palette.len())]
}

pub fn spawn_particle<R: Rng + ?Sized>(viewport: Viewport, theme: Theme, rng: &mut R) -> Particle {
    let position = Vec2::new(
        rng.gen_range(0.0..viewport.width),
        rng.gen_range(0.0..viewport.height),
    );
    let size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
    let velocity = Vec2::new(
        rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
        rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
    );
    let color = pick_color(theme, rng);
    let opacity = rng.gen_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX);
    Particle {
        position,
        velocity,
        size,
        color,
        opacity,
    }
}

pub fn spawn_particles<R: Rng + ?Sized>(
    viewport: Viewport,
    theme: Theme,
    rng: &mut R,
) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| spawn_particle(viewport, theme, rng))
        .collect()
}

/// Displacement pushing a point at `position` away from the pointer.
///
/// Falls off linearly from [`REPULSION_STRENGTH`] at the pointer centre to
/// zero at the influence radius. At distance zero the push is along +x.
#[inline]
pub fn repulsion(position: Vec2, pointer: &PointerState) -> Vec2 {
    let delta = position - pointer.position;
    let distance = delta.length();
    if distance >= pointer.radius {
        return Vec2::ZERO;
    }
    let dir = if distance > 0.0 { delta / distance } else { Vec2::X };
    let force = (pointer.radius - distance) / pointer.radius;
    dir * force * REPULSION_STRENGTH
}

/// One physics step: integrate, reflect at the edges, then nudge away from the pointer.
///
/// The bounce only flips velocity; the position is not clamped, so a
/// particle may sit just outside the viewport for a frame. The pointer
/// nudge is positional and leaves the velocity untouched.
pub fn update_particle(particle: &mut Particle, viewport: Viewport, pointer: &PointerState) {
    particle.position += particle.velocity;

    let p = particle.position;
    if p.x < 0.0 || p.x > viewport.width {
        particle.velocity.x = -particle.velocity.x;
    }
    if p.y < 0.0 || p.y > viewport.height {
        particle.velocity.y = -particle.velocity.y;
    }

    particle.position += repulsion(particle.position, pointer);
}

#[inline]
pub fn draw_particle(surface: &mut dyn Surface, particle: &Particle) {
    surface.fill_circle(
        particle.position,
        particle.size,
        particle.color,
        PARTICLE_GLOW_BLUR,
    );
}

/// Stroke alpha for an edge of length `distance`, or `None` past the threshold.
#[inline]
pub fn connection_alpha(distance: f32) -> Option<f32> {
    (distance < CONNECTION_DISTANCE)
        .then(|| CONNECTION_MAX_ALPHA * (1.0 - distance / CONNECTION_DISTANCE))
}

/// Link every unordered pair closer than [`CONNECTION_DISTANCE`].
pub fn draw_connections(surface: &mut dyn Surface, particles: &[Particle]) {
    for (i, a) in particles.iter().enumerate() {
        for bp in &particles[i + 1..] {
            let distance = a.position.distance(bp.position);
            if let Some(alpha) = connection_alpha(distance) {
                surface.stroke_line(
                    a.position,
                    bp.position,
                    CONNECTION_COLOR.with_alpha(alpha),
                    CONNECTION_LINE_WIDTH,
                );
            }
        }
    }
}

pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    viewport: Viewport,
    tracker: Tracker,
    theme: ThemeSource,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(tracker: Tracker, theme: ThemeSource, mut rng: R) -> Self {
        let viewport = tracker.viewport();
        let particles = spawn_particles(viewport, theme.get(), &mut rng);
        Self {
            particles,
            viewport,
            tracker,
            theme,
            rng,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the whole set for a new viewport.
    pub fn reinitialize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.particles = spawn_particles(viewport, self.theme.get(), &mut self.rng);
    }

    /// Draw a fresh colour from `theme`'s palette for every particle,
    /// leaving motion, size and opacity as they are.
    pub fn recolor_all(&mut self, theme: Theme) {
        for p in &mut self.particles {
            p.color = pick_color(theme, &mut self.rng);
        }
    }

    /// Physics step for every particle with the current pointer, no drawing.
    pub fn step(&mut self) {
        let pointer = self.tracker.pointer();
        for p in &mut self.particles {
            update_particle(p, self.viewport, &pointer);
        }
    }
}

impl<R: Rng> Layer for ParticleField<R> {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn render_frame(&mut self, surface: &mut dyn Surface) {
        let pointer = self.tracker.pointer();
        for p in &mut self.particles {
            update_particle(p, self.viewport, &pointer);
            draw_particle(surface, p);
        }
        draw_connections(surface, &self.particles);
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.reinitialize(viewport);
    }

    fn on_theme_change(&mut self, theme: Theme) {
        self.recolor_all(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repulsion_vanishes_at_the_influence_radius() {
        let pointer = PointerState::at(100.0, 100.0);
        let d = repulsion(Vec2::new(100.0 + POINTER_RADIUS, 100.0), &pointer);
        assert_eq!(d, Vec2::ZERO);
        let far = repulsion(Vec2::new(400.0, 400.0), &pointer);
        assert_eq!(far, Vec2::ZERO);
    }

    #[test]
    fn repulsion_is_maximal_at_the_pointer() {
        let pointer = PointerState::at(10.0, 10.0);
        let d = repulsion(Vec2::new(10.0, 10.0), &pointer);
        assert_eq!(d, Vec2::new(REPULSION_STRENGTH, 0.0));
    }

    #[test]
    fn repulsion_points_away_and_decays_linearly() {
        let pointer = PointerState::at(0.0, 0.0);
        let half = repulsion(Vec2::new(0.0, POINTER_RADIUS / 2.0), &pointer);
        assert!(half.x.abs() < 1e-6);
        assert!((half.y - REPULSION_STRENGTH / 2.0).abs() < 1e-5);
        let near = repulsion(Vec2::new(-10.0, 0.0), &pointer);
        assert!(near.x < 0.0 && near.x.abs() > half.y);
    }

    #[test]
    fn connection_alpha_falls_to_zero_at_threshold() {
        assert_eq!(connection_alpha(0.0), Some(CONNECTION_MAX_ALPHA));
        assert_eq!(connection_alpha(CONNECTION_DISTANCE), None);
        assert_eq!(connection_alpha(CONNECTION_DISTANCE + 1.0), None);
        let mut prev = f32::MAX;
        for i in 0..120 {
            let a = connection_alpha(i as f32).unwrap_or(0.0);
            assert!(a < prev, "alpha not decreasing at distance {i}");
            prev = a;
        }
        let near_edge = connection_alpha(CONNECTION_DISTANCE - 1e-3).unwrap_or(1.0);
        assert!(near_edge < 1e-5);
    }

    #[test]
    fn bounce_flips_velocity_without_clamping() {
        let viewport = Viewport::new(100.0, 100.0);
        let far_pointer = PointerState::at(-1000.0, -1000.0);
        let mut p = Particle {
            position: Vec2::new(99.8, 0.2),
            velocity: Vec2::new(0.4, -0.3),
            size: 2.0,
            color: Theme::Dark.particle_palette()[0],
            opacity: 0.5,
        };
        update_particle(&mut p, viewport, &far_pointer);
        assert!(p.position.x > 100.0);
        assert!(p.position.y < 0.0);
        assert_eq!(p.velocity, Vec2::new(-0.4, 0.3));
    }
}
