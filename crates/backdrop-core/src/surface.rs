use crate::theme::Rgba;
use crate::tracker::Viewport;
use glam::Vec2;

/// 2D raster target a layer paints into.
///
/// Implementations own any transient drawing state (shadow blur, stroke
/// width, gradients); a call must not leak such state into the next one.
pub trait Surface {
    fn size(&self) -> Viewport;

    fn clear(&mut self);

    /// Filled disc with an optional glow halo of `glow` blur units in the same colour.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    /// Disc of `radius` filled with a radial gradient from `inner` at the
    /// centre to `outer` at the rim.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);

    /// Match the backing store to a new viewport. Surfaces with a fixed
    /// size may ignore this.
    fn resize(&mut self, _viewport: Viewport) {}
}
