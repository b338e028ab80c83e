// Recording surface used by the host-side tests in place of a canvas.

#![allow(dead_code)]
use backdrop_core::{Rgba, Surface, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    Gradient {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Line { .. }))
    }

    pub fn gradients(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Gradient { .. }))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(Op::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.ops.push(Op::Gradient {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
