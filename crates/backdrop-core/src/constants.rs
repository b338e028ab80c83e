use crate::theme::Rgba;

// Shared tuning constants for the particle field and the orb layer.

// Particle field
pub const PARTICLE_COUNT: usize = 75;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0; // exclusive
pub const PARTICLE_SPEED_MAX: f32 = 0.5; // per axis, velocity in [-max, max)
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 1.0; // exclusive
pub const PARTICLE_GLOW_BLUR: f32 = 15.0;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 150.0; // influence radius
pub const REPULSION_STRENGTH: f32 = 3.0; // displacement at the pointer centre

// Proximity edges
pub const CONNECTION_DISTANCE: f32 = 120.0;
pub const CONNECTION_MAX_ALPHA: f32 = 0.2;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;
pub const CONNECTION_COLOR: Rgba = Rgba::new(255, 255, 255, 1.0); // alpha replaced per edge

// Orb layer
pub const ORB_COUNT: usize = 3;
pub const ORB_ANCHORS: [[f32; 2]; ORB_COUNT] = [[0.2, 0.3], [0.7, 0.6], [0.4, 0.8]]; // fraction of viewport
pub const ORB_RADII: [f32; ORB_COUNT] = [250.0, 300.0, 200.0];
pub const ORB_DRIFT: [[f32; 2]; ORB_COUNT] = [[0.2, 0.1], [-0.15, 0.2], [0.1, -0.15]];

// Smallest accepted viewport dimension
pub const MIN_VIEWPORT_DIM: f32 = 1.0;

// Frame statistics
pub const STATS_LOG_INTERVAL_FRAMES: u64 = 600;

// Palettes
pub const PARTICLE_PALETTE_LIGHT: [Rgba; 3] = [
    Rgba::new(225, 48, 108, 0.8),
    Rgba::new(247, 119, 55, 0.6),
    Rgba::new(252, 175, 69, 0.5),
];
pub const PARTICLE_PALETTE_DARK: [Rgba; 3] = [
    Rgba::new(255, 255, 255, 1.0),
    Rgba::new(180, 180, 255, 1.0),
    Rgba::new(255, 200, 255, 1.0),
];
pub const ORB_PALETTE_LIGHT: [Rgba; ORB_COUNT] = [
    Rgba::new(225, 48, 108, 0.4),
    Rgba::new(247, 119, 55, 0.35),
    Rgba::new(252, 175, 69, 0.3),
];
pub const ORB_PALETTE_DARK: [Rgba; ORB_COUNT] = [
    Rgba::new(255, 255, 255, 0.6),
    Rgba::new(150, 150, 255, 0.55),
    Rgba::new(255, 180, 255, 0.5),
];
