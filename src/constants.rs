// DOM wiring constants for the browser front-end.

pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const ORB_CANVAS_ID: &str = "orbCanvas";

// Attribute on <body> that carries the colour theme
pub const THEME_ATTRIBUTE: &str = "data-theme";
