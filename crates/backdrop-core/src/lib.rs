//! Platform-free core of the animated backdrop.
//!
//! Nothing in here touches the DOM: layers paint through the [`Surface`]
//! trait and read shared state through [`ThemeSource`] and [`Tracker`]
//! handles, so the whole simulation runs on the host in tests.

pub mod constants;
pub mod observable;
pub mod orbs;
pub mod particles;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod tracker;

pub use observable::*;
pub use orbs::{OrbLayer, Orb, OrbSet};
pub use particles::{Particle, ParticleField};
pub use scheduler::*;
pub use surface::Surface;
pub use theme::*;
pub use tracker::*;
