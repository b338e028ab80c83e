//! Colour theme and the palettes it selects.
//!
//! The theme is flipped by the host page. Both layers read it through a
//! shared [`ThemeSource`] and react to changes with their own policy.

use crate::constants::{
    ORB_PALETTE_DARK, ORB_PALETTE_LIGHT, ORB_COUNT, PARTICLE_PALETTE_DARK, PARTICLE_PALETTE_LIGHT,
};
use crate::observable::Observable;
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) colour with 8-bit channels and a float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string accepted by canvas `fillStyle`/`strokeStyle`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme {0:?}")]
    Unknown(String),
}

impl Theme {
    /// Resolve the `data-theme` attribute. Anything other than a
    /// recognised name (including no attribute) selects [`Theme::Light`].
    pub fn from_attribute(value: Option<&str>) -> Theme {
        match value.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::warn!("[theme] {e}, using light");
                Theme::Light
            }
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn particle_palette(self) -> &'static [Rgba; 3] {
        match self {
            Theme::Light => &PARTICLE_PALETTE_LIGHT,
            Theme::Dark => &PARTICLE_PALETTE_DARK,
        }
    }

    #[inline]
    pub fn orb_palette(self) -> &'static [Rgba; ORB_COUNT] {
        match self {
            Theme::Light => &ORB_PALETTE_LIGHT,
            Theme::Dark => &ORB_PALETTE_DARK,
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else if name.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else {
            Err(ThemeError::Unknown(name.to_string()))
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared, observable theme flag.
pub type ThemeSource = Observable<Theme>;
