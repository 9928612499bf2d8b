//! Componentwise linear interpolation for animated values.

use crate::error::AnimationError;
use glam::{Vec2, Vec3, Vec4};

/// A value the sequencer can interpolate between two endpoints.
///
/// `t` is the eased progress and is deliberately not clamped: overshooting
/// curves must be able to carry the value past either endpoint.
pub trait Interpolate: Clone + 'static {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for f64 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t as f64
    }
}

impl Interpolate for Vec2 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        *self + (*to - *self) * t
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        *self + (*to - *self) * t
    }
}

impl Interpolate for Vec4 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        *self + (*to - *self) * t
    }
}

impl<const N: usize> Interpolate for [f32; N] {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        let mut out = *self;
        for (o, b) in out.iter_mut().zip(to.iter()) {
            *o += (b - *o) * t;
        }
        out
    }
}

/// Linear RGB colour with components nominally in `[0, 1]`.
///
/// Interpolated in the same linear component space as positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, AnimationError> {
        let bad = || AnimationError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(bad());
        }
        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| bad());
        let (r, g, b) = match hex.len() {
            6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
            3 => {
                // #abc == #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(bad()),
        };
        Ok(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    /// CSS `rgb()` string with channels clamped into range.
    pub fn to_css(&self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({}, {}, {})", c(self.r), c(self.g), c(self.b))
    }
}

impl From<Vec3> for Rgb {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl Interpolate for Rgb {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self::new(
            Interpolate::lerp(&self.r, &to.r, t),
            Interpolate::lerp(&self.g, &to.g, t),
            Interpolate::lerp(&self.b, &to.b, t),
        )
    }
}
