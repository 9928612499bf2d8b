//! Easing curves mapping linear progress `t ∈ [0, 1]` to eased progress.
//!
//! All curves are total on `[0, 1]`. Behaviour outside that domain is not
//! defined; the sequencer clamps progress before easing. `Elastic` overshoots
//! below 0 on its way to 1, so eased values are not confined to `[0, 1]`.

use std::f32::consts::PI;

/// Named easing curve, or a caller-supplied pure function.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    Linear,
    /// `t²`
    EaseIn,
    /// `1 - (1 - t)²`
    EaseOut,
    /// Quadratic in the first half, mirrored in the second.
    #[default]
    EaseInOut,
    /// Exponentially decaying sine; exact at both ends.
    Elastic,
    /// Four-segment quadratic bounce-out.
    Bounce,
    Custom(fn(f32) -> f32),
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => linear(t),
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
            Easing::Elastic => elastic(t),
            Easing::Bounce => bounce(t),
            Easing::Custom(f) => f(t),
        }
    }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

#[inline]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

pub fn elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let c4 = (2.0 * PI) / 3.0;
    -(2.0_f32).powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * c4).sin()
}

pub fn bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}
