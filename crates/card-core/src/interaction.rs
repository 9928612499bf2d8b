//! Mouse-style interaction helpers: click/double-click/drag classification,
//! event throttling, and the card's expand/collapse animation presets.

use crate::animation::AnimationDescriptor;
use crate::constants::*;
use crate::easing::Easing;
use crate::error::{non_negative, positive, ConfigError};
use crate::lerp::Interpolate;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct ClickConfig {
    pub enable_double_click: bool,
    pub enable_drag: bool,
    pub double_click_delay_ms: f64,
    pub drag_threshold: f32,
    pub throttle_delay_ms: f64,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            enable_double_click: true,
            enable_drag: true,
            double_click_delay_ms: DOUBLE_CLICK_MS,
            drag_threshold: DRAG_THRESHOLD_PX,
            throttle_delay_ms: THROTTLE_MS,
        }
    }
}

impl ClickConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("double_click_delay_ms", self.double_click_delay_ms)?;
        non_negative("drag_threshold", self.drag_threshold)?;
        non_negative("throttle_delay_ms", self.throttle_delay_ms as f32)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    Click,
    DoubleClick,
}

/// Classifies presses. A press that follows the previous click within the
/// double-click delay is a double-click and does not start a drag.
#[derive(Clone, Debug)]
pub struct ClickTracker {
    config: ClickConfig,
    last_click_ms: Option<f64>,
    press_origin: Option<Vec2>,
    dragging: bool,
}

impl ClickTracker {
    pub fn new(config: ClickConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            last_click_ms: None,
            press_origin: None,
            dragging: false,
        })
    }

    pub fn pointer_down(&mut self, position: Vec2, now_ms: f64) -> PressKind {
        if self.config.enable_double_click {
            if let Some(last) = self.last_click_ms {
                if now_ms - last < self.config.double_click_delay_ms {
                    self.last_click_ms = None;
                    self.press_origin = None;
                    return PressKind::DoubleClick;
                }
            }
        }
        self.last_click_ms = Some(now_ms);
        if self.config.enable_drag {
            self.press_origin = Some(position);
        }
        PressKind::Click
    }

    /// Drag offset from the press point once the drag threshold was crossed.
    pub fn pointer_move(&mut self, position: Vec2) -> Option<Vec2> {
        let origin = self.press_origin?;
        let offset = position - origin;
        if !self.dragging && offset.length() >= self.config.drag_threshold {
            self.dragging = true;
        }
        self.dragging.then_some(offset)
    }

    /// Returns true if the press ended a drag.
    pub fn pointer_up(&mut self) -> bool {
        self.press_origin = None;
        std::mem::replace(&mut self.dragging, false)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Lets at most one event through per interval.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Scale and Euler rotation of the card, animated as one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl CardPose {
    pub const REST: CardPose = CardPose {
        scale: Vec3::ONE,
        rotation: Vec3::ZERO,
    };
}

impl Default for CardPose {
    fn default() -> Self {
        Self::REST
    }
}

impl Interpolate for CardPose {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            scale: Interpolate::lerp(&self.scale, &to.scale, t),
            rotation: Interpolate::lerp(&self.rotation, &to.rotation, t),
        }
    }
}

/// Grow the card and spin it one full turn about Y.
pub fn expand(from: CardPose) -> AnimationDescriptor<CardPose> {
    let to = CardPose {
        scale: Vec3::splat(EXPANDED_SCALE),
        rotation: from.rotation + Vec3::new(0.0, TAU, 0.0),
    };
    AnimationDescriptor::new(from, to)
        .duration_ms(PRESET_DURATION_MS)
        .easing(Easing::EaseOut)
}

/// Return the card to its rest pose.
pub fn collapse(from: CardPose) -> AnimationDescriptor<CardPose> {
    AnimationDescriptor::new(from, CardPose::REST)
        .duration_ms(PRESET_DURATION_MS)
        .easing(Easing::EaseInOut)
}
