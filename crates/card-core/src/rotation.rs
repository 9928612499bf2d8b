//! Idle auto-rotation of the card with speed damping.

use crate::constants::*;
use crate::error::{non_negative, ConfigError};
use glam::{Vec2, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct RotationConfig {
    pub enabled: bool,
    /// Radians per nominal 60 Hz frame.
    pub speed: f32,
    pub direction: Vec3,
    /// Multiplier applied to the speed on every processed frame.
    pub damping: f32,
    pub max_speed: f32,
    pub min_speed: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: ROTATION_SPEED,
            direction: Vec3::new(1.0, 1.0, 0.0),
            damping: ROTATION_DAMPING,
            max_speed: ROTATION_MAX_SPEED,
            min_speed: ROTATION_MIN_SPEED,
        }
    }
}

impl RotationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("speed", self.speed)?;
        non_negative("min_speed", self.min_speed)?;
        non_negative("max_speed", self.max_speed)?;
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::OutOfUnitRange {
                name: "damping",
                value: self.damping,
            });
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::InvertedRange {
                min_name: "min_speed",
                min: self.min_speed,
                max_name: "max_speed",
                max: self.max_speed,
            });
        }
        Ok(())
    }
}

pub struct AutoRotation {
    config: RotationConfig,
    rotating: bool,
    speed: f32,
    direction: Vec3,
    rotation: Vec3,
    frame: u64,
    pending_ms: f64,
}

impl AutoRotation {
    pub fn new(config: RotationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rotating: config.enabled,
            speed: config.speed,
            direction: config.direction,
            rotation: Vec3::ZERO,
            frame: 0,
            pending_ms: 0.0,
            config,
        })
    }

    /// Advance by one display frame of `dt_ms`. Only every second frame does
    /// any work; the skipped frame's time is carried into the next one.
    /// Returns true when the rotation changed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.rotating {
            return false;
        }
        self.pending_ms += dt_ms;
        self.frame += 1;
        if self.frame % 2 != 0 {
            return false;
        }
        let step = self.speed * (self.pending_ms / FRAME_MS) as f32;
        self.pending_ms = 0.0;
        self.rotation += self.direction * step;

        let damped = self.speed * self.config.damping;
        if damped > self.config.min_speed {
            self.speed = damped;
        }
        true
    }

    /// Turn a pan delta (px) into a direct rotation and re-energise the spin.
    pub fn nudge(&mut self, delta: Vec2) {
        self.rotation.y += delta.x * ROTATION_NUDGE_PER_PX;
        self.rotation.x += delta.y * ROTATION_NUDGE_PER_PX;
        self.set_speed(self.config.speed);
    }

    pub fn toggle(&mut self) -> bool {
        self.rotating = !self.rotating;
        self.rotating
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(self.config.min_speed, self.config.max_speed);
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn reset(&mut self) {
        self.rotating = self.config.enabled;
        self.speed = self.config.speed;
        self.direction = self.config.direction;
        self.rotation = Vec3::ZERO;
        self.frame = 0;
        self.pending_ms = 0.0;
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}
