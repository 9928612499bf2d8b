use crate::constants::*;
use crate::error::{positive, ConfigError};
use glam::Vec3;

/// Spring parameters in the usual mass/tension/friction form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: SPRING_MASS,
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("mass", self.mass as f64)?;
        positive("tension", self.tension as f64)?;
        positive("friction", self.friction as f64)?;
        Ok(())
    }
}

/// Damped spring chasing a target, integrated with semi-implicit Euler in
/// sub-steps no longer than `SPRING_MAX_STEP_SEC`.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: Vec3,
    velocity: Vec3,
    target: Vec3,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            value: initial,
            velocity: Vec3::ZERO,
            target: initial,
        })
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: Vec3) {
        self.value = value;
        self.target = value;
        self.velocity = Vec3::ZERO;
    }

    pub fn step(&mut self, dt_sec: f32) -> Vec3 {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = Vec3::ZERO;
            return self.value;
        }
        // non-finite spans are ignored; long ones are cut to bound the sub-step count
        let mut remaining = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, SPRING_MAX_DT_SEC)
        } else {
            0.0
        };
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_STEP_SEC);
            let accel = (-self.config.tension * (self.value - self.target)
                - self.config.friction * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).length() < SPRING_REST_EPSILON
            && self.velocity.length() < SPRING_REST_EPSILON
    }

    pub fn value(&self) -> Vec3 {
        self.value
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}
