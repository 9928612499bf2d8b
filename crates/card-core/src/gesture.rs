//! Multi-pointer gesture tracking: pan, pinch, rotate, long-press and
//! post-release momentum.
//!
//! Pointer events are handled synchronously as they arrive. Everything that
//! happens later (the long-press deadline, momentum decay) is driven by
//! [`GestureEngine::tick`], which the host calls once per frame with a
//! timestamp on the same clock as the pointer samples.

use crate::constants::*;
use crate::error::{non_negative, positive, unit_open, ConfigError};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

/// One contact point as delivered by the input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: i32,
    pub position: Vec2,
    /// Milliseconds on the input clock.
    pub timestamp: f64,
}

impl PointerSample {
    pub fn new(id: i32, x: f32, y: f32, timestamp: f64) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
            timestamp,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    pub enable_pinch: bool,
    pub enable_rotate: bool,
    pub enable_pan: bool,
    pub enable_long_press: bool,
    pub min_distance: f32,
    pub min_scale: f32,
    pub min_rotation: f32,
    pub long_press_delay_ms: f64,
    pub momentum: bool,
    pub momentum_factor: f32,
    pub momentum_decay: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enable_pinch: true,
            enable_rotate: true,
            enable_pan: true,
            enable_long_press: true,
            min_distance: DEFAULT_MIN_DISTANCE,
            min_scale: DEFAULT_MIN_SCALE,
            min_rotation: DEFAULT_MIN_ROTATION,
            long_press_delay_ms: DEFAULT_LONG_PRESS_MS,
            momentum: true,
            momentum_factor: DEFAULT_MOMENTUM_FACTOR,
            momentum_decay: DEFAULT_MOMENTUM_DECAY,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("min_distance", self.min_distance)?;
        non_negative("min_scale", self.min_scale)?;
        non_negative("min_rotation", self.min_rotation)?;
        positive("long_press_delay_ms", self.long_press_delay_ms)?;
        unit_open("momentum_factor", self.momentum_factor)?;
        unit_open("momentum_decay", self.momentum_decay)?;
        Ok(())
    }
}

/// Continuously updated view of the gesture in progress.
///
/// `pinch_scale` and `rotation_angle` are `Some` only while at least two
/// pointers are tracked and a non-degenerate two-pointer baseline exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    pub active: bool,
    pub pointers: SmallVec<[PointerSample; 4]>,
    pub origin_position: Vec2,
    pub current_position: Vec2,
    /// Since the previous sample.
    pub delta: Vec2,
    /// Since the gesture started.
    pub movement: Vec2,
    /// px/ms
    pub velocity: Vec2,
    pub direction: Vec2,
    pub distance: f32,
    pub pinch_scale: Option<f32>,
    pub rotation_angle: Option<f32>,
    pub start_timestamp: f64,
    pub last_timestamp: f64,
    pub elapsed_time: f64,
}

/// Gesture callbacks. Every method defaults to a no-op.
pub trait GestureHandler {
    fn on_start(&mut self, _state: &GestureState) {}
    fn on_move(&mut self, _state: &GestureState) {}
    fn on_end(&mut self, _state: &GestureState) {}
    fn on_pinch(&mut self, _scale: f32) {}
    fn on_rotate(&mut self, _angle: f32) {}
    fn on_pan(&mut self, _delta: Vec2) {}
    fn on_long_press(&mut self, _position: Vec2) {}
}

impl GestureHandler for () {}

#[derive(Clone, Copy, Debug)]
struct Momentum {
    velocity: Vec2,
    last_ms: f64,
}

#[derive(Clone, Copy, Debug)]
struct TwoPointerBaseline {
    distance: f32,
    angle: f32,
}

pub struct GestureEngine<H: GestureHandler> {
    config: GestureConfig,
    handler: H,
    state: GestureState,
    baseline: Option<TwoPointerBaseline>,
    long_press_deadline: Option<f64>,
    momentum: Option<Momentum>,
}

impl<H: GestureHandler> GestureEngine<H> {
    pub fn new(config: GestureConfig, handler: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            handler,
            state: GestureState::default(),
            baseline: None,
            long_press_deadline: None,
            momentum: None,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn long_press_pending(&self) -> bool {
        self.long_press_deadline.is_some()
    }

    pub fn momentum_active(&self) -> bool {
        self.momentum.is_some()
    }

    pub fn on_pointer_down(&mut self, sample: PointerSample) {
        if !self.state.active {
            self.begin(sample);
        } else {
            match self.state.pointers.iter_mut().find(|p| p.id == sample.id) {
                Some(p) => *p = sample,
                None => self.state.pointers.push(sample),
            }
            // extra contact: no longer a single stationary press
            self.long_press_deadline = None;
        }
        self.refresh_two_pointer();
    }

    pub fn on_pointer_move(&mut self, samples: &[PointerSample]) {
        if !self.state.active {
            return;
        }
        self.long_press_deadline = None;

        let mut latest = None::<f64>;
        for s in samples {
            if let Some(p) = self.state.pointers.iter_mut().find(|p| p.id == s.id) {
                *p = *s;
                latest = Some(latest.map_or(s.timestamp, |t: f64| t.max(s.timestamp)));
            }
        }
        let Some(ts) = latest else {
            return;
        };

        let primary = self.state.pointers[0].position;
        let st = &mut self.state;
        st.delta = primary - st.current_position;
        let dt = ts - st.last_timestamp;
        if dt > 0.0 {
            st.velocity = st.delta / dt as f32;
            st.direction = Vec2::new(sign(st.velocity.x), sign(st.velocity.y));
        }
        st.current_position = primary;
        st.movement = primary - st.origin_position;
        st.distance = st.movement.length();
        st.last_timestamp = ts;
        st.elapsed_time = ts - st.start_timestamp;

        self.refresh_two_pointer();
        if let (Some(scale), Some(angle)) = (self.state.pinch_scale, self.state.rotation_angle) {
            if self.config.enable_pinch && (scale - 1.0).abs() >= self.config.min_scale {
                self.handler.on_pinch(scale);
            }
            if self.config.enable_rotate && angle.abs() >= self.config.min_rotation {
                self.handler.on_rotate(angle);
            }
        }

        if self.config.enable_pan && self.state.distance > self.config.min_distance {
            self.handler.on_pan(self.state.delta);
        }
        self.handler.on_move(&self.state);
    }

    pub fn on_pointer_up(&mut self, sample: PointerSample) {
        if !self.state.active {
            return;
        }
        let Some(idx) = self.state.pointers.iter().position(|p| p.id == sample.id) else {
            return;
        };
        self.long_press_deadline = None;
        self.state.pointers.remove(idx);
        self.state.elapsed_time = sample.timestamp - self.state.start_timestamp;

        if let Some(primary) = self.state.pointers.first() {
            // the next contact takes over as primary; rebase so neither delta
            // nor movement jumps by the finger separation
            let shift = primary.position - self.state.current_position;
            self.state.origin_position += shift;
            self.state.current_position = primary.position;
            self.refresh_two_pointer();
            return;
        }

        self.state.active = false;
        self.baseline = None;
        self.state.pinch_scale = None;
        self.state.rotation_angle = None;
        self.handler.on_end(&self.state);

        if self.config.momentum && self.state.distance > self.config.min_distance {
            log::debug!(
                "[gesture] momentum from v=({:.3},{:.3}) px/ms",
                self.state.velocity.x,
                self.state.velocity.y
            );
            self.momentum = Some(Momentum {
                velocity: self.state.velocity,
                last_ms: sample.timestamp,
            });
        }
    }

    pub fn on_pointer_cancel(&mut self, sample: PointerSample) {
        self.on_pointer_up(sample);
    }

    /// Fire a due long-press and advance momentum to `now_ms`.
    ///
    /// Momentum decay is time-based: the velocity is scaled by
    /// `momentum_decay^(dt / FRAME_MS)`, i.e. exactly `momentum_decay` per
    /// 60 Hz frame.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(deadline) = self.long_press_deadline {
            if now_ms >= deadline {
                self.long_press_deadline = None;
                if self.state.active && self.state.pointers.len() == 1 {
                    self.handler.on_long_press(self.state.current_position);
                }
            }
        }

        let Some(mut m) = self.momentum else {
            return;
        };
        let dt = now_ms - m.last_ms;
        if dt <= 0.0 {
            return;
        }
        m.last_ms = now_ms;
        m.velocity *= self.config.momentum_decay.powf((dt / FRAME_MS) as f32);
        if m.velocity.length() > MOMENTUM_MIN_SPEED {
            self.momentum = Some(m);
            self.handler.on_pan(m.velocity * self.config.momentum_factor);
        } else {
            self.momentum = None;
        }
    }

    /// Drop the pending long-press and any running momentum. Call on teardown.
    pub fn cancel_pending(&mut self) {
        self.long_press_deadline = None;
        self.momentum = None;
    }

    pub fn reset(&mut self) {
        self.cancel_pending();
        self.baseline = None;
        self.state = GestureState::default();
    }

    fn begin(&mut self, sample: PointerSample) {
        // a new gesture always cancels the previous gesture's momentum
        self.momentum = None;
        self.baseline = None;
        let mut pointers = SmallVec::new();
        pointers.push(sample);
        self.state = GestureState {
            active: true,
            pointers,
            origin_position: sample.position,
            current_position: sample.position,
            start_timestamp: sample.timestamp,
            last_timestamp: sample.timestamp,
            ..GestureState::default()
        };
        if self.config.enable_long_press {
            self.long_press_deadline = Some(sample.timestamp + self.config.long_press_delay_ms);
        }
        self.handler.on_start(&self.state);
    }

    /// Establish the two-pointer baseline when first possible and recompute
    /// scale/angle; drop both when fewer than two pointers remain.
    fn refresh_two_pointer(&mut self) {
        if self.state.pointers.len() < 2 {
            self.baseline = None;
            self.state.pinch_scale = None;
            self.state.rotation_angle = None;
            return;
        }
        let (distance, angle) =
            distance_and_angle(self.state.pointers[0].position, self.state.pointers[1].position);
        let base = match self.baseline {
            Some(b) => b,
            None if distance > f32::EPSILON => {
                let b = TwoPointerBaseline { distance, angle };
                self.baseline = Some(b);
                b
            }
            None => return,
        };
        self.state.pinch_scale = Some(distance / base.distance);
        self.state.rotation_angle = Some(wrap_angle(angle - base.angle));
    }
}

fn distance_and_angle(a: Vec2, b: Vec2) -> (f32, f32) {
    let d = b - a;
    (d.length(), d.y.atan2(d.x))
}

/// Wrap into `(-π, π]` so crossing the atan2 seam does not read as a full turn.
fn wrap_angle(a: f32) -> f32 {
    let mut a = a % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
