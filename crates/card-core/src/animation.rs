//! Single timed interpolation between two values.
//!
//! An [`AnimationDescriptor`] is the immutable recipe (endpoints, duration,
//! easing, callbacks). Once enqueued it becomes an [`AnimationInstance`], which
//! lazily captures its start time on the first tick that touches it.

use crate::constants::DEFAULT_DURATION_MS;
use crate::easing::Easing;
use crate::error::AnimationError;
use crate::lerp::Interpolate;

pub type Callback = Box<dyn FnMut() -> anyhow::Result<()>>;
pub type UpdateCallback<T> = Box<dyn FnMut(&T) -> anyhow::Result<()>>;

pub struct AnimationDescriptor<T: Interpolate> {
    pub from: T,
    pub to: T,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    on_start: Option<Callback>,
    on_update: Option<UpdateCallback<T>>,
    on_complete: Option<Callback>,
}

impl<T: Interpolate> AnimationDescriptor<T> {
    /// 1000 ms, ease-in-out, no delay, no callbacks.
    pub fn new(from: T, to: T) -> Self {
        Self {
            from,
            to,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0.0,
            easing: Easing::default(),
            on_start: None,
            on_update: None,
            on_complete: None,
        }
    }

    pub fn duration_ms(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay_ms(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn on_start(mut self, f: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&T) -> anyhow::Result<()> + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(AnimationError::InvalidDuration(self.duration_ms));
        }
        if !(self.delay_ms.is_finite() && self.delay_ms >= 0.0) {
            return Err(AnimationError::InvalidDelay(self.delay_ms));
        }
        Ok(())
    }

    /// Interpolated value for linear progress `p`, clamped to `[0, 1]` before easing.
    pub fn value_at(&self, p: f32) -> T {
        let eased = self.easing.apply(p.clamp(0.0, 1.0));
        Interpolate::lerp(&self.from, &self.to, eased)
    }
}

/// Result of advancing one instance by a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Running,
    /// Finished; `at` is the exact completion time on the manager clock.
    Finished { at: f64 },
}

pub struct AnimationInstance<T: Interpolate> {
    descriptor: AnimationDescriptor<T>,
    start_timestamp: Option<f64>,
    complete: bool,
}

impl<T: Interpolate> AnimationInstance<T> {
    pub fn new(descriptor: AnimationDescriptor<T>) -> Result<Self, AnimationError> {
        descriptor.validate()?;
        Ok(Self {
            descriptor,
            start_timestamp: None,
            complete: false,
        })
    }

    pub fn descriptor(&self) -> &AnimationDescriptor<T> {
        &self.descriptor
    }

    /// Linear progress at `now`. Zero before the start (or during the delay),
    /// never above one.
    pub fn progress_at(&self, now: f64) -> f32 {
        let Some(start) = self.start_timestamp else {
            return 0.0;
        };
        let elapsed = now - start - self.descriptor.delay_ms;
        let p = elapsed / self.descriptor.duration_ms;
        if p.is_nan() {
            return 0.0;
        }
        p.clamp(0.0, 1.0) as f32
    }
}

/// Type-erased view so one queue can chain instances of different value types.
pub(crate) trait Animate {
    /// Advance to `now`. `carried_start` seeds the start time when this
    /// instance follows one that finished earlier in the same tick.
    fn step(&mut self, now: f64, carried_start: Option<f64>) -> anyhow::Result<Step>;
    /// Move the start time forward, used when resuming a stopped queue.
    fn shift(&mut self, by_ms: f64);
    fn start_timestamp(&self) -> Option<f64>;
}

impl<T: Interpolate> Animate for AnimationInstance<T> {
    fn step(&mut self, now: f64, carried_start: Option<f64>) -> anyhow::Result<Step> {
        if self.complete {
            return Ok(Step::Finished {
                at: self.start_timestamp.unwrap_or(now)
                    + self.descriptor.delay_ms
                    + self.descriptor.duration_ms,
            });
        }
        let start = match self.start_timestamp {
            Some(s) => s,
            None => {
                let s = carried_start.unwrap_or(now);
                self.start_timestamp = Some(s);
                if let Some(cb) = self.descriptor.on_start.as_mut() {
                    cb()?;
                }
                s
            }
        };

        let progress = self.progress_at(now);
        let value = self.descriptor.value_at(progress);
        if let Some(cb) = self.descriptor.on_update.as_mut() {
            cb(&value)?;
        }

        if progress >= 1.0 {
            self.complete = true;
            if let Some(cb) = self.descriptor.on_complete.as_mut() {
                cb()?;
            }
            return Ok(Step::Finished {
                at: start + self.descriptor.delay_ms + self.descriptor.duration_ms,
            });
        }
        Ok(Step::Running)
    }

    fn shift(&mut self, by_ms: f64) {
        if let Some(s) = self.start_timestamp.as_mut() {
            *s += by_ms;
        }
    }

    fn start_timestamp(&self) -> Option<f64> {
        self.start_timestamp
    }
}
