use crate::animation::{Animate, AnimationDescriptor, AnimationInstance, Step};
use crate::error::AnimationError;
use crate::lerp::Interpolate;
use std::collections::VecDeque;

/// Ordered chain of animations played one after another.
///
/// `current_index` counts finished instances and only moves forward; finished
/// instances are dropped as the queue advances past them.
pub struct AnimationQueue {
    id: String,
    pending: VecDeque<Box<dyn Animate>>,
    current_index: usize,
    is_playing: bool,
    failed: bool,
    stopped_at: Option<f64>,
}

impl AnimationQueue {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pending: VecDeque::new(),
            current_index: 0,
            is_playing: false,
            failed: false,
            stopped_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Total number of instances ever enqueued, finished ones included.
    pub fn len(&self) -> usize {
        self.current_index + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Set when a callback failed; the queue was stopped at that instance.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Start time of the instance currently at the head, once it was touched.
    pub fn current_start(&self) -> Option<f64> {
        self.pending.front().and_then(|a| a.start_timestamp())
    }

    pub fn push<T: Interpolate>(
        &mut self,
        descriptor: AnimationDescriptor<T>,
    ) -> Result<(), AnimationError> {
        let instance = AnimationInstance::new(descriptor)?;
        self.pending.push_back(Box::new(instance));
        Ok(())
    }

    /// Returns true if the queue transitioned to playing.
    pub(crate) fn play(&mut self, now: f64) -> bool {
        if self.is_playing {
            return false;
        }
        if self.pending.is_empty() {
            log::debug!("[anim] queue `{}` has nothing left to play", self.id);
            return false;
        }
        if let Some(stopped_at) = self.stopped_at.take() {
            let paused_for = (now - stopped_at).max(0.0);
            if let Some(head) = self.pending.front_mut() {
                head.shift(paused_for);
            }
        }
        self.failed = false;
        self.is_playing = true;
        true
    }

    pub(crate) fn pause(&mut self, now: f64) {
        if self.is_playing {
            self.is_playing = false;
            self.stopped_at = Some(now);
        }
    }

    pub(crate) fn fail(&mut self, now: f64) {
        self.pause(now);
        self.failed = true;
    }

    /// Advance the head instance to `now`, chaining into the next instance
    /// with the leftover time when the head finishes.
    pub(crate) fn advance(&mut self, now: f64) -> anyhow::Result<()> {
        let mut carried = None;
        while let Some(head) = self.pending.front_mut() {
            match head.step(now, carried)? {
                Step::Running => return Ok(()),
                Step::Finished { at } => {
                    self.pending.pop_front();
                    self.current_index += 1;
                    carried = Some(at);
                }
            }
        }
        self.is_playing = false;
        self.stopped_at = None;
        Ok(())
    }
}
