//! Registry of independent animation queues driven by one explicit tick.
//!
//! The manager owns its own clock: the host calls [`AnimationManager::tick`]
//! once per display frame with the elapsed time, and only while
//! [`AnimationManager::is_running`] is true. The loop is started lazily when
//! the first queue begins playing and stops as soon as none is.

use crate::error::AnimationError;
use crate::lerp::Interpolate;
use crate::queue::AnimationQueue;
use crate::AnimationDescriptor;
use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Default)]
pub struct AnimationManager {
    queues: Vec<AnimationQueue>,
    index: FnvHashMap<String, usize>,
    clock_ms: f64,
    running: bool,
    errors: Vec<AnimationError>,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty, stopped queue. An existing queue with the same id is
    /// reset in place (keeping its registration order).
    pub fn create_queue(&mut self, id: &str) -> Result<(), AnimationError> {
        if id.is_empty() {
            return Err(AnimationError::EmptyQueueId);
        }
        match self.index.get(id) {
            Some(&i) => {
                log::warn!("[anim] queue `{}` already exists; resetting it", id);
                self.queues[i] = AnimationQueue::new(id);
                self.stop_loop_if_idle();
            }
            None => {
                self.index.insert(id.to_string(), self.queues.len());
                self.queues.push(AnimationQueue::new(id));
                log::debug!("[anim] created queue `{}`", id);
            }
        }
        Ok(())
    }

    pub fn enqueue<T: Interpolate>(
        &mut self,
        id: &str,
        descriptor: AnimationDescriptor<T>,
    ) -> Result<(), AnimationError> {
        self.queue_mut(id)?.push(descriptor)
    }

    pub fn start(&mut self, id: &str) -> Result<(), AnimationError> {
        let now = self.clock_ms;
        let started = self.queue_mut(id)?.play(now);
        if started && !self.running {
            self.running = true;
            log::debug!("[anim] loop started by `{}`", id);
        }
        Ok(())
    }

    /// Freeze the queue at its current value. Stopping twice is the same as
    /// stopping once.
    pub fn stop(&mut self, id: &str) -> Result<(), AnimationError> {
        let now = self.clock_ms;
        self.queue_mut(id)?.pause(now);
        self.stop_loop_if_idle();
        Ok(())
    }

    pub fn remove_queue(&mut self, id: &str) -> Result<(), AnimationError> {
        let Some(i) = self.index.remove(id) else {
            log::warn!("[anim] remove: unknown queue `{}`", id);
            return Err(AnimationError::UnknownQueue(id.to_string()));
        };
        self.queues.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        self.stop_loop_if_idle();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.queues.clear();
        self.index.clear();
        self.running = false;
    }

    /// Advance every playing queue, in registration order, by `dt`.
    ///
    /// A queue whose callback fails is stopped and marked failed; the error is
    /// kept for [`AnimationManager::take_errors`] and the remaining queues are
    /// still updated.
    pub fn tick(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        self.clock_ms += dt.as_secs_f64() * 1000.0;
        let now = self.clock_ms;

        for queue in self.queues.iter_mut().filter(|q| q.is_playing()) {
            if let Err(source) = queue.advance(now) {
                log::warn!("[anim] queue `{}` stopped: {:#}", queue.id(), source);
                queue.fail(now);
                self.errors.push(AnimationError::Callback {
                    queue: queue.id().to_string(),
                    source,
                });
            }
        }
        self.stop_loop_if_idle();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn playing_count(&self) -> usize {
        self.queues.iter().filter(|q| q.is_playing()).count()
    }

    /// Milliseconds accumulated by `tick` while the loop was running.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn queue(&self, id: &str) -> Option<&AnimationQueue> {
        self.index.get(id).map(|&i| &self.queues[i])
    }

    pub fn queue_ids(&self) -> impl Iterator<Item = &str> {
        self.queues.iter().map(|q| q.id())
    }

    /// Drain callback failures collected since the last call.
    pub fn take_errors(&mut self) -> Vec<AnimationError> {
        std::mem::take(&mut self.errors)
    }

    fn queue_mut(&mut self, id: &str) -> Result<&mut AnimationQueue, AnimationError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.queues[i]),
            None => {
                log::warn!("[anim] unknown queue `{}`", id);
                Err(AnimationError::UnknownQueue(id.to_string()))
            }
        }
    }

    fn stop_loop_if_idle(&mut self) {
        if self.running && self.playing_count() == 0 {
            self.running = false;
            log::debug!("[anim] loop stopped, no playing queues");
        }
    }
}
