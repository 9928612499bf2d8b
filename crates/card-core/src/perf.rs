//! Lightweight frame-rate and timing instrumentation.

use crate::constants::{MONITOR_MAX_SAMPLES, STATS_WINDOW_MS};
use fnv::FnvHashMap;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameMetrics {
    pub fps: u32,
    pub frame_time_ms: f64,
    pub updates: u32,
}

/// Counts frames and reports metrics once per window.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window_ms: f64,
    window_start: Option<f64>,
    frames: u32,
    updates: u32,
    latest: FrameMetrics,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(STATS_WINDOW_MS)
    }
}

impl FrameStats {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            window_start: None,
            frames: 0,
            updates: 0,
            latest: FrameMetrics::default(),
        }
    }

    /// Count one work item (e.g. a rotation update) in the current window.
    pub fn note_update(&mut self) {
        self.updates += 1;
    }

    /// Record a frame at `now_ms`; returns fresh metrics when a window closes.
    pub fn frame(&mut self, now_ms: f64) -> Option<FrameMetrics> {
        let Some(start) = self.window_start else {
            // first frame only opens the window
            self.window_start = Some(now_ms);
            return None;
        };
        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed < self.window_ms || elapsed <= 0.0 {
            return None;
        }
        self.latest = FrameMetrics {
            fps: ((self.frames as f64 * 1000.0) / elapsed).round() as u32,
            frame_time_ms: elapsed / self.frames as f64,
            updates: self.updates,
        };
        self.frames = 0;
        self.updates = 0;
        self.window_start = Some(now_ms);
        Some(self.latest)
    }

    pub fn latest(&self) -> FrameMetrics {
        self.latest
    }
}

/// Named begin/end measurements keeping a bounded history per label.
#[derive(Clone, Debug)]
pub struct PerformanceMonitor {
    max_samples: usize,
    open: FnvHashMap<String, f64>,
    samples: FnvHashMap<String, VecDeque<f64>>,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(MONITOR_MAX_SAMPLES)
    }
}

impl PerformanceMonitor {
    pub fn new(max_samples: usize) -> Self {
        Self {
            max_samples: max_samples.max(1),
            open: FnvHashMap::default(),
            samples: FnvHashMap::default(),
        }
    }

    pub fn begin(&mut self, label: &str, now_ms: f64) {
        self.open.insert(label.to_string(), now_ms);
    }

    /// Close a measurement; returns its duration, or `None` without a matching `begin`.
    pub fn end(&mut self, label: &str, now_ms: f64) -> Option<f64> {
        let started = self.open.remove(label)?;
        let duration = (now_ms - started).max(0.0);
        let history = self.samples.entry(label.to_string()).or_default();
        history.push_back(duration);
        while history.len() > self.max_samples {
            history.pop_front();
        }
        Some(duration)
    }

    /// Mean of the retained samples, 0 when there are none.
    pub fn average(&self, label: &str) -> f64 {
        match self.samples.get(label) {
            Some(h) if !h.is_empty() => h.iter().sum::<f64>() / h.len() as f64,
            _ => 0.0,
        }
    }

    pub fn sample_count(&self, label: &str) -> usize {
        self.samples.get(label).map_or(0, VecDeque::len)
    }
}
