//! Platform-independent interaction core for the profile card: gesture
//! recognition, eased animation queues, and the small time-driven behaviours
//! (auto-rotation, springs, click tracking, frame statistics) the web
//! frontend drives from its frame loop.

pub mod animation;
pub mod constants;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod interaction;
pub mod lerp;
pub mod manager;
pub mod perf;
pub mod queue;
pub mod rotation;
pub mod spring;

pub use animation::{AnimationDescriptor, AnimationInstance, Step};
pub use easing::Easing;
pub use error::{AnimationError, ConfigError};
pub use gesture::{GestureConfig, GestureEngine, GestureHandler, GestureState, PointerSample};
pub use interaction::{CardPose, ClickConfig, ClickTracker, PressKind, Throttle};
pub use lerp::{Interpolate, Rgb};
pub use manager::AnimationManager;
pub use perf::{FrameMetrics, FrameStats, PerformanceMonitor};
pub use queue::AnimationQueue;
pub use rotation::{AutoRotation, RotationConfig};
pub use spring::{Spring, SpringConfig};
