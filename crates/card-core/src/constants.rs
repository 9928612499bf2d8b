// Shared interaction/animation tuning constants used by the core and the web frontend.

// Frame timing
pub const FRAME_MS: f64 = 1000.0 / 60.0; // nominal 60 Hz frame used to normalise per-frame rates

// Gesture thresholds
pub const DEFAULT_MIN_DISTANCE: f32 = 10.0; // px moved before a pan is reported
pub const DEFAULT_MIN_SCALE: f32 = 0.1; // |scale - 1| before a pinch is reported
pub const DEFAULT_MIN_ROTATION: f32 = 0.1; // radians before a rotate is reported
pub const DEFAULT_LONG_PRESS_MS: f64 = 500.0;

// Momentum
pub const DEFAULT_MOMENTUM_FACTOR: f32 = 0.95; // scales the emitted pan vector
pub const DEFAULT_MOMENTUM_DECAY: f32 = 0.95; // per nominal frame
pub const MOMENTUM_MIN_SPEED: f32 = 0.01; // px/ms, below this momentum stops

// Animation
pub const DEFAULT_DURATION_MS: f64 = 1000.0;
pub const PRESET_DURATION_MS: f64 = 300.0; // expand/collapse presets
pub const EXPANDED_SCALE: f32 = 1.2;

// Auto-rotation
pub const ROTATION_SPEED: f32 = 0.01; // radians per nominal frame
pub const ROTATION_DAMPING: f32 = 0.95;
pub const ROTATION_MAX_SPEED: f32 = 0.1;
pub const ROTATION_MIN_SPEED: f32 = 0.001;
pub const ROTATION_NUDGE_PER_PX: f32 = 0.005; // radians of kick per px of pan

// Spring defaults (react-spring style units)
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_TENSION: f32 = 280.0;
pub const SPRING_FRICTION: f32 = 60.0;
pub const SPRING_MAX_STEP_SEC: f32 = 1.0 / 120.0; // integration sub-step cap
pub const SPRING_MAX_DT_SEC: f32 = 0.25; // longest span one step() integrates
pub const SPRING_REST_EPSILON: f32 = 1e-3;

// Pointer interaction
pub const DOUBLE_CLICK_MS: f64 = 300.0;
pub const DRAG_THRESHOLD_PX: f32 = 3.0;
pub const THROTTLE_MS: f64 = 16.0;

// Performance sampling
pub const STATS_WINDOW_MS: f64 = 1000.0;
pub const MONITOR_MAX_SAMPLES: usize = 60;
