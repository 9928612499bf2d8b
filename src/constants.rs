/// Front-end tuning constants.
///
/// Element ids, clamp limits and audio levels for the card page. Behaviour
/// defaults (gesture thresholds, rotation, springs) live in `card_core::constants`.
// DOM ids
pub const STAGE_ELEMENT_ID: &str = "card-stage";
pub const CARD_ELEMENT_ID: &str = "profile-card";
pub const STATS_ELEMENT_ID: &str = "stats-overlay";
pub const DRAGGING_CLASS: &str = "dragging";

// Animation queues owned by the scene
pub const POSE_QUEUE: &str = "pose";
pub const ACCENT_QUEUE: &str = "accent";

// Pinch zoom clamp (multiplier on the rest scale)
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.5;
pub const HOVER_LIFT: f32 = 1.05; // extra scale while the pointer is over the card

// Card styling
pub const PERSPECTIVE_PX: f32 = 800.0;
pub const ACCENT_REST: &str = "#4f7cff";
pub const ACCENT_EXPANDED: &str = "#ff6fa8";
pub const ACCENT_PROPERTY: &str = "--card-accent";

// Frame loop
pub const MAX_FRAME_DT_MS: f64 = 100.0; // clamp after a hidden tab resumes

// Audio feedback
pub const MASTER_GAIN: f32 = 0.2;
pub const TAP_HZ: f32 = 660.0;
pub const EXPAND_HZ: f32 = 880.0;
pub const COLLAPSE_HZ: f32 = 330.0;
pub const BLIP_SEC: f64 = 0.12;
pub const BLIP_ATTACK_SEC: f64 = 0.01;
pub const BLIP_MIN_INTERVAL_MS: f64 = 60.0; // rapid taps share one blip
