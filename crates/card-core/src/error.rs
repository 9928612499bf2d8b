use thiserror::Error;

/// Invalid gesture/behaviour configuration, reported at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite, non-negative value (got {value})")]
    NegativeThreshold { name: &'static str, value: f32 },
    #[error("{name} must lie strictly between 0 and 1 (got {value})")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("{name} must be a finite, positive value (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{min_name} ({min}) must not exceed {max_name} ({max})")]
    InvertedRange {
        min_name: &'static str,
        min: f32,
        max_name: &'static str,
        max: f32,
    },
}

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("animation duration must be finite and > 0 ms (got {0})")]
    InvalidDuration(f64),
    #[error("animation delay must be finite and >= 0 ms (got {0})")]
    InvalidDelay(f64),
    #[error("queue id must not be empty")]
    EmptyQueueId,
    #[error("no animation queue named `{0}`")]
    UnknownQueue(String),
    #[error("invalid colour literal `{0}`")]
    InvalidColor(String),
    #[error("callback in queue `{queue}` failed: {source}")]
    Callback {
        queue: String,
        #[source]
        source: anyhow::Error,
    },
}

pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeThreshold { name, value })
    }
}

pub(crate) fn unit_open(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
