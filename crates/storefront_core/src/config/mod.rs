//! Viewer configuration.
//!
//! # Responsibility
//! - Hold tunable animation constants and the glance recency window.
//! - Validate host-supplied values before the viewer starts.
//!
//! # Invariants
//! - `in_distance < out_distance` (snap-then-settle feel).
//! - Defaults match the shipped device behavior.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_DURATION_MS: u32 = 120;
pub const DEFAULT_OUT_DISTANCE: i16 = 20;
pub const DEFAULT_IN_DISTANCE: i16 = 8;
/// Ages `0..=6` days count as "this week".
pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 6;

/// Animation constants shared by every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of each phase in milliseconds.
    pub duration_ms: u32,
    /// Offset magnitude reached at the end of the outbound phase.
    pub out_distance: i16,
    /// Offset magnitude the inbound phase starts from.
    pub in_distance: i16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            out_distance: DEFAULT_OUT_DISTANCE,
            in_distance: DEFAULT_IN_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub animation: AnimationConfig,
    pub recent_window_days: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDuration,
    NonPositiveDistance { field: &'static str, value: i16 },
    InboundNotShorter { in_distance: i16, out_distance: i16 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDuration => write!(f, "animation duration_ms must be > 0"),
            Self::NonPositiveDistance { field, value } => {
                write!(f, "animation {field} must be > 0, got {value}")
            }
            Self::InboundNotShorter {
                in_distance,
                out_distance,
            } => write!(
                f,
                "animation in_distance ({in_distance}) must be < out_distance ({out_distance})"
            ),
        }
    }
}

impl Error for ConfigError {}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        for (field, value) in [
            ("out_distance", self.out_distance),
            ("in_distance", self.in_distance),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveDistance { field, value });
            }
        }
        if self.in_distance >= self.out_distance {
            return Err(ConfigError::InboundNotShorter {
                in_distance: self.in_distance,
                out_distance: self.out_distance,
            });
        }
        Ok(())
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation.validate()
    }
}
