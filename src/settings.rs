//! Rig Settings
//!
//! Host-environment constants that the evaluator needs but that are not part
//! of any single asset.
//!
//! ```rust,ignore
//! use marionette::RigSettings;
//!
//! // Reference environment: 20 simulation ticks per second
//! let settings = RigSettings::default();
//!
//! // Overrides from a config file; missing fields keep their defaults
//! let settings = RigSettings::from_json_str(r#"{ "tick_rate": 30.0 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RigError};

/// Simulation ticks per second in the reference environment.
pub const DEFAULT_TICK_RATE: f32 = 20.0;

/// Horizontal speed squared above which an entity counts as moving.
pub const DEFAULT_MOTION_EPSILON: f32 = 1.0e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    /// Fixed simulation tick rate, used to convert ticks to seconds.
    pub tick_rate: f32,
    /// Threshold on horizontal speed squared for the walk state.
    pub motion_epsilon: f32,
}

impl Default for RigSettings {
    #[inline]
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            motion_epsilon: DEFAULT_MOTION_EPSILON,
        }
    }
}

impl RigSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the tick rate is finite and positive and the motion
    /// threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(RigError::InvalidSettings {
                field: "tick_rate",
                value: self.tick_rate,
            });
        }
        if !(self.motion_epsilon.is_finite() && self.motion_epsilon >= 0.0) {
            return Err(RigError::InvalidSettings {
                field: "motion_epsilon",
                value: self.motion_epsilon,
            });
        }
        Ok(())
    }

    /// Converts a (possibly fractional) tick count to seconds.
    #[inline]
    #[must_use]
    pub fn ticks_to_seconds(&self, ticks: f32) -> f32 {
        ticks / self.tick_rate
    }
}
