use serde::{Deserialize, Serialize};

use crate::animation::tracks::{Channel, Keyframe, KeyframeTrack};
use crate::errors::{Result, RigError};

/// A named, fixed-length bundle of keyframe tracks.
///
/// Static data: built once per species and shared read-only by every
/// instance. Several tracks may target the same part on different channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDefinition {
    pub name: String,
    /// Length in seconds.
    pub length: f32,
    #[serde(default)]
    pub looping: bool,
    pub tracks: Vec<KeyframeTrack>,
}

impl AnimationDefinition {
    #[must_use]
    pub fn builder(name: impl Into<String>, length: f32) -> AnimationDefinitionBuilder {
        AnimationDefinitionBuilder {
            name: name.into(),
            length,
            looping: false,
            tracks: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(RigError::InvalidLength {
                name: self.name.clone(),
                length: self.length,
            });
        }
        for track in &self.tracks {
            track.validate(&self.name)?;
            if self.looping && track.keyframes.len() > 1 && track.end_time() < self.length {
                log::warn!(
                    "Looping animation '{}' holds part '{}' still after {}s of {}s",
                    self.name,
                    track.part,
                    track.end_time(),
                    self.length
                );
            }
        }
        Ok(())
    }

    /// Maps elapsed seconds to the time at which tracks are sampled.
    ///
    /// Looping animations wrap modulo their length; others clamp at it.
    #[inline]
    #[must_use]
    pub fn local_time(&self, elapsed_seconds: f32) -> f32 {
        if self.looping {
            elapsed_seconds.rem_euclid(self.length)
        } else {
            elapsed_seconds.min(self.length)
        }
    }

    /// Same as [`local_time`](Self::local_time) for an elapsed tick count.
    #[inline]
    #[must_use]
    pub fn local_time_from_ticks(&self, elapsed_ticks: f32, tick_rate: f32) -> f32 {
        self.local_time(elapsed_ticks / tick_rate)
    }

    /// A non-looping animation is finished once it has played its length.
    #[inline]
    #[must_use]
    pub fn is_finished(&self, elapsed_seconds: f32) -> bool {
        !self.looping && elapsed_seconds >= self.length
    }
}

#[derive(Debug, Clone)]
pub struct AnimationDefinitionBuilder {
    name: String,
    length: f32,
    looping: bool,
    tracks: Vec<KeyframeTrack>,
}

impl AnimationDefinitionBuilder {
    #[must_use]
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    #[must_use]
    pub fn track(mut self, part: &str, channel: Channel, keyframes: Vec<Keyframe>) -> Self {
        self.tracks.push(KeyframeTrack::new(part, channel, keyframes));
        self
    }

    #[must_use]
    pub fn build(self) -> AnimationDefinition {
        AnimationDefinition {
            name: self.name,
            length: self.length,
            looping: self.looping,
            tracks: self.tracks,
        }
    }
}
