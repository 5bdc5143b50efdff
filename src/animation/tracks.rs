use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::values::Interpolatable;
use crate::errors::{Result, RigError};

/// How a segment between two keyframes is filled in.
///
/// The interpolation of the *later* keyframe of a pair governs the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    CatmullRom,
    /// Holds the earlier keyframe's value until the next keyframe.
    Step,
}

/// Which part of a [`PartPose`](crate::rig::PartPose) a track writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Rotation,
    Position,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds from the start of the animation.
    pub time: f32,
    pub value: Vec3,
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl Keyframe {
    #[must_use]
    pub fn new(time: f32, value: Vec3, interpolation: Interpolation) -> Self {
        Self {
            time,
            value,
            interpolation,
        }
    }

    #[must_use]
    pub fn linear(time: f32, value: Vec3) -> Self {
        Self::new(time, value, Interpolation::Linear)
    }
}

/// Rotation keyframe value authored in degrees.
#[must_use]
pub fn degree_vec(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x.to_radians(), y.to_radians(), z.to_radians())
}

/// Position keyframe value authored Y-up; model space is Y-down.
#[must_use]
pub fn pos_vec(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, -y, z)
}

/// Scale keyframe value authored as an absolute factor. Tracks add to the
/// rest scale of 1, so the stored value is the offset from 1.
#[must_use]
pub fn scale_vec(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - 1.0, y - 1.0, z - 1.0)
}

/// Ordered keyframes for one (part, channel) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTrack {
    pub part: String,
    pub channel: Channel,
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    #[must_use]
    pub fn new(part: impl Into<String>, channel: Channel, keyframes: Vec<Keyframe>) -> Self {
        Self {
            part: part.into(),
            channel,
            keyframes,
        }
    }

    /// Checks the track is non-empty with strictly increasing times.
    pub fn validate(&self, animation: &str) -> Result<()> {
        if self.keyframes.is_empty() {
            return Err(RigError::EmptyTrack {
                animation: animation.to_string(),
                part: self.part.clone(),
            });
        }
        // Negated so NaN times are rejected too
        if let Some(index) = self
            .keyframes
            .windows(2)
            .position(|pair| !(pair[1].time > pair[0].time))
        {
            return Err(RigError::UnorderedKeyframes {
                animation: animation.to_string(),
                part: self.part.clone(),
                index: index + 1,
            });
        }
        Ok(())
    }

    /// Time of the last keyframe, or 0 for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    /// Samples the track at `time` seconds.
    ///
    /// Times outside `[first.time, last.time]` clamp to the nearest
    /// endpoint. An empty track samples as zero and a NaN time samples as
    /// the first keyframe.
    #[must_use]
    pub fn sample(&self, time: f32) -> Vec3 {
        let keys = &self.keyframes;
        let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
            return Vec3::ZERO;
        };
        // NaN fails every comparison below; hold the first key for it
        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // first.time < time < last.time, so 1 <= next <= len - 1
        let next = keys.partition_point(|k| k.time <= time);
        let (i, j) = (next - 1, next);
        let a = &keys[i];
        let b = &keys[j];
        let frac = ((time - a.time) / (b.time - a.time)).clamp(0.0, 1.0);

        match b.interpolation {
            Interpolation::Linear => Vec3::interpolate_linear(a.value, b.value, frac),
            Interpolation::Step => a.value,
            Interpolation::CatmullRom => {
                let p0 = keys[i.saturating_sub(1)].value;
                let p3 = keys[(j + 1).min(keys.len() - 1)].value;
                Vec3::interpolate_catmull_rom(p0, a.value, b.value, p3, frac)
            }
        }
    }
}
