//! Procedural oscillators
//!
//! Sinusoidal motion generators that layer on top of keyframe animation:
//! walk-cycle leg swings driven by locomotion, and idle breathing or
//! swaying driven by the entity's age.
//!
//! For a phase `p` and amount `a` an oscillator contributes
//!
//! ```text
//! sign * (wave(p * speed + offset) * degree * a + weight * a)
//! ```
//!
//! where `sign` is `-1` when inverted and `wave` is `sin` or `cos`. Inverting
//! flips the bias along with the wave.

use serde::{Deserialize, Serialize};

use crate::animation::mixer::FrameInput;
use crate::errors::{Result, RigError};
use crate::rig::{PartKey, PartTreeTemplate, Pose};

/// Which transform component an oscillator drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Rotation about X (pitching a limb forward and back).
    Walk,
    /// Rotation about Y.
    Swing,
    /// Rotation about Z.
    Flap,
    /// Translation along Y.
    Bob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    #[default]
    Cosine,
}

/// Source of an oscillator's phase and amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    /// Phase = limb swing, amount = limb swing amount.
    #[default]
    LimbSwing,
    /// Phase = age in ticks, amount = 1.
    Age,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSpec {
    pub part: String,
    pub motion: Motion,
    #[serde(default)]
    pub waveform: Waveform,
    #[serde(default)]
    pub driver: Driver,
    /// Frequency multiplier applied to the phase.
    pub speed: f32,
    /// Amplitude in radians (or model units for [`Motion::Bob`]).
    pub degree: f32,
    #[serde(default)]
    pub invert: bool,
    /// Phase offset in radians.
    #[serde(default)]
    pub offset: f32,
    /// Constant bias scaled by the amount (negated with the wave when inverted).
    #[serde(default)]
    pub weight: f32,
}

impl OscillatorSpec {
    #[must_use]
    pub fn new(part: impl Into<String>, motion: Motion, speed: f32, degree: f32) -> Self {
        Self {
            part: part.into(),
            motion,
            waveform: Waveform::Cosine,
            driver: Driver::LimbSwing,
            speed,
            degree,
            invert: false,
            offset: 0.0,
            weight: 0.0,
        }
    }

    #[must_use]
    pub fn walk(part: &str, speed: f32, degree: f32, invert: bool, offset: f32, weight: f32) -> Self {
        Self::new(part, Motion::Walk, speed, degree).shaped(invert, offset, weight)
    }

    #[must_use]
    pub fn swing(part: &str, speed: f32, degree: f32, invert: bool, offset: f32, weight: f32) -> Self {
        Self::new(part, Motion::Swing, speed, degree).shaped(invert, offset, weight)
    }

    #[must_use]
    pub fn flap(part: &str, speed: f32, degree: f32, invert: bool, offset: f32, weight: f32) -> Self {
        Self::new(part, Motion::Flap, speed, degree).shaped(invert, offset, weight)
    }

    #[must_use]
    pub fn bob(part: &str, speed: f32, degree: f32) -> Self {
        Self::new(part, Motion::Bob, speed, degree).with_waveform(Waveform::Sine)
    }

    #[must_use]
    pub fn driven_by_age(mut self) -> Self {
        self.driver = Driver::Age;
        self
    }

    #[must_use]
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    fn shaped(mut self, invert: bool, offset: f32, weight: f32) -> Self {
        self.invert = invert;
        self.offset = offset;
        self.weight = weight;
        self
    }

    /// Contribution for a given phase and amount.
    #[must_use]
    pub fn value(&self, phase: f32, amount: f32) -> f32 {
        let angle = phase * self.speed + self.offset;
        let wave = match self.waveform {
            Waveform::Sine => angle.sin(),
            Waveform::Cosine => angle.cos(),
        };
        let sign = if self.invert { -1.0 } else { 1.0 };
        sign * (wave * self.degree * amount + self.weight * amount)
    }
}

/// An oscillator bound to a part of a baked tree.
#[derive(Debug, Clone)]
pub struct Oscillator {
    part: PartKey,
    spec: OscillatorSpec,
}

impl Oscillator {
    pub fn bind(tree: &PartTreeTemplate, spec: OscillatorSpec) -> Result<Self> {
        let part = tree
            .find(&spec.part)
            .ok_or_else(|| RigError::UnknownProfilePart(spec.part.clone()))?;
        Ok(Self { part, spec })
    }

    #[inline]
    #[must_use]
    pub fn spec(&self) -> &OscillatorSpec {
        &self.spec
    }

    /// Adds this oscillator's contribution to the bound part.
    pub fn apply(&self, input: &FrameInput, pose: &mut Pose) {
        let (phase, amount) = match self.spec.driver {
            Driver::LimbSwing => (input.limb_swing, input.limb_swing_amount),
            Driver::Age => (input.age_in_ticks, 1.0),
        };
        let value = self.spec.value(phase, amount);

        let Some(part) = pose.get_mut(self.part) else {
            return;
        };
        match self.spec.motion {
            Motion::Walk => part.rotation.x += value,
            Motion::Swing => part.rotation.y += value,
            Motion::Flap => part.rotation.z += value,
            Motion::Bob => part.translation.y += value,
        }
    }
}
