use serde::{Deserialize, Serialize};

use crate::animation::action::{AnimationId, AnimationStates};
use crate::animation::binder::Binder;
use crate::animation::binding::BoundAnimation;
use crate::animation::procedural::{Oscillator, OscillatorSpec};
use crate::animation::tracks::Channel;
use crate::errors::{Result, RigError};
use crate::rig::{PartKey, PartTreeTemplate, Pose};

/// Per-frame inputs supplied by the entity layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Entity age in ticks, including the partial tick.
    pub age_in_ticks: f32,
    /// Locomotion phase.
    pub limb_swing: f32,
    /// Locomotion amplitude, usually in `[0, 1]`.
    pub limb_swing_amount: f32,
    /// Head yaw relative to the body, in degrees.
    pub head_yaw: f32,
    /// Head pitch, in degrees.
    pub head_pitch: f32,
}

impl FrameInput {
    #[must_use]
    pub fn at(tick: u32, partial_tick: f32) -> Self {
        Self {
            age_in_ticks: tick as f32 + partial_tick,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_head(mut self, yaw: f32, pitch: f32) -> Self {
        self.head_yaw = yaw;
        self.head_pitch = pitch;
        self
    }

    #[must_use]
    pub fn with_limb_swing(mut self, phase: f32, amount: f32) -> Self {
        self.limb_swing = phase;
        self.limb_swing_amount = amount;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadLookMode {
    /// Sets the head's X/Y rotation to its rest rotation plus pitch/yaw,
    /// discarding keyframe contributions on those axes. Z is kept.
    #[default]
    Override,
    /// Adds pitch/yaw to whatever the part already has.
    Additive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadLookSpec {
    pub part: String,
    #[serde(default)]
    pub mode: HeadLookMode,
}

/// A keyframe animation played from locomotion instead of an animation
/// state: limb swing advances its clock, limb swing amount scales it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkDriveSpec {
    pub animation: String,
    /// Ticks of animation per unit of limb swing.
    pub max_speed: f32,
    /// Multiplier on limb swing amount; the product is capped at 1.
    pub scale_factor: f32,
}

#[derive(Debug, Clone, Copy)]
struct HeadLook {
    part: PartKey,
    mode: HeadLookMode,
    /// Rest X/Y rotation, restored under `Override`.
    rest_pitch: f32,
    rest_yaw: f32,
}

#[derive(Debug, Clone, Copy)]
struct WalkDrive {
    animation: AnimationId,
    max_speed: f32,
    scale_factor: f32,
}

/// Produces one instance's pose each render frame.
///
/// Pass order:
/// 1. reset every part to its rest pose
/// 2. add every active animation state's sampled tracks
/// 3. apply head look
/// 4. add the walk drive and procedural oscillators
///
/// Contributions are summed without weights, so two active states touching
/// the same part add up.
#[derive(Debug, Clone)]
pub struct PoseEvaluator {
    head_look: Option<HeadLook>,
    walk_drive: Option<WalkDrive>,
    oscillators: Vec<Oscillator>,
    tick_rate: f32,
}

impl PoseEvaluator {
    /// An evaluator that only plays animation states.
    #[must_use]
    pub fn keyframes_only(tick_rate: f32) -> Self {
        Self {
            head_look: None,
            walk_drive: None,
            oscillators: Vec::new(),
            tick_rate,
        }
    }

    pub fn new(
        tree: &PartTreeTemplate,
        animations: &[BoundAnimation],
        head_look: Option<&HeadLookSpec>,
        walk_drive: Option<&WalkDriveSpec>,
        oscillators: &[OscillatorSpec],
        tick_rate: f32,
    ) -> Result<Self> {
        let head_look = head_look
            .map(|spec| -> Result<HeadLook> {
                let part = tree
                    .find(&spec.part)
                    .ok_or_else(|| RigError::UnknownProfilePart(spec.part.clone()))?;
                let rest = tree.part(part).map(|p| p.rest().rotation).unwrap_or_default();
                Ok(HeadLook {
                    part,
                    mode: spec.mode,
                    rest_pitch: rest.x,
                    rest_yaw: rest.y,
                })
            })
            .transpose()?;

        let walk_drive = walk_drive
            .map(|spec| {
                Binder::find(animations, &spec.animation)
                    .map(|animation| WalkDrive {
                        animation,
                        max_speed: spec.max_speed,
                        scale_factor: spec.scale_factor,
                    })
                    .ok_or_else(|| RigError::UnknownAnimation(spec.animation.clone()))
            })
            .transpose()?;

        let oscillators = oscillators
            .iter()
            .cloned()
            .map(|spec| Oscillator::bind(tree, spec))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            head_look,
            walk_drive,
            oscillators,
            tick_rate,
        })
    }

    #[inline]
    #[must_use]
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    pub fn evaluate(
        &self,
        tree: &PartTreeTemplate,
        animations: &[BoundAnimation],
        states: &AnimationStates,
        input: &FrameInput,
        pose: &mut Pose,
    ) {
        // 1. Reset
        pose.reset(tree);

        // 2. Keyframe states
        for state in states.active() {
            let Some(animation) = animations.get(state.animation().index()) else {
                continue;
            };
            let Some(elapsed) = state.elapsed_ticks(input.age_in_ticks) else {
                continue;
            };
            let time = animation
                .definition
                .local_time_from_ticks(elapsed, self.tick_rate);
            accumulate(animation, time, 1.0, pose);
        }

        // 3. Head look
        if let Some(head) = self.head_look {
            let pitch = input.head_pitch.to_radians();
            let yaw = input.head_yaw.to_radians();
            if let Some(part) = pose.get_mut(head.part) {
                match head.mode {
                    HeadLookMode::Override => {
                        part.rotation.x = head.rest_pitch + pitch;
                        part.rotation.y = head.rest_yaw + yaw;
                    }
                    HeadLookMode::Additive => {
                        part.rotation.x += pitch;
                        part.rotation.y += yaw;
                    }
                }
            }
        }

        // 4. Locomotion
        if let Some(drive) = self.walk_drive
            && let Some(animation) = animations.get(drive.animation.index())
        {
            let elapsed = input.limb_swing * drive.max_speed;
            let time = animation
                .definition
                .local_time_from_ticks(elapsed, self.tick_rate);
            let scale = (input.limb_swing_amount * drive.scale_factor).min(1.0);
            accumulate(animation, time, scale, pose);
        }

        for oscillator in &self.oscillators {
            oscillator.apply(input, pose);
        }
    }
}

/// Samples every track of `animation` at `time`, scales the result and adds
/// it to the bound parts.
pub fn accumulate(animation: &BoundAnimation, time: f32, scale: f32, pose: &mut Pose) {
    for binding in &animation.bindings {
        let track = &animation.definition.tracks[binding.track_index];
        let value = track.sample(time) * scale;

        let Some(part) = pose.get_mut(binding.part) else {
            continue;
        };
        match binding.channel {
            Channel::Rotation => part.rotation += value,
            Channel::Position => part.translation += value,
            Channel::Scale => part.scale += value,
        }
    }
}
