//! Model capability
//!
//! A [`Model`] is everything one species needs at runtime: its baked part
//! tree, its bound animations, the locomotion state machine and the pose
//! evaluator. Species differ only in data ([`RigProfile`] plus part and
//! animation definitions), never in code.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::animation::{
    AnimationDefinition, AnimationId, AnimationSelector, AnimationStates, Binder, BoundAnimation,
    FrameInput, HeadLookSpec, Locomotion, MotionFlags, OscillatorSpec, PoseEvaluator, WalkDriveSpec,
};
use crate::errors::{Result, RigError};
use crate::rig::{PartSpec, PartTreeTemplate, Pose};
use crate::settings::RigSettings;

/// Per-species wiring of animations to behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigProfile {
    pub head: Option<HeadLookSpec>,
    /// Animation played while standing still.
    pub idle: Option<String>,
    /// Animation played while moving.
    pub walk: Option<String>,
    /// Animation played while ordered to sit.
    pub sit: Option<String>,
    pub walk_drive: Option<WalkDriveSpec>,
    pub oscillators: Vec<OscillatorSpec>,
    /// Uniform scale applied to the whole model by the renderer.
    pub render_scale: f32,
}

impl Default for RigProfile {
    fn default() -> Self {
        Self {
            head: None,
            idle: None,
            walk: None,
            sit: None,
            walk_drive: None,
            oscillators: Vec::new(),
            render_scale: 1.0,
        }
    }
}

pub trait Model {
    fn tree(&self) -> &PartTreeTemplate;

    fn animations(&self) -> &[BoundAnimation];

    /// Simulation-tick phase: updates which locomotion animation runs.
    fn select_animations(&self, states: &mut AnimationStates, flags: &MotionFlags, tick: u32) -> Locomotion;

    /// Render-frame phase: writes the full pose for one instance.
    fn evaluate_pose(&self, states: &AnimationStates, input: &FrameInput, pose: &mut Pose);

    fn render_scale(&self) -> f32 {
        1.0
    }

    fn new_states(&self) -> AnimationStates {
        AnimationStates::new(self.animations().len())
    }

    fn new_pose(&self) -> Pose {
        Pose::new(self.tree())
    }
}

#[derive(Debug, Clone)]
pub struct SpeciesModel {
    tree: Arc<PartTreeTemplate>,
    animations: Vec<BoundAnimation>,
    selector: AnimationSelector,
    evaluator: PoseEvaluator,
    settings: RigSettings,
    render_scale: f32,
}

impl SpeciesModel {
    pub fn new(
        name: &str,
        parts: &[PartSpec],
        definitions: Vec<AnimationDefinition>,
        profile: &RigProfile,
        settings: &RigSettings,
    ) -> Result<Self> {
        settings.validate()?;
        let tree = Arc::new(PartTreeTemplate::build(name, parts)?);

        let animations = definitions
            .into_iter()
            .map(|definition| Binder::bind(&tree, Arc::new(definition)))
            .collect::<Result<Vec<_>>>()?;

        let slot = |name: Option<&str>| -> Result<Option<AnimationId>> {
            name.map(|name| {
                Binder::find(&animations, name).ok_or_else(|| RigError::UnknownAnimation(name.to_string()))
            })
            .transpose()
        };
        let selector = AnimationSelector::new(
            slot(profile.idle.as_deref())?,
            slot(profile.walk.as_deref())?,
            slot(profile.sit.as_deref())?,
        );

        let evaluator = PoseEvaluator::new(
            &tree,
            &animations,
            profile.head.as_ref(),
            profile.walk_drive.as_ref(),
            &profile.oscillators,
            settings.tick_rate,
        )?;

        log::debug!(
            "Assembled model '{}': {} parts, {} animations, {} oscillators",
            name,
            tree.len(),
            animations.len(),
            evaluator.oscillators().len()
        );

        Ok(Self {
            tree,
            animations,
            selector,
            evaluator,
            settings: *settings,
            render_scale: profile.render_scale,
        })
    }

    /// The shared tree, for renderers that keep their own reference.
    #[inline]
    #[must_use]
    pub fn shared_tree(&self) -> &Arc<PartTreeTemplate> {
        &self.tree
    }

    #[inline]
    #[must_use]
    pub fn selector(&self) -> &AnimationSelector {
        &self.selector
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    #[must_use]
    pub fn animation(&self, name: &str) -> Option<AnimationId> {
        Binder::find(&self.animations, name)
    }
}

impl Model for SpeciesModel {
    fn tree(&self) -> &PartTreeTemplate {
        &self.tree
    }

    fn animations(&self) -> &[BoundAnimation] {
        &self.animations
    }

    fn select_animations(&self, states: &mut AnimationStates, flags: &MotionFlags, tick: u32) -> Locomotion {
        self.selector
            .select(states, flags, tick, self.settings.motion_epsilon)
    }

    fn evaluate_pose(&self, states: &AnimationStates, input: &FrameInput, pose: &mut Pose) {
        self.evaluator
            .evaluate(&self.tree, &self.animations, states, input, pose);
    }

    fn render_scale(&self) -> f32 {
        self.render_scale
    }
}
