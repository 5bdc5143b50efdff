use std::sync::Arc;

use glam::{Affine3A, Vec3};

use crate::animation::{AnimationStates, FrameInput, Locomotion, MotionFlags};
use crate::model::{Model, SpeciesModel};
use crate::rig::{PartSink, Pose, WorldTransforms, submit_hierarchy, update_world_transforms};

/// Animation driver for one entity instance.
///
/// Exposes the two host phases explicitly and owns no timers or threads:
/// call [`on_simulation_tick`](Self::on_simulation_tick) at the fixed tick
/// rate and [`on_render_frame`](Self::on_render_frame) once per frame.
/// Instances share the model but nothing mutable, so separate instances can
/// be evaluated on separate threads.
#[derive(Debug, Clone)]
pub struct AnimatedEntity<M: Model = SpeciesModel> {
    model: Arc<M>,
    states: AnimationStates,
    pose: Pose,
    world: WorldTransforms,
    placement: Affine3A,
    locomotion: Locomotion,
}

impl<M: Model> AnimatedEntity<M> {
    #[must_use]
    pub fn new(model: Arc<M>) -> Self {
        let states = model.new_states();
        let pose = model.new_pose();
        Self {
            model,
            states,
            pose,
            world: WorldTransforms::new(),
            placement: Affine3A::IDENTITY,
            locomotion: Locomotion::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    pub fn on_simulation_tick(&mut self, tick: u32, flags: &MotionFlags) -> Locomotion {
        self.locomotion = self.model.select_animations(&mut self.states, flags, tick);
        self.locomotion
    }

    /// Evaluates the pose and the world transforms for this frame.
    pub fn on_render_frame(&mut self, input: &FrameInput) -> &Pose {
        self.model.evaluate_pose(&self.states, input, &mut self.pose);

        let root = self.placement * Affine3A::from_scale(Vec3::splat(self.model.render_scale()));
        update_world_transforms(self.model.tree(), &self.pose, root, &mut self.world);
        &self.pose
    }

    /// Hands the last evaluated hierarchy to a renderer.
    pub fn submit<S: PartSink + ?Sized>(&self, sink: &mut S) {
        submit_hierarchy(self.model.tree(), &self.world, sink);
    }

    /// Sets where the model is placed in the world (position and facing).
    pub fn set_placement(&mut self, placement: Affine3A) {
        self.placement = placement;
    }

    #[inline]
    #[must_use]
    pub fn locomotion(&self) -> Locomotion {
        self.locomotion
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &AnimationStates {
        &self.states
    }

    /// Mutable access for states the selector does not manage.
    #[inline]
    pub fn states_mut(&mut self) -> &mut AnimationStates {
        &mut self.states
    }

    #[inline]
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    #[inline]
    #[must_use]
    pub fn world(&self) -> &WorldTransforms {
        &self.world
    }
}
