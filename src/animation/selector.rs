use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::action::{AnimationId, AnimationStates};

/// Per-tick motion flags supplied by the entity layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionFlags {
    pub ordered_to_sit: bool,
    pub horizontal_speed_sqr: f32,
}

impl MotionFlags {
    /// Derives the horizontal speed from a velocity, ignoring Y.
    #[must_use]
    pub fn from_velocity(ordered_to_sit: bool, velocity: Vec3) -> Self {
        Self {
            ordered_to_sit,
            horizontal_speed_sqr: velocity.x * velocity.x + velocity.z * velocity.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locomotion {
    #[default]
    Idle,
    Walk,
    Sit,
}

impl Locomotion {
    /// Sitting wins over moving; moving means horizontal speed squared
    /// strictly above `epsilon`.
    #[must_use]
    pub fn classify(flags: &MotionFlags, epsilon: f32) -> Self {
        if flags.ordered_to_sit {
            Self::Sit
        } else if flags.horizontal_speed_sqr > epsilon {
            Self::Walk
        } else {
            Self::Idle
        }
    }
}

/// Per-entity state machine choosing which locomotion animation runs.
///
/// Exactly one of the configured idle/walk/sit states is active after each
/// [`select`](Self::select). States outside these three slots are left to
/// the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationSelector {
    idle: Option<AnimationId>,
    walk: Option<AnimationId>,
    sit: Option<AnimationId>,
}

impl AnimationSelector {
    #[must_use]
    pub fn new(idle: Option<AnimationId>, walk: Option<AnimationId>, sit: Option<AnimationId>) -> Self {
        Self { idle, walk, sit }
    }

    #[must_use]
    pub fn slot(&self, locomotion: Locomotion) -> Option<AnimationId> {
        match locomotion {
            Locomotion::Idle => self.idle,
            Locomotion::Walk => self.walk,
            Locomotion::Sit => self.sit,
        }
    }

    /// Starts the chosen state (if stopped) and stops the other two.
    pub fn select(
        &self,
        states: &mut AnimationStates,
        flags: &MotionFlags,
        tick: u32,
        epsilon: f32,
    ) -> Locomotion {
        let chosen = Locomotion::classify(flags, epsilon);

        for locomotion in [Locomotion::Idle, Locomotion::Walk, Locomotion::Sit] {
            let Some(state) = self.slot(locomotion).and_then(|id| states.get_mut(id)) else {
                continue;
            };
            if locomotion == chosen {
                if state.start_if_stopped(tick) {
                    log::trace!("Started {locomotion:?} animation at tick {tick}");
                }
            } else if state.stop() {
                log::trace!("Stopped {locomotion:?} animation at tick {tick}");
            }
        }

        chosen
    }
}
