#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod errors;
pub mod settings;
pub mod rig;
pub mod animation;
pub mod model;
pub mod entity;
pub mod assets;
pub mod species;

pub use errors::{Result, RigError};
pub use settings::RigSettings;
pub use rig::{Cuboid, Part, PartKey, PartPose, PartSink, PartSpec, PartTreeTemplate, Pose, WorldTransforms};
pub use animation::{
    AnimationDefinition, AnimationId, AnimationSelector, AnimationState, AnimationStates, Channel, FrameInput,
    HeadLookMode, Interpolation, Keyframe, KeyframeTrack, Locomotion, MotionFlags, OscillatorSpec, PoseEvaluator,
};
pub use model::{Model, RigProfile, SpeciesModel};
pub use entity::AnimatedEntity;
pub use assets::RigAsset;
pub use species::Species;
