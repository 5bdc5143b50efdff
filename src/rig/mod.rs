//! Part hierarchy module
//!
//! Rigid-part rigs for entity models:
//! - Part: a named node with a rest pose and opaque cuboid geometry
//! - PartTreeTemplate: the immutable, shared topology of one species
//! - Pose: per-instance mutable transforms, reset every frame
//! - transform_system: parent-to-child matrix composition and renderer hand-off

pub mod part;
pub mod pose;
pub mod template;
pub mod transform_system;

pub use part::{Cuboid, Part, PartPose, PartSpec};
pub use pose::Pose;
pub use template::PartTreeTemplate;
pub use transform_system::{PartSink, WorldTransforms, submit_hierarchy, update_world_transforms};

use slotmap::new_key_type;

new_key_type! {
    pub struct PartKey;
}
