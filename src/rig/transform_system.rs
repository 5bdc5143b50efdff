//! Transform System
//!
//! Composes per-part local transforms into world matrices and hands the
//! result to a renderer. Decoupled from the evaluator: it only borrows the
//! template, the pose and the output map.
//!
//! World matrix of a part = parent world matrix × local matrix, where the
//! local matrix is built from the part's current (rest plus animated)
//! [`PartPose`](crate::rig::PartPose).

use glam::Affine3A;
use slotmap::SecondaryMap;

use crate::rig::PartKey;
use crate::rig::part::Part;
use crate::rig::pose::Pose;
use crate::rig::template::PartTreeTemplate;

/// World matrices of one instance, recomputed every frame.
#[derive(Debug, Clone, Default)]
pub struct WorldTransforms {
    matrices: SecondaryMap<PartKey, Affine3A>,
}

impl WorldTransforms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: PartKey) -> Option<&Affine3A> {
        self.matrices.get(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

/// Updates the world matrix of every part.
///
/// Uses an explicit stack instead of recursion. `root_matrix` places the
/// whole model (entity position, facing, render scale).
pub fn update_world_transforms(
    template: &PartTreeTemplate,
    pose: &Pose,
    root_matrix: Affine3A,
    out: &mut WorldTransforms,
) {
    // Work stack: (part, parent world matrix)
    let mut stack: Vec<(PartKey, Affine3A)> = Vec::with_capacity(template.len());
    stack.push((template.root(), root_matrix));

    while let Some((key, parent_world)) = stack.pop() {
        let Some(part) = template.part(key) else {
            continue;
        };
        let local = pose.get(key).unwrap_or(&part.rest).local_matrix();
        let world = parent_world * local;
        out.matrices.insert(key, world);

        for &child in part.children.iter().rev() {
            stack.push((child, world));
        }
    }
}

/// Renderer-facing interface: receives each part with its world matrix.
pub trait PartSink {
    fn submit_part(&mut self, part: &Part, world: &Affine3A);
}

/// Walks the tree depth-first (parents first) and submits every part.
pub fn submit_hierarchy<S: PartSink + ?Sized>(
    template: &PartTreeTemplate,
    world: &WorldTransforms,
    sink: &mut S,
) {
    for (key, part) in template.iter() {
        if let Some(matrix) = world.get(key) {
            sink.submit_part(part, matrix);
        }
    }
}
