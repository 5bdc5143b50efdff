use glam::{Affine3A, EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rig::PartKey;

/// Local transform of a part: translation, Euler rotation and scale.
///
/// Rotation is three angles in radians, composed Z first, then Y, then X
/// (`Rz * Ry * Rx`). Animation contributions are summed per axis, so the
/// angles are never normalised or converted to quaternions until a matrix
/// is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartPose {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl PartPose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn offset(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn offset_and_rotation(x: f32, y: f32, z: f32, rx: f32, ry: f32, rz: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            rotation: Vec3::new(rx, ry, rz),
            scale: Vec3::ONE,
        }
    }

    #[inline]
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::ZYX, self.rotation.z, self.rotation.y, self.rotation.x)
    }

    /// Local matrix: translate, then rotate, then scale.
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.translation)
    }
}

impl Default for PartPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One textured box of a part's geometry. The core never reads it; it is
/// carried through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub tex_offset: [i32; 2],
    pub origin: Vec3,
    pub size: Vec3,
    #[serde(default)]
    pub inflate: f32,
    #[serde(default)]
    pub mirror: bool,
}

impl Cuboid {
    #[must_use]
    pub fn new(u: i32, v: i32, origin: [f32; 3], size: [f32; 3]) -> Self {
        Self {
            tex_offset: [u, v],
            origin: Vec3::from(origin),
            size: Vec3::from(size),
            inflate: 0.0,
            mirror: false,
        }
    }

    #[must_use]
    pub fn inflated(mut self, amount: f32) -> Self {
        self.inflate = amount;
        self
    }
}

/// Static description of one part, as supplied by an asset definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub rest: PartPose,
    #[serde(default)]
    pub cuboids: Vec<Cuboid>,
}

impl PartSpec {
    #[must_use]
    pub fn root(name: impl Into<String>, rest: PartPose) -> Self {
        Self {
            name: name.into(),
            parent: None,
            rest,
            cuboids: Vec::new(),
        }
    }

    #[must_use]
    pub fn child(name: impl Into<String>, parent: impl Into<String>, rest: PartPose) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
            rest,
            cuboids: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cuboid(mut self, cuboid: Cuboid) -> Self {
        self.cuboids.push(cuboid);
        self
    }
}

/// A baked part inside a [`PartTreeTemplate`](crate::rig::PartTreeTemplate).
///
/// Topology and rest pose are fixed once the tree is built. The animated
/// transform lives in the per-instance [`Pose`](crate::rig::Pose).
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) name: String,
    pub(crate) parent: Option<PartKey>,
    pub(crate) children: SmallVec<[PartKey; 4]>,
    pub(crate) rest: PartPose,
    pub(crate) cuboids: Vec<Cuboid>,
}

impl Part {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent part, if any (None for the root).
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<PartKey> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[PartKey] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn rest(&self) -> &PartPose {
        &self.rest
    }

    #[inline]
    #[must_use]
    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }
}
