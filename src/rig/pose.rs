use slotmap::SecondaryMap;

use crate::rig::PartKey;
use crate::rig::part::PartPose;
use crate::rig::template::PartTreeTemplate;

/// Per-instance animated transforms, one [`PartPose`] per part.
///
/// Reset to the rest pose at the start of every evaluation pass, then
/// accumulated by keyframe and procedural contributions. Never shared
/// between entity instances and never persisted.
#[derive(Debug, Clone, Default)]
pub struct Pose {
    transforms: SecondaryMap<PartKey, PartPose>,
}

impl Pose {
    #[must_use]
    pub fn new(template: &PartTreeTemplate) -> Self {
        let mut pose = Self {
            transforms: SecondaryMap::with_capacity(template.len()),
        };
        pose.reset(template);
        pose
    }

    /// Overwrites every part's transform with its rest pose.
    pub fn reset(&mut self, template: &PartTreeTemplate) {
        for (key, part) in template.iter() {
            self.transforms.insert(key, part.rest);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: PartKey) -> Option<&PartPose> {
        self.transforms.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: PartKey) -> Option<&mut PartPose> {
        self.transforms.get_mut(key)
    }

    /// Convenience lookup by part name.
    #[must_use]
    pub fn by_name(&self, template: &PartTreeTemplate, name: &str) -> Option<&PartPose> {
        template.find(name).and_then(|key| self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartKey, &PartPose)> {
        self.transforms.iter()
    }
}
