use std::sync::Arc;

use crate::animation::clip::AnimationDefinition;
use crate::animation::tracks::Channel;
use crate::rig::PartKey;

/// Binding relationship: maps track `track_index` of a definition to the
/// `channel` of `part` in a baked tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackBinding {
    pub track_index: usize,
    pub part: PartKey,
    pub channel: Channel,
}

/// An animation definition resolved against one part tree.
#[derive(Debug, Clone)]
pub struct BoundAnimation {
    pub(crate) definition: Arc<AnimationDefinition>,
    pub(crate) bindings: Vec<TrackBinding>,
}

impl BoundAnimation {
    #[inline]
    #[must_use]
    pub fn definition(&self) -> &Arc<AnimationDefinition> {
        &self.definition
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &[TrackBinding] {
        &self.bindings
    }
}
