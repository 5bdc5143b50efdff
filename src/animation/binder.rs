use std::sync::Arc;

use crate::animation::action::AnimationId;
use crate::animation::binding::{BoundAnimation, TrackBinding};
use crate::animation::clip::AnimationDefinition;
use crate::errors::{Result, RigError};
use crate::rig::PartTreeTemplate;

pub struct Binder;

impl Binder {
    /// Validates a definition and resolves every track to a part of `tree`.
    ///
    /// A track naming a missing part is a configuration error here, so the
    /// per-frame pass never has to look parts up by name.
    pub fn bind(tree: &PartTreeTemplate, definition: Arc<AnimationDefinition>) -> Result<BoundAnimation> {
        definition.validate()?;

        let bindings = definition
            .tracks
            .iter()
            .enumerate()
            .map(|(track_index, track)| {
                tree.find(&track.part)
                    .map(|part| TrackBinding {
                        track_index,
                        part,
                        channel: track.channel,
                    })
                    .ok_or_else(|| RigError::UnknownTrackTarget {
                        animation: definition.name.clone(),
                        part: track.part.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BoundAnimation {
            definition,
            bindings,
        })
    }

    /// Finds a bound animation by definition name.
    #[must_use]
    pub fn find(animations: &[BoundAnimation], name: &str) -> Option<AnimationId> {
        animations
            .iter()
            .position(|animation| animation.name() == name)
            .map(AnimationId)
    }
}
