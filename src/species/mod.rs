//! Species catalogue
//!
//! Each species resolves, at construction time, to its own part list,
//! animation set and [`RigProfile`]. The data flows through the same
//! [`RigAsset`] path as definitions loaded from JSON.

pub mod bonsly;
pub mod seedot;

use serde::{Deserialize, Serialize};

use crate::assets::RigAsset;
use crate::errors::Result;
use crate::model::{RigProfile, SpeciesModel};
use crate::settings::RigSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Seedot,
    Bonsly,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Seedot, Species::Bonsly];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Seedot => "seedot",
            Self::Bonsly => "bonsly",
        }
    }

    #[must_use]
    pub fn profile(self) -> RigProfile {
        match self {
            Self::Seedot => seedot::profile(),
            Self::Bonsly => bonsly::profile(),
        }
    }

    #[must_use]
    pub fn asset(self) -> RigAsset {
        let (parts, animations) = match self {
            Self::Seedot => (seedot::parts(), seedot::animations()),
            Self::Bonsly => (bonsly::parts(), bonsly::animations()),
        };
        RigAsset {
            name: self.name().to_string(),
            parts,
            animations,
            profile: self.profile(),
        }
    }

    pub fn build(self, settings: &RigSettings) -> Result<SpeciesModel> {
        self.asset().build(settings)
    }
}
