use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationDefinition;
use crate::errors::Result;
use crate::model::{RigProfile, SpeciesModel};
use crate::rig::PartSpec;
use crate::settings::RigSettings;

/// Already-parsed static definition of one species: parts, animations and
/// the profile wiring them together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigAsset {
    pub name: String,
    pub parts: Vec<PartSpec>,
    #[serde(default)]
    pub animations: Vec<AnimationDefinition>,
    #[serde(default)]
    pub profile: RigProfile,
}

impl RigAsset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Bakes the tree, binds the animations and resolves the profile.
    pub fn build(&self, settings: &RigSettings) -> Result<SpeciesModel> {
        SpeciesModel::new(
            &self.name,
            &self.parts,
            self.animations.clone(),
            &self.profile,
            settings,
        )
    }
}
