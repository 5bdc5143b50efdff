//! Error Types
//!
//! This module defines the error type used throughout the crate.
//!
//! # Overview
//!
//! Almost every failure is a configuration error: bad static asset data
//! detected while a part tree is baked or an animation is bound to it.
//! Those are fatal at load time and never recovered from. Per-frame
//! evaluation is pure arithmetic over validated data and cannot fail.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, RigError>`.
//!
//! ```rust,ignore
//! use marionette::errors::Result;
//!
//! fn bake() -> Result<()> {
//!     let model = Species::Seedot.build(&RigSettings::default())?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for rig construction and asset loading.
#[derive(Error, Debug)]
pub enum RigError {
    // ========================================================================
    // Part Tree Errors
    // ========================================================================
    /// Two part specifications share a name.
    #[error("Duplicate part name: {0}")]
    DuplicatePart(String),

    /// A part names a parent that does not exist in the tree.
    #[error("Part '{part}' refers to unknown parent '{parent}'")]
    UnknownParent {
        /// The part being linked
        part: String,
        /// The unresolved parent name
        parent: String,
    },

    /// No part without a parent was supplied.
    #[error("Part tree has no root")]
    MissingRoot,

    /// More than one part has no parent.
    #[error("Part tree has multiple roots: '{first}' and '{second}'")]
    MultipleRoots {
        /// The first root encountered
        first: String,
        /// The second root encountered
        second: String,
    },

    /// A part is not reachable from the root, which means its parent chain
    /// loops back on itself.
    #[error("Part '{0}' is not reachable from the root (cyclic parent chain)")]
    Cycle(String),

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// A keyframe track targets a part missing from the tree.
    #[error("Animation '{animation}' targets unknown part '{part}'")]
    UnknownTrackTarget {
        /// Animation name
        animation: String,
        /// The unresolved part name
        part: String,
    },

    /// A keyframe track has no keyframes.
    #[error("Animation '{animation}' has an empty track for part '{part}'")]
    EmptyTrack {
        /// Animation name
        animation: String,
        /// Target part name
        part: String,
    },

    /// Keyframe times are not strictly increasing.
    #[error("Animation '{animation}' track for part '{part}' is not strictly increasing at keyframe {index}")]
    UnorderedKeyframes {
        /// Animation name
        animation: String,
        /// Target part name
        part: String,
        /// Index of the first offending keyframe
        index: usize,
    },

    /// Animation length is zero, negative or not finite.
    #[error("Animation '{name}' has invalid length {length}")]
    InvalidLength {
        /// Animation name
        name: String,
        /// The rejected length
        length: f32,
    },

    // ========================================================================
    // Rig Profile Errors
    // ========================================================================
    /// A rig profile (head look, oscillator) names a part missing from the tree.
    #[error("Rig profile refers to unknown part '{0}'")]
    UnknownProfilePart(String),

    /// A rig profile names an animation the model does not define.
    #[error("Rig profile refers to unknown animation '{0}'")]
    UnknownAnimation(String),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// A host setting is out of range (non-positive tick rate, NaN threshold).
    #[error("Invalid setting '{field}': {value}")]
    InvalidSettings {
        /// Name of the rejected field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    // ========================================================================
    // Loading Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RigError {
    /// Returns `true` for errors caused by invalid static asset data.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::JsonError(_) | Self::IoError(_))
    }
}

/// Alias for `Result<T, RigError>`.
pub type Result<T> = std::result::Result<T, RigError>;
