pub mod values;
pub mod tracks;
pub mod clip;
pub mod action;
pub mod binding;
pub mod binder;
pub mod mixer;
pub mod procedural;
pub mod selector;

pub use clip::{AnimationDefinition, AnimationDefinitionBuilder};
pub use action::{AnimationId, AnimationState, AnimationStates};
pub use mixer::{FrameInput, HeadLookMode, HeadLookSpec, PoseEvaluator, WalkDriveSpec, accumulate};
pub use binder::Binder;
pub use binding::{BoundAnimation, TrackBinding};
pub use tracks::{Channel, Interpolation, Keyframe, KeyframeTrack, degree_vec, pos_vec, scale_vec};
pub use procedural::{Driver, Motion, Oscillator, OscillatorSpec, Waveform};
pub use selector::{AnimationSelector, Locomotion, MotionFlags};
