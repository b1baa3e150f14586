//! Offline rig bake core (engine-agnostic).
//!
//! Converts a loader-supplied skeletal scene (bones, slots, sparse keyframe
//! tracks) into what a runtime consumes directly: a baked bone hierarchy with
//! local/world/inverse-world transforms, and dense fixed-rate sample streams
//! for every animated property. Document parsing, mesh construction, and wire
//! serialization live outside this crate; the hand-off points are the builder
//! `append` streams and the serializable [`baking::BakedAnimation`].

pub mod baking;
pub mod builders;
pub mod curve;
pub mod data;
pub mod error;
pub mod sampling;
pub mod scene;
pub mod skeleton;
pub mod transform;

// Re-exports for consumers (pipeline steps and sinks)
pub use baking::{
    bake_animation, bake_scene, export_baked_json, BakeConfig, BakedAnimation, BakedSamples,
    BakedTarget, BakedTrack, SLOT_SIGNAL_UNCHANGED,
};
pub use builders::{
    AttachmentBuilder, DrawOrderBuilder, PropertyBuilder, RotationBuilder, VectorBuilder,
    ATTACHMENT_NONE,
};
pub use curve::AnimationCurve;
pub use data::{
    Animation, AnimationKey, AnimationTrack, BoneProperty, EventKey, EventTrack, KeyValue,
    SlotAnimationKey, SlotAnimationTrack, SlotProperty,
};
pub use error::RigError;
pub use sampling::{sample_count, sample_track, SampleKey};
pub use scene::{BaseSlot, Scene};
pub use skeleton::{bake_hierarchy, Bone};
pub use transform::Transform;
