//! Animation data model: keys, tracks, and named animations.
//!
//! These structures are produced by the (external) document loader and read by
//! the sampler; nothing here owns sampling policy.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::curve::AnimationCurve;

/// Keyed payload of a bone property track. Rotation tracks key the bone's
/// Z angle in degrees (the source document's convention); position and scale
/// tracks key component vectors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum KeyValue {
    Angle(f32),
    Vector(Vec3),
}

impl KeyValue {
    /// Angle in degrees; a vector payload degrades to its x component.
    #[inline]
    pub fn angle_deg(&self) -> f32 {
        match *self {
            KeyValue::Angle(a) => a,
            KeyValue::Vector(v) => v.x,
        }
    }

    /// Component vector; an angle payload degrades to a uniform vector.
    #[inline]
    pub fn vector(&self) -> Vec3 {
        match *self {
            KeyValue::Vector(v) => v,
            KeyValue::Angle(a) => Vec3::splat(a),
        }
    }
}

/// One key of a bone property track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationKey {
    pub t: f32,
    pub value: KeyValue,
    /// Hold this key's value until the next key instead of interpolating.
    #[serde(default)]
    pub stepped: bool,
    /// Easing between this key and the next; `None` interpolates linearly.
    #[serde(default)]
    pub curve: Option<AnimationCurve>,
}

/// Bone property addressed by a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoneProperty {
    Position,
    Rotation,
    Scale,
}

/// Ordered keys for one property of one bone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationTrack {
    pub bone: usize,
    pub property: BoneProperty,
    pub keys: Vec<AnimationKey>,
}

/// Slot purpose addressed by a slot track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotProperty {
    Attachment,
    DrawOrder,
}

/// One key of a slot track.
///
/// `attachment: None` keys the slot to show nothing. `order_offset: None`
/// means "no draw-order change at this key": the loader collapses a repeated
/// authored offset so only the first key of a run carries `Some`, and an
/// explicit `Some(0)` returns the slot to its base position after a shifted
/// run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotAnimationKey {
    pub t: f32,
    #[serde(default)]
    pub attachment: Option<u32>,
    #[serde(default)]
    pub order_offset: Option<i32>,
}

/// Ordered keys for one purpose (attachment switching or draw order) of one
/// slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotAnimationTrack {
    pub slot: usize,
    pub property: SlotProperty,
    pub keys: Vec<SlotAnimationKey>,
}

/// One authored event occurrence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventKey {
    pub t: f32,
    pub int_payload: i32,
    pub float_payload: f32,
    pub string_payload: String,
}

/// Keyed occurrences of one named event. Events are not resampled; the bake
/// passes them through with their authored times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventTrack {
    pub name: String,
    pub keys: Vec<EventKey>,
}

/// A named animation: bone tracks, slot tracks, and event tracks over one
/// time span. Owned by the scene and keyed there by `name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub duration: f32,
    #[serde(default)]
    pub tracks: Vec<AnimationTrack>,
    #[serde(default)]
    pub slot_tracks: Vec<SlotAnimationTrack>,
    #[serde(default)]
    pub event_tracks: Vec<EventTrack>,
}
