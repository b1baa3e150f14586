//! Per-property sampling policies and their output hand-off.
//!
//! Four variants cover every track kind the sampler drives: slerped
//! rotations, lerped vectors (position and scale), discrete attachment
//! indices, and draw-order offsets with an "unchanged" sentinel. Each builder
//! appends into a caller-owned stream; buffering and serialization of what it
//! receives belong to the caller.

use glam::{Quat, Vec3};

use crate::curve::AnimationCurve;
use crate::data::{AnimationKey, SlotAnimationKey};
use crate::sampling::SampleKey;

/// Attachment index emitted when a key (or the slot default) shows nothing.
pub const ATTACHMENT_NONE: i32 = -1;

impl SampleKey for AnimationKey {
    fn time(&self) -> f32 {
        self.t
    }

    fn stepped(&self) -> bool {
        self.stepped
    }

    fn curve(&self) -> Option<&AnimationCurve> {
        self.curve.as_ref()
    }
}

impl SampleKey for SlotAnimationKey {
    fn time(&self) -> f32 {
        self.t
    }
}

/// Property-specific half of the sampler: key-to-sample conversion, pairwise
/// interpolation, and the append hand-off.
pub trait PropertyBuilder {
    type Key: SampleKey;
    type Sample: Copy;

    /// The output sample a key stands for on its own.
    fn compose(&self, key: &Self::Key) -> Self::Sample;

    /// Combine two keys at eased fraction `u`. Non-interpolating builders
    /// hold the left key.
    fn interpolate(&self, a: &Self::Key, b: &Self::Key, u: f32) -> Self::Sample;

    /// Whether the value domain interpolates at all; index and offset
    /// builders return false, which forces stepped output regardless of the
    /// flag passed to the sampler.
    fn interpolating(&self) -> bool {
        true
    }

    /// Hand one sample to the output stream, in sample order.
    fn append(&mut self, sample: Self::Sample);
}

/// Slerps bone rotation keys (Z angles in degrees) into a unit-quaternion
/// stream.
pub struct RotationBuilder<'a> {
    out: &'a mut Vec<Quat>,
}

impl<'a> RotationBuilder<'a> {
    pub fn new(out: &'a mut Vec<Quat>) -> Self {
        Self { out }
    }
}

impl PropertyBuilder for RotationBuilder<'_> {
    type Key = AnimationKey;
    type Sample = Quat;

    fn compose(&self, key: &AnimationKey) -> Quat {
        Quat::from_rotation_z(key.value.angle_deg().to_radians())
    }

    fn interpolate(&self, a: &AnimationKey, b: &AnimationKey, u: f32) -> Quat {
        // glam's slerp negates the far end when the arc is long, so the
        // result stays on the shortest arc.
        self.compose(a).slerp(self.compose(b), u)
    }

    fn append(&mut self, sample: Quat) {
        // Consecutive stream samples must not flip hemisphere across an
        // interval boundary; the runtime slerps neighboring samples.
        let aligned = match self.out.last() {
            Some(prev) if prev.dot(sample) < 0.0 => -sample,
            _ => sample,
        };
        self.out.push(aligned);
    }
}

/// Lerps vector keys (position or scale) into a component stream.
pub struct VectorBuilder<'a> {
    out: &'a mut Vec<Vec3>,
}

impl<'a> VectorBuilder<'a> {
    pub fn new(out: &'a mut Vec<Vec3>) -> Self {
        Self { out }
    }
}

impl PropertyBuilder for VectorBuilder<'_> {
    type Key = AnimationKey;
    type Sample = Vec3;

    fn compose(&self, key: &AnimationKey) -> Vec3 {
        key.value.vector()
    }

    fn interpolate(&self, a: &AnimationKey, b: &AnimationKey, u: f32) -> Vec3 {
        self.compose(a).lerp(self.compose(b), u)
    }

    fn append(&mut self, sample: Vec3) {
        self.out.push(sample);
    }
}

/// Emits the active attachment index per sample. An index has no continuous
/// interpolation, so the flag passed to the sampler cannot turn it on.
pub struct AttachmentBuilder<'a> {
    out: &'a mut Vec<i32>,
}

impl<'a> AttachmentBuilder<'a> {
    pub fn new(out: &'a mut Vec<i32>) -> Self {
        Self { out }
    }
}

impl PropertyBuilder for AttachmentBuilder<'_> {
    type Key = SlotAnimationKey;
    type Sample = i32;

    fn compose(&self, key: &SlotAnimationKey) -> i32 {
        key.attachment.map_or(ATTACHMENT_NONE, |a| a as i32)
    }

    fn interpolate(&self, a: &SlotAnimationKey, _b: &SlotAnimationKey, _u: f32) -> i32 {
        self.compose(a)
    }

    fn interpolating(&self) -> bool {
        false
    }

    fn append(&mut self, sample: i32) {
        self.out.push(sample);
    }
}

/// Emits a draw-order offset per sample.
///
/// Keys without an offset, and the span before the first key, emit the
/// caller's `unchanged` sentinel; a key's real offset (including an explicit
/// 0 that ends a shifted run) is emitted for every sample the key is active.
pub struct DrawOrderBuilder<'a> {
    out: &'a mut Vec<i32>,
    unchanged: i32,
}

impl<'a> DrawOrderBuilder<'a> {
    /// `unchanged` is the consuming runtime's well-known "no change" value;
    /// this builder carries no sentinel of its own.
    pub fn new(out: &'a mut Vec<i32>, unchanged: i32) -> Self {
        Self { out, unchanged }
    }
}

impl PropertyBuilder for DrawOrderBuilder<'_> {
    type Key = SlotAnimationKey;
    type Sample = i32;

    fn compose(&self, key: &SlotAnimationKey) -> i32 {
        key.order_offset.unwrap_or(self.unchanged)
    }

    fn interpolate(&self, a: &SlotAnimationKey, _b: &SlotAnimationKey, _u: f32) -> i32 {
        self.compose(a)
    }

    fn interpolating(&self) -> bool {
        false
    }

    fn append(&mut self, sample: i32) {
        self.out.push(sample);
    }
}
