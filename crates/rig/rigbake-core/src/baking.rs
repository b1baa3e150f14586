//! Per-animation bake driver: one sampler pass per track, collected into an
//! owned, serializable result the serialization sink can consume.

use glam::{Quat, Vec3};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::builders::{
    AttachmentBuilder, DrawOrderBuilder, RotationBuilder, VectorBuilder, ATTACHMENT_NONE,
};
use crate::data::{Animation, BoneProperty, EventTrack, SlotProperty};
use crate::error::RigError;
use crate::sampling::{sample_count, sample_track};
use crate::scene::Scene;

/// Draw-order wire value the consuming runtime reads as "no change at this
/// sample". [`BakeConfig`] defaults to it but callers targeting a different
/// runtime supply their own.
pub const SLOT_SIGNAL_UNCHANGED: i32 = 0x10CCED;

/// Fixed-rate bake parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BakeConfig {
    /// Target sample rate in Hz.
    pub sample_rate: f32,
    /// Interpolate between keys; stepped keys and discrete tracks hold the
    /// left key regardless.
    pub interpolate: bool,
    /// Sentinel emitted into draw-order streams for "unchanged" samples.
    pub slot_signal_unchanged: i32,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            sample_rate: 30.0,
            interpolate: true,
            slot_signal_unchanged: SLOT_SIGNAL_UNCHANGED,
        }
    }
}

impl BakeConfig {
    /// Sample rate with non-finite or non-positive configs clamped to the
    /// default rate.
    fn sanitized_rate(&self) -> f32 {
        if self.sample_rate.is_finite() && self.sample_rate > 0.0 {
            self.sample_rate
        } else {
            warn!(
                "degenerate sample rate {}, falling back to 30 Hz",
                self.sample_rate
            );
            30.0
        }
    }
}

/// Dense per-property streams produced by the bake, one entry per sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BakedSamples {
    Rotations(Vec<Quat>),
    Positions(Vec<Vec3>),
    Scales(Vec<Vec3>),
    Attachments(Vec<i32>),
    OrderOffsets(Vec<i32>),
}

impl BakedSamples {
    pub fn len(&self) -> usize {
        match self {
            BakedSamples::Rotations(s) => s.len(),
            BakedSamples::Positions(s) | BakedSamples::Scales(s) => s.len(),
            BakedSamples::Attachments(s) | BakedSamples::OrderOffsets(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a baked stream animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BakedTarget {
    Bone { bone: usize, property: BoneProperty },
    Slot { slot: usize, property: SlotProperty },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedTrack {
    pub target: BakedTarget,
    pub samples: BakedSamples,
}

/// One animation resampled at a fixed rate, ready for the serialization sink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedAnimation {
    pub name: String,
    pub sample_rate: f32,
    pub duration: f32,
    /// Samples per stream: `ceil(duration * sample_rate) + 2`.
    pub sample_count: usize,
    pub tracks: Vec<BakedTrack>,
    /// Event keys pass through with their authored times.
    pub event_tracks: Vec<EventTrack>,
}

/// Resample every track of `animation` against `scene` at the configured
/// rate.
///
/// Bone tracks default to the bone's setup pose, attachment tracks to the
/// slot's active attachment, draw-order tracks to the "unchanged" sentinel.
/// A track addressing an unknown bone or slot aborts the bake.
pub fn bake_animation(
    scene: &Scene,
    animation: &Animation,
    cfg: &BakeConfig,
) -> Result<BakedAnimation, RigError> {
    let rate = cfg.sanitized_rate();
    let duration = if animation.duration.is_finite() && animation.duration > 0.0 {
        animation.duration
    } else {
        if animation.duration != 0.0 {
            warn!(
                "animation '{}' has degenerate duration {}, baking boundary samples only",
                animation.name, animation.duration
            );
        }
        0.0
    };
    debug!(
        "baking '{}': {} bone tracks, {} slot tracks, {} event tracks at {} Hz",
        animation.name,
        animation.tracks.len(),
        animation.slot_tracks.len(),
        animation.event_tracks.len(),
        rate
    );

    let mut tracks = Vec::with_capacity(animation.tracks.len() + animation.slot_tracks.len());
    for track in &animation.tracks {
        let bone = scene.bone(track.bone).ok_or_else(|| RigError::UnknownBone {
            animation: animation.name.clone(),
            bone: track.bone,
        })?;
        let samples = match track.property {
            BoneProperty::Rotation => {
                let mut out = Vec::new();
                let mut builder = RotationBuilder::new(&mut out);
                sample_track(
                    &track.keys,
                    &mut builder,
                    bone.local.rotation,
                    0.0,
                    duration,
                    rate,
                    cfg.interpolate,
                );
                BakedSamples::Rotations(out)
            }
            BoneProperty::Position => {
                let mut out = Vec::new();
                let mut builder = VectorBuilder::new(&mut out);
                sample_track(
                    &track.keys,
                    &mut builder,
                    bone.local.position,
                    0.0,
                    duration,
                    rate,
                    cfg.interpolate,
                );
                BakedSamples::Positions(out)
            }
            BoneProperty::Scale => {
                let mut out = Vec::new();
                let mut builder = VectorBuilder::new(&mut out);
                sample_track(
                    &track.keys,
                    &mut builder,
                    bone.local.scale,
                    0.0,
                    duration,
                    rate,
                    cfg.interpolate,
                );
                BakedSamples::Scales(out)
            }
        };
        tracks.push(BakedTrack {
            target: BakedTarget::Bone {
                bone: track.bone,
                property: track.property,
            },
            samples,
        });
    }
    for track in &animation.slot_tracks {
        let slot = scene.slot(track.slot).ok_or_else(|| RigError::UnknownSlot {
            animation: animation.name.clone(),
            slot: track.slot,
        })?;
        let samples = match track.property {
            SlotProperty::Attachment => {
                let default = slot.active_attachment.map_or(ATTACHMENT_NONE, |a| a as i32);
                let mut out = Vec::new();
                let mut builder = AttachmentBuilder::new(&mut out);
                sample_track(&track.keys, &mut builder, default, 0.0, duration, rate, false);
                BakedSamples::Attachments(out)
            }
            SlotProperty::DrawOrder => {
                let mut out = Vec::new();
                let mut builder = DrawOrderBuilder::new(&mut out, cfg.slot_signal_unchanged);
                sample_track(
                    &track.keys,
                    &mut builder,
                    cfg.slot_signal_unchanged,
                    0.0,
                    duration,
                    rate,
                    false,
                );
                BakedSamples::OrderOffsets(out)
            }
        };
        tracks.push(BakedTrack {
            target: BakedTarget::Slot {
                slot: track.slot,
                property: track.property,
            },
            samples,
        });
    }

    Ok(BakedAnimation {
        name: animation.name.clone(),
        sample_rate: rate,
        duration,
        sample_count: sample_count(duration, rate),
        tracks,
        event_tracks: animation.event_tracks.clone(),
    })
}

/// Bake every animation in the scene, in name order for determinism.
///
/// Validates all track targets up front so a corrupt animation aborts the
/// whole bake instead of yielding a partial set.
pub fn bake_scene(scene: &Scene, cfg: &BakeConfig) -> Result<Vec<BakedAnimation>, RigError> {
    scene.validate()?;
    let mut names: Vec<&String> = scene.animations.keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| bake_animation(scene, &scene.animations[name], cfg))
        .collect()
}

/// Baked data as `serde_json::Value` (stable shape for debugging and sinks
/// that speak JSON).
pub fn export_baked_json(baked: &BakedAnimation) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
