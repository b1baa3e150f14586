//! Scene aggregate produced by the (external) document loader.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::Animation;
use crate::error::RigError;
use crate::skeleton::{bake_hierarchy, Bone};

/// A slot in the draw order, bound to a bone, with its attachment inventory.
///
/// The slot's default attachment is added to `attachments` first by the
/// loader, so it carries index 0 when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseSlot {
    pub index: usize,
    pub name: String,
    pub bone: usize,
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Index into `attachments` shown when no animation overrides it.
    #[serde(default)]
    pub active_attachment: Option<u32>,
}

/// Bones, slots, and animations for one rig, as handed over by the loader.
///
/// The loader is expected to deliver well-formed structures (valid indices,
/// non-cyclic parent links); [`Scene::bake`] and [`Scene::validate`] turn
/// violations into hard errors instead of baking partial output.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    pub bones: Vec<Bone>,
    pub slots: Vec<BaseSlot>,
    pub animations: HashMap<String, Animation>,
}

impl Scene {
    pub fn bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    pub fn slot(&self, index: usize) -> Option<&BaseSlot> {
        self.slots.get(index)
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// Compose world and inverse-world transforms for every bone.
    pub fn bake(&mut self) -> Result<(), RigError> {
        bake_hierarchy(&mut self.bones)
    }

    /// Check every track target against the bone and slot tables.
    pub fn validate(&self) -> Result<(), RigError> {
        for anim in self.animations.values() {
            for track in &anim.tracks {
                if track.bone >= self.bones.len() {
                    return Err(RigError::UnknownBone {
                        animation: anim.name.clone(),
                        bone: track.bone,
                    });
                }
            }
            for track in &anim.slot_tracks {
                if track.slot >= self.slots.len() {
                    return Err(RigError::UnknownSlot {
                        animation: anim.name.clone(),
                        slot: track.slot,
                    });
                }
            }
        }
        Ok(())
    }
}
