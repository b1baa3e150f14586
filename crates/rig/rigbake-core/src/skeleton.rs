//! Bone hierarchy and the world-transform bake pass.

use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::transform::Transform;

/// One bone of the rig. `world` and `inv_world` are filled in by
/// [`bake_hierarchy`]; bones are read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub index: usize,
    pub name: String,
    /// Parent bone by index; `None` for roots.
    pub parent: Option<usize>,
    pub local: Transform,
    #[serde(default)]
    pub world: Transform,
    #[serde(default)]
    pub inv_world: Transform,
    /// When false, ancestor scale dilutes neither this bone's world scale nor
    /// its descendants' (they restart from this bone's own scale).
    pub inherit_scale: bool,
}

impl Bone {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        parent: Option<usize>,
        local: Transform,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            parent,
            local,
            world: Transform::IDENTITY,
            inv_world: Transform::IDENTITY,
            inherit_scale: true,
        }
    }

    pub fn with_inherit_scale(mut self, inherit: bool) -> Self {
        self.inherit_scale = inherit;
        self
    }
}

/// Compose world transforms from the roots down and fill in their inverses.
///
/// `world[b] = world[parent(b)] ⊗ local[b]`, except that a bone with
/// `inherit_scale = false` composes rotation and translation normally but
/// keeps its own local scale.
///
/// A parent index outside the slice or a parent cycle is a loader bug and
/// aborts the bake before any world transform is written. The pass is pure
/// otherwise: rerunning it from the same local transforms yields identical
/// world transforms.
pub fn bake_hierarchy(bones: &mut [Bone]) -> Result<(), RigError> {
    let count = bones.len();
    for bone in bones.iter() {
        if let Some(parent) = bone.parent {
            if parent >= count {
                return Err(RigError::InvalidParent {
                    bone: bone.index,
                    parent,
                });
            }
        }
    }
    // A parent chain that has not reached a root after `count` hops must
    // revisit itself.
    for bone in bones.iter() {
        let mut cursor = bone.parent;
        let mut hops = 0usize;
        while let Some(parent) = cursor {
            hops += 1;
            if hops > count {
                return Err(RigError::HierarchyCycle { bone: bone.index });
            }
            cursor = bones[parent].parent;
        }
    }
    // Resolve each bone by unwinding its parent chain; `done` keeps the pass
    // linear when bones arrive parent-ordered, which loaders typically
    // guarantee but this pass does not require.
    let mut done = vec![false; count];
    let mut chain = Vec::new();
    for index in 0..count {
        if done[index] {
            continue;
        }
        chain.clear();
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            if done[i] {
                break;
            }
            chain.push(i);
            cursor = bones[i].parent;
        }
        for &i in chain.iter().rev() {
            let world = match bones[i].parent {
                Some(p) => {
                    let mut world = bones[p].world.mul(&bones[i].local);
                    if !bones[i].inherit_scale {
                        world.scale = bones[i].local.scale;
                    }
                    world
                }
                None => bones[i].local,
            };
            bones[i].world = world;
            bones[i].inv_world = world.inverse();
            done[i] = true;
        }
    }
    Ok(())
}
