//! Rigid transform algebra: translation + unit-quaternion rotation +
//! non-uniform componentwise scale.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A rigid transform with non-uniform scale.
///
/// Composition is right-multiplicative: `parent.mul(&child)` expresses `child`
/// in `parent`'s space. When transforming positions, scale applies before
/// rotation; scale itself combines componentwise and never shears under
/// rotation. Whether a bone inherits ancestor scale is decided at the bone,
/// not here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Rotation about Z by `deg` degrees, stored as the canonical half-angle
    /// quaternion `(0, 0, sin(θ/2), cos(θ/2))`.
    pub fn from_z_angle_deg(deg: f32) -> Self {
        Self {
            rotation: Quat::from_rotation_z(deg.to_radians()),
            ..Self::IDENTITY
        }
    }

    /// `child` composed onto `self`: scale, then rotate, then translate.
    ///
    /// The rotation product is renormalized so repeated composition cannot
    /// drift off unit length. Degenerate inputs (NaN, zero scale) propagate
    /// into the result instead of failing.
    #[must_use]
    pub fn mul(&self, child: &Transform) -> Transform {
        Transform {
            position: self.rotation * (self.scale * child.position) + self.position,
            rotation: (self.rotation * child.rotation).normalize(),
            scale: self.scale * child.scale,
        }
    }

    /// Exact algebraic inverse: `t.inverse().mul(&t)` is the identity within
    /// floating tolerance. Zero scale inverts to infinity and propagates.
    #[must_use]
    pub fn inverse(&self) -> Transform {
        let scale = self.scale.recip();
        let rotation = self.rotation.conjugate();
        let position = -(rotation * (scale * self.position));
        Transform {
            position,
            rotation,
            scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
