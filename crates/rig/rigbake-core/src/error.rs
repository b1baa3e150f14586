//! Hard-failure errors for precondition violations in loader-supplied data.
//!
//! Degenerate numeric input (NaN times, zero durations, empty tracks) is not
//! an error anywhere in this crate; only structurally corrupt rig data lands
//! here, because shipping a partial bake to a runtime is worse than aborting.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RigError {
    #[error("bone {bone} has out-of-range parent index {parent}")]
    InvalidParent { bone: usize, parent: usize },

    #[error("bone hierarchy cycles through bone {bone}")]
    HierarchyCycle { bone: usize },

    #[error("animation '{animation}' track targets unknown bone index {bone}")]
    UnknownBone { animation: String, bone: usize },

    #[error("animation '{animation}' slot track targets unknown slot index {slot}")]
    UnknownSlot { animation: String, slot: usize },
}
