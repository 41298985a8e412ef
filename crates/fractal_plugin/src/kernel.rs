//! Per-part transform update.
//!
//! Pure functions: given the already-committed parent state, compute one
//! part's new orientation, position, accumulated spin, and packed instance
//! matrix. The scheduler applies [`update_part`] across a whole level; the
//! root bypasses parent composition and follows the external transform.

use glam::Quat;

use crate::constants::OFFSET_FACTOR;
use crate::types::{FractalPart, InstanceMatrix, RootTransform};

/// Advance one part by `spin_delta`, composing against its parent.
///
/// Rotation composition order is parent orientation, then the fixed child
/// orientation, then the accumulated spin about the local up axis - the
/// order is not commutative. The offset from the parent is taken in the
/// parent's rotated frame at 1.5x the child's scale.
#[inline]
pub fn update_part(
  parent: &FractalPart,
  mut part: FractalPart,
  spin_delta: f32,
  scale: f32,
) -> (FractalPart, InstanceMatrix) {
  part.spin_angle += spin_delta;
  part.world_rotation =
    parent.world_rotation * (part.local_rotation * Quat::from_rotation_y(part.spin_angle));
  part.world_position =
    parent.world_position + parent.world_rotation * (OFFSET_FACTOR * scale * part.direction);

  let matrix = InstanceMatrix::from_rotation_scale_translation(
    part.world_rotation,
    scale,
    part.world_position,
  );
  (part, matrix)
}

/// Advance the root part from the externally driven transform.
#[inline]
pub fn update_root(
  mut part: FractalPart,
  spin_delta: f32,
  root: &RootTransform,
) -> (FractalPart, InstanceMatrix) {
  part.spin_angle += spin_delta;
  part.world_rotation =
    root.rotation * (part.local_rotation * Quat::from_rotation_y(part.spin_angle));
  part.world_position = root.position;

  let matrix = InstanceMatrix::from_rotation_scale_translation(
    part.world_rotation,
    root.scale,
    part.world_position,
  );
  (part, matrix)
}

#[cfg(test)]
#[path = "kernel_test.rs"]
mod kernel_test;
