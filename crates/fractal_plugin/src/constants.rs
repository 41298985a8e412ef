//! Constant tables for the five-way branching pattern.
//!
//! Every non-root part takes its offset direction and fixed orientation from
//! one five-entry table, selected by `index % 5`. The parent of part `i` in
//! level `L` is part `i / 5` in level `L - 1` - no pointers are stored, the
//! relation is pure index arithmetic.

use std::f32::consts::{FRAC_1_SQRT_2, PI};

use glam::{Quat, Vec3};

/// Children spawned per part.
pub const CHILD_COUNT: usize = 5;

/// Minimum supported tree depth.
pub const MIN_DEPTH: usize = 3;

/// Maximum supported tree depth (5^7 = 78125 parts at the deepest level).
pub const MAX_DEPTH: usize = 8;

/// Scale ratio between a level and its parent.
pub const CHILD_SCALE: f32 = 0.5;

/// Spacing between a part and its parent, in multiples of the child's scale.
pub const OFFSET_FACTOR: f32 = 1.5;

/// Default self-spin rate in radians per second.
pub const DEFAULT_SPIN_RATE: f32 = 0.125 * PI;

/// Offset directions from the parent: up, right, left, forward, back.
pub const CHILD_DIRECTIONS: [Vec3; CHILD_COUNT] =
  [Vec3::Y, Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z];

/// Fixed child orientations paired with [`CHILD_DIRECTIONS`].
///
/// Quarter turns about Z and X, written as raw quaternion components so the
/// table can be const. Each entry maps local up onto the paired direction.
pub const CHILD_ROTATIONS: [Quat; CHILD_COUNT] = [
  Quat::IDENTITY,
  Quat::from_xyzw(0.0, 0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
  Quat::from_xyzw(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
  Quat::from_xyzw(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2),
  Quat::from_xyzw(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2),
];

/// Number of parts in a level.
#[inline]
pub const fn level_len(level: usize) -> usize {
  CHILD_COUNT.pow(level as u32)
}

/// Index of a part's parent in the previous level.
#[inline]
pub const fn parent_index(index: usize) -> usize {
  index / CHILD_COUNT
}

/// Which entry of the child tables a part uses.
#[inline]
pub const fn child_slot(index: usize) -> usize {
  index % CHILD_COUNT
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
