//! Frame scheduler - level-by-level dispatch in strict dependency order.
//!
//! Level 0 is a single part and updates synchronously from the externally
//! supplied root transform. Every later level fans out over its whole index
//! range, reading the level above it; a level's dispatch does not start
//! until the previous one has fully committed, so a part always composes
//! against this frame's parent state, never last frame's. Within a level,
//! parts are mutually independent and any partition of the index range is
//! valid.

use web_time::Instant;

use crate::constants::{parent_index, CHILD_COUNT, CHILD_SCALE};
use crate::dispatch::{for_each_slot, DispatchMode};
use crate::kernel::{update_part, update_root};
use crate::tree::PartTree;
use crate::types::RootTransform;

/// Counters and timing for one [`FrameScheduler::advance`] call.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvanceStats {
  /// Levels updated this frame.
  pub level_count: usize,
  /// Parts updated across all levels.
  pub part_count: usize,
  /// Wall-clock time of the whole update in microseconds.
  pub update_us: u64,
}

/// Sequences per-level updates for one tree.
#[derive(Clone, Copy, Debug)]
pub struct FrameScheduler {
  mode: DispatchMode,
  grain: usize,
}

impl Default for FrameScheduler {
  fn default() -> Self {
    Self {
      mode: DispatchMode::Parallel,
      grain: CHILD_COUNT,
    }
  }
}

impl FrameScheduler {
  pub fn new(mode: DispatchMode) -> Self {
    Self {
      mode,
      ..Self::default()
    }
  }

  /// Minimum per-worker batch size. Five siblings sharing one parent is the
  /// natural grain; any other partition produces the same output.
  pub fn with_grain(mut self, grain: usize) -> Self {
    self.grain = grain.max(1);
    self
  }

  pub fn mode(&self) -> DispatchMode {
    self.mode
  }

  pub fn set_mode(&mut self, mode: DispatchMode) {
    self.mode = mode;
  }

  /// Advance every part by one frame and refresh the instance buffers.
  ///
  /// Blocks until all levels have committed; the tree's matrix buffers are
  /// ready for the render boundary when this returns. A released tree is a
  /// no-op.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "scheduler::advance"))]
  pub fn advance(
    &self,
    tree: &mut PartTree,
    spin_rate: f32,
    delta_time: f32,
    root: &RootTransform,
  ) -> AdvanceStats {
    let start = Instant::now();
    let depth = tree.depth();
    if depth == 0 {
      return AdvanceStats::default();
    }

    let spin_delta = spin_rate * delta_time;

    // Root first: a single element seeds the chain, nothing to fan out.
    {
      let (root_part, root_matrix) = tree.root_update_slots();
      let (updated, matrix) = update_root(*root_part, spin_delta, root);
      *root_part = updated;
      *root_matrix = matrix;
    }

    let mut part_count = 1;
    let mut scale = root.scale;
    for li in 1..depth {
      scale *= CHILD_SCALE;

      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("level_dispatch", level = li).entered();

      let (parents, parts, matrices) = tree.level_update_slices(li);
      let level_parts = parts.len();
      for_each_slot(self.mode, self.grain, parts, matrices, |i, part, matrix| {
        let parent = &parents[parent_index(i)];
        let (updated, m) = update_part(parent, *part, spin_delta, scale);
        *part = updated;
        *matrix = m;
      });
      part_count += level_parts;
    }

    AdvanceStats {
      level_count: depth,
      part_count,
      update_us: start.elapsed().as_micros() as u64,
    }
  }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;
