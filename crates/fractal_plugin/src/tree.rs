//! PartTree - level storage for the part hierarchy.

use glam::Vec4;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{child_slot, level_len};
use crate::types::{ConfigError, FractalConfig, FractalPart, InstanceMatrix};

/// Fixed-depth part hierarchy, one flat array per level.
///
/// Level `L` holds 5^L parts; the parent of part `i` in level `L` is part
/// `i / 5` in level `L - 1`. Topology is static once built - only per-part
/// transform state changes between frames. Each level also owns the packed
/// instance-matrix buffer its dispatch writes and the render boundary reads,
/// plus a four-component sequence vector drawn once at build time.
pub struct PartTree {
  levels: Vec<Vec<FractalPart>>,
  matrices: Vec<Vec<InstanceMatrix>>,
  seeds: Vec<Vec4>,
}

impl PartTree {
  /// Allocate and initialize every level for the configured depth.
  ///
  /// Validation runs before any allocation, so a failed build leaves
  /// nothing to clean up.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "part_tree::build"))]
  pub fn build(config: &FractalConfig) -> Result<Self, ConfigError> {
    config.validate()?;

    let depth = config.depth;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut levels = Vec::with_capacity(depth);
    let mut matrices = Vec::with_capacity(depth);
    let mut seeds = Vec::with_capacity(depth);
    for li in 0..depth {
      let len = level_len(li);
      levels.push(
        (0..len)
          .map(|i| FractalPart::from_slot(child_slot(i)))
          .collect(),
      );
      matrices.push(vec![InstanceMatrix::ZERO; len]);
      seeds.push(Vec4::new(
        rng.random(),
        rng.random(),
        rng.random(),
        rng.random(),
      ));
    }

    Ok(Self {
      levels,
      matrices,
      seeds,
    })
  }

  /// Discard all level state and build again from `config`.
  ///
  /// Previously read part or buffer data is invalid afterwards and spin
  /// accumulation restarts from zero. On error the existing tree is left
  /// untouched.
  pub fn rebuild(&mut self, config: &FractalConfig) -> Result<(), ConfigError> {
    *self = Self::build(config)?;
    Ok(())
  }

  /// Drop all level storage. Idempotent.
  pub fn release(&mut self) {
    self.levels.clear();
    self.matrices.clear();
    self.seeds.clear();
  }

  /// Number of levels. Zero after `release`.
  pub fn depth(&self) -> usize {
    self.levels.len()
  }

  /// Number of parts in one level.
  pub fn level_len(&self, level: usize) -> usize {
    self.levels[level].len()
  }

  /// Total part count across all levels.
  pub fn part_count(&self) -> usize {
    self.levels.iter().map(Vec::len).sum()
  }

  /// Parts of one level.
  pub fn parts(&self, level: usize) -> &[FractalPart] {
    &self.levels[level]
  }

  /// Packed instance matrices of one level.
  pub fn matrices(&self, level: usize) -> &[InstanceMatrix] {
    &self.matrices[level]
  }

  /// The level's sequence vector, fixed at build time.
  pub fn seed(&self, level: usize) -> Vec4 {
    self.seeds[level]
  }

  /// Split borrows for one level dispatch: the committed parent level plus
  /// mutable access to the level being written.
  pub(crate) fn level_update_slices(
    &mut self,
    level: usize,
  ) -> (&[FractalPart], &mut [FractalPart], &mut [InstanceMatrix]) {
    debug_assert!(level >= 1);
    let (done, rest) = self.levels.split_at_mut(level);
    (&done[level - 1], &mut rest[0], &mut self.matrices[level])
  }

  /// Root slots for the synchronous level-0 update.
  pub(crate) fn root_update_slots(&mut self) -> (&mut FractalPart, &mut InstanceMatrix) {
    (&mut self.levels[0][0], &mut self.matrices[0][0])
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
