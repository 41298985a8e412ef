//! Fractal - per-instance container tying configuration, tree, and
//! scheduler together.
//!
//! The host frame loop calls [`Fractal::advance`] with elapsed time and the
//! root transform, then [`Fractal::submit`] to hand the committed buffers to
//! its render backend. Each instance owns its buffers outright, so multiple
//! fractals can update and render concurrently without sharing any mutable
//! state.

use crate::dispatch::DispatchMode;
use crate::presentation::{submit_draws, RenderBackend};
use crate::scheduler::{AdvanceStats, FrameScheduler};
use crate::tree::PartTree;
use crate::types::{ConfigError, FractalConfig, RootTransform};

pub struct Fractal {
  config: FractalConfig,
  tree: PartTree,
  scheduler: FrameScheduler,
  last_root: RootTransform,
}

impl Fractal {
  /// Build a fractal from the configuration.
  pub fn new(config: FractalConfig) -> Result<Self, ConfigError> {
    let tree = PartTree::build(&config)?;
    Ok(Self {
      config,
      tree,
      scheduler: FrameScheduler::default(),
      last_root: RootTransform::IDENTITY,
    })
  }

  pub fn config(&self) -> &FractalConfig {
    &self.config
  }

  pub fn tree(&self) -> &PartTree {
    &self.tree
  }

  /// Change the tree depth, rebuilding the whole hierarchy.
  ///
  /// All prior part state is discarded and spin accumulation restarts at
  /// zero. Requires exclusive access, so it can never overlap an in-flight
  /// `advance`. On error the existing tree is kept.
  pub fn set_depth(&mut self, depth: usize) -> Result<(), ConfigError> {
    let mut next = self.config.clone();
    next.depth = depth;
    self.tree.rebuild(&next)?;
    self.config = next;
    Ok(())
  }

  /// Switch between serial and parallel dispatch. Output is identical.
  pub fn set_dispatch_mode(&mut self, mode: DispatchMode) {
    self.scheduler.set_mode(mode);
  }

  /// Advance the whole tree by one frame.
  pub fn advance(&mut self, delta_time: f32, root: RootTransform) -> AdvanceStats {
    self.last_root = root;
    self
      .scheduler
      .advance(&mut self.tree, self.config.spin_rate, delta_time, &root)
  }

  /// Issue this frame's instanced draws through `backend`.
  pub fn submit<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
    submit_draws(&self.tree, &self.config, &self.last_root, backend);
  }

  /// Drop all level storage. Idempotent; the configuration is kept, so a
  /// later `set_depth` builds a fresh tree.
  pub fn release(&mut self) {
    self.tree.release();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::presentation::{LevelDraw, RenderBackend};

  struct CountingBackend {
    draws: usize,
  }

  impl RenderBackend for CountingBackend {
    fn draw_level(&mut self, _draw: LevelDraw<'_>) {
      self.draws += 1;
    }
  }

  #[test]
  fn advance_then_submit() {
    let mut fractal = Fractal::new(FractalConfig::new().with_depth(3)).unwrap();
    let stats = fractal.advance(1.0 / 60.0, RootTransform::IDENTITY);
    assert_eq!(stats.level_count, 3);
    assert_eq!(stats.part_count, 31);

    let mut backend = CountingBackend { draws: 0 };
    fractal.submit(&mut backend);
    assert_eq!(backend.draws, 3);
  }

  #[test]
  fn invalid_config_rejected() {
    assert!(Fractal::new(FractalConfig::new().with_depth(2)).is_err());
  }

  #[test]
  fn set_depth_rebuilds_and_resets_spin() {
    let mut fractal = Fractal::new(FractalConfig::new().with_depth(3)).unwrap();
    fractal.advance(1.0, RootTransform::IDENTITY);
    assert!(fractal.tree().parts(0)[0].spin_angle > 0.0);

    fractal.set_depth(5).unwrap();
    assert_eq!(fractal.tree().depth(), 5);
    assert_eq!(fractal.tree().parts(0)[0].spin_angle, 0.0);
  }

  #[test]
  fn set_depth_rejects_and_keeps_tree() {
    let mut fractal = Fractal::new(FractalConfig::new().with_depth(4)).unwrap();
    assert!(fractal.set_depth(9).is_err());
    assert_eq!(fractal.tree().depth(), 4);
    assert_eq!(fractal.config().depth, 4);
  }

  #[test]
  fn release_is_idempotent_and_recoverable() {
    let mut fractal = Fractal::new(FractalConfig::new().with_depth(3)).unwrap();
    fractal.release();
    fractal.release();
    assert_eq!(fractal.tree().depth(), 0);

    // advancing a released tree is a no-op
    let stats = fractal.advance(1.0, RootTransform::IDENTITY);
    assert_eq!(stats.part_count, 0);

    fractal.set_depth(4).unwrap();
    assert_eq!(fractal.tree().depth(), 4);
  }
}
