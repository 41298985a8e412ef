//! Render boundary - hands per-level buffers to an engine bridge.
//!
//! The core stays engine-independent: bridges (Bevy, wgpu, test harnesses)
//! implement [`RenderBackend`] and receive one [`LevelDraw`] per level, each
//! a borrowed view of the tree's packed matrix buffer plus the per-level
//! constants a procedural instanced draw needs.

use glam::{Vec3, Vec4};

use crate::tree::PartTree;
use crate::types::{Color, FractalConfig, InstanceMatrix, MaterialHandle, MeshHandle, RootTransform};

/// Axis-aligned bounding volume shared by all of a tree's draws.
///
/// Conservative: sized once per frame from the root position and overall
/// object scale rather than per level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
  pub center: Vec3,
  pub size: Vec3,
}

impl Bounds {
  /// Cube covering the whole tree at the given object scale.
  pub fn for_tree(root_position: Vec3, object_scale: f32) -> Self {
    Self {
      center: root_position,
      size: Vec3::splat(3.0 * object_scale),
    }
  }
}

/// Everything one instanced draw needs, borrowed from the tree.
pub struct LevelDraw<'a> {
  /// Level index, 0 = root.
  pub level: usize,
  /// Packed per-instance transforms for the level.
  pub matrices: &'a [InstanceMatrix],
  /// Instance count; equals `matrices.len()`.
  pub instance_count: usize,
  /// The level's sequence vector, fixed at build time.
  pub seed: Vec4,
  pub color_a: Color,
  pub color_b: Color,
  /// Mesh to instance; the leaf level gets the leaf mesh.
  pub mesh: MeshHandle,
  pub material: MaterialHandle,
  /// Bounding volume shared by every level this frame.
  pub bounds: Bounds,
}

/// Callback interface for engine bridges.
///
/// Implementations turn each [`LevelDraw`] into one procedural instanced
/// draw; the matrix slice is `Pod`, so it can be handed to a GPU upload as
/// raw bytes.
pub trait RenderBackend {
  fn draw_level(&mut self, draw: LevelDraw<'_>);
}

/// No-op backend for headless operation and tests.
pub struct NullBackend;

impl RenderBackend for NullBackend {
  fn draw_level(&mut self, _draw: LevelDraw<'_>) {
    // No-op
  }
}

/// Issue one instanced draw per level from the tree's committed buffers.
///
/// Non-leaf colors come from the two gradients evaluated at
/// `level / (depth - 1)`; the deepest level uses the fixed leaf pair and
/// the leaf mesh instead.
pub fn submit_draws<B: RenderBackend + ?Sized>(
  tree: &PartTree,
  config: &FractalConfig,
  root: &RootTransform,
  backend: &mut B,
) {
  let depth = tree.depth();
  if depth == 0 {
    return;
  }

  let bounds = Bounds::for_tree(tree.parts(0)[0].world_position, root.scale);
  let leaf = depth - 1;
  for li in 0..depth {
    let (color_a, color_b, mesh) = if li == leaf {
      (config.leaf_color_a, config.leaf_color_b, config.leaf_mesh)
    } else {
      let t = li as f32 / leaf as f32;
      ((config.gradient_a)(t), (config.gradient_b)(t), config.mesh)
    };

    let matrices = tree.matrices(li);
    backend.draw_level(LevelDraw {
      level: li,
      matrices,
      instance_count: matrices.len(),
      seed: tree.seed(li),
      color_a,
      color_b,
      mesh,
      material: config.material,
      bounds,
    });
  }
}

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;
