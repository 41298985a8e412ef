//! Core data types for the fractal part hierarchy.

use std::fmt;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Quat, Vec3};
use thiserror::Error;

use crate::constants::{
  CHILD_DIRECTIONS, CHILD_ROTATIONS, DEFAULT_SPIN_RATE, MAX_DEPTH, MIN_DEPTH,
};

/// Linear RGBA color.
pub type Color = [f32; 4];

/// Gradient evaluation: maps `t` in [0, 1] to a color.
pub type GradientFn = Arc<dyn Fn(f32) -> Color + Send + Sync>;

/// One node of the part hierarchy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalPart {
  /// Unit offset direction from the parent, from the child table.
  pub direction: Vec3,
  /// Fixed orientation relative to the parent, from the child table.
  pub local_rotation: Quat,
  /// World-space position, recomputed every frame.
  pub world_position: Vec3,
  /// World-space orientation, recomputed every frame.
  pub world_rotation: Quat,
  /// Accumulated self-spin about the local up axis, radians.
  /// Strictly increasing for the lifetime of the tree; only its sine and
  /// cosine are ever consumed, so wrap-around does not matter.
  pub spin_angle: f32,
}

impl FractalPart {
  /// Part in its initial state for the given child slot.
  pub fn from_slot(slot: usize) -> Self {
    Self {
      direction: CHILD_DIRECTIONS[slot],
      local_rotation: CHILD_ROTATIONS[slot],
      world_position: Vec3::ZERO,
      world_rotation: Quat::IDENTITY,
      spin_angle: 0.0,
    }
  }
}

/// Packed 3x4 affine transform consumed by instanced rendering.
///
/// Three scaled rotation basis columns followed by the translation, matching
/// a float3x4 structured-buffer element. `Pod` so a whole level's buffer can
/// be uploaded as raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceMatrix {
  pub x_axis: [f32; 3],
  pub y_axis: [f32; 3],
  pub z_axis: [f32; 3],
  pub translation: [f32; 3],
}

impl InstanceMatrix {
  pub const ZERO: Self = Self {
    x_axis: [0.0; 3],
    y_axis: [0.0; 3],
    z_axis: [0.0; 3],
    translation: [0.0; 3],
  };

  /// Build from an orientation, uniform scale, and translation.
  #[inline]
  pub fn from_rotation_scale_translation(rotation: Quat, scale: f32, translation: Vec3) -> Self {
    let basis = Mat3::from_quat(rotation) * scale;
    Self {
      x_axis: basis.x_axis.to_array(),
      y_axis: basis.y_axis.to_array(),
      z_axis: basis.z_axis.to_array(),
      translation: translation.to_array(),
    }
  }

  /// Apply the affine transform to a point. CPU-side debug/test path.
  pub fn transform_point(&self, point: Vec3) -> Vec3 {
    Vec3::from_array(self.x_axis) * point.x
      + Vec3::from_array(self.y_axis) * point.y
      + Vec3::from_array(self.z_axis) * point.z
      + Vec3::from_array(self.translation)
  }
}

/// Externally driven transform of the tree root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootTransform {
  pub position: Vec3,
  pub rotation: Quat,
  /// Uniform object scale; level 0 renders at this scale.
  pub scale: f32,
}

impl RootTransform {
  pub const IDENTITY: Self = Self {
    position: Vec3::ZERO,
    rotation: Quat::IDENTITY,
    scale: 1.0,
  };
}

impl Default for RootTransform {
  fn default() -> Self {
    Self::IDENTITY
  }
}

/// Opaque mesh identifier understood by the render backend.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MeshHandle(pub u64);

/// Opaque material identifier understood by the render backend.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MaterialHandle(pub u64);

/// Configuration errors, reported at build time only.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
  #[error("depth {depth} outside supported range [3, 8]")]
  DepthOutOfRange { depth: usize },
}

/// Configuration for one fractal instance.
///
/// Builder-style construction:
///
/// ```ignore
/// let config = FractalConfig::new()
///   .with_depth(6)
///   .with_meshes(cube, leaf_quad)
///   .with_gradients(trunk_a, trunk_b)
///   .with_leaf_colors(green_a, green_b);
/// ```
#[derive(Clone)]
pub struct FractalConfig {
  /// Number of levels in the hierarchy. Valid range [3, 8].
  pub depth: usize,
  /// Self-spin rate in radians per second, shared by every part.
  pub spin_rate: f32,
  /// Seed for the per-level sequence vectors.
  pub seed: u64,
  /// Mesh instanced for every non-leaf level.
  pub mesh: MeshHandle,
  /// Mesh instanced for the deepest level.
  pub leaf_mesh: MeshHandle,
  /// Material shared by all levels.
  pub material: MaterialHandle,
  /// First per-level color for non-leaf levels.
  pub gradient_a: GradientFn,
  /// Second per-level color for non-leaf levels.
  pub gradient_b: GradientFn,
  /// First color of the leaf level.
  pub leaf_color_a: Color,
  /// Second color of the leaf level.
  pub leaf_color_b: Color,
}

impl Default for FractalConfig {
  fn default() -> Self {
    Self {
      depth: 4,
      spin_rate: DEFAULT_SPIN_RATE,
      seed: 0,
      mesh: MeshHandle::default(),
      leaf_mesh: MeshHandle::default(),
      material: MaterialHandle::default(),
      gradient_a: Arc::new(|_| [1.0, 1.0, 1.0, 1.0]),
      gradient_b: Arc::new(|_| [1.0, 1.0, 1.0, 1.0]),
      leaf_color_a: [1.0, 1.0, 1.0, 1.0],
      leaf_color_b: [1.0, 1.0, 1.0, 1.0],
    }
  }
}

impl FractalConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_depth(mut self, depth: usize) -> Self {
    self.depth = depth;
    self
  }

  pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
    self.spin_rate = spin_rate;
    self
  }

  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_meshes(mut self, mesh: MeshHandle, leaf_mesh: MeshHandle) -> Self {
    self.mesh = mesh;
    self.leaf_mesh = leaf_mesh;
    self
  }

  pub fn with_material(mut self, material: MaterialHandle) -> Self {
    self.material = material;
    self
  }

  pub fn with_gradients(mut self, gradient_a: GradientFn, gradient_b: GradientFn) -> Self {
    self.gradient_a = gradient_a;
    self.gradient_b = gradient_b;
    self
  }

  pub fn with_leaf_colors(mut self, leaf_color_a: Color, leaf_color_b: Color) -> Self {
    self.leaf_color_a = leaf_color_a;
    self.leaf_color_b = leaf_color_b;
    self
  }

  /// Check the configuration, returning the first violated constraint.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) {
      return Err(ConfigError::DepthOutOfRange { depth: self.depth });
    }
    Ok(())
  }
}

impl fmt::Debug for FractalConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FractalConfig")
      .field("depth", &self.depth)
      .field("spin_rate", &self.spin_rate)
      .field("seed", &self.seed)
      .field("mesh", &self.mesh)
      .field("leaf_mesh", &self.leaf_mesh)
      .field("material", &self.material)
      .field("leaf_color_a", &self.leaf_color_a)
      .field("leaf_color_b", &self.leaf_color_b)
      .finish_non_exhaustive()
  }
}

/// Two-stop gradient blending linearly from `from` at t = 0 to `to` at t = 1.
pub fn linear_gradient(from: Color, to: Color) -> GradientFn {
  Arc::new(move |t| {
    let t = t.clamp(0.0, 1.0);
    [
      from[0] + (to[0] - from[0]) * t,
      from[1] + (to[1] - from[1]) * t,
      from[2] + (to[2] - from[2]) * t,
      from[3] + (to[3] - from[3]) * t,
    ]
  })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
