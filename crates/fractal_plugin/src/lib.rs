//! fractal_plugin - framework/engine independent fractal animation core.
//!
//! A self-similar hierarchy of rigid parts, five children per part, is
//! re-posed every frame: each level of the tree updates in one data-parallel
//! batch once its parent level has committed, and the results are packed
//! into flat instance-matrix buffers for procedural instanced drawing.
//! Engine bridges implement [`RenderBackend`] and drive the frame loop; the
//! core has no engine dependencies.
//!
//! # Features
//!
//! - **Level-ordered parallel update**: one rayon batch per tree level,
//!   strict parent-before-child barriers, serial fallback with identical
//!   output
//! - **Packed instance buffers**: `Pod` 3x4 affine matrices, one contiguous
//!   buffer per level, uploadable as raw bytes
//! - **Engine-agnostic draw submission**: one instanced draw per level
//!   through the [`RenderBackend`] trait
//!
//! # Example
//!
//! ```ignore
//! use fractal_plugin::{Fractal, FractalConfig, NullBackend, RootTransform};
//!
//! let mut fractal = Fractal::new(FractalConfig::new().with_depth(6))?;
//! let mut backend = NullBackend;
//!
//! // Host frame loop:
//! fractal.advance(delta_time, RootTransform::IDENTITY);
//! fractal.submit(&mut backend);
//! ```

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use types::{
  linear_gradient, Color, ConfigError, FractalConfig, FractalPart, GradientFn, InstanceMatrix,
  MaterialHandle, MeshHandle, RootTransform,
};

// Level storage
pub mod tree;
pub use tree::PartTree;

// Per-part update
pub mod kernel;
pub use kernel::{update_part, update_root};

// Parallel dispatch + frame sequencing
pub mod dispatch;
pub mod scheduler;
pub use dispatch::DispatchMode;
pub use scheduler::{AdvanceStats, FrameScheduler};

// Render boundary
pub mod presentation;
pub use presentation::{submit_draws, Bounds, LevelDraw, NullBackend, RenderBackend};

// Per-instance container
pub mod fractal;
pub use fractal::Fractal;
