//! Parallel dispatch over a level's index range.
//!
//! The one primitive the scheduler needs: apply an operation to every slot
//! of two zipped slices and return only once every element has been
//! processed. The parallel arm fans out over rayon's global pool; the
//! serial arm is a plain loop. Both run the identical closure, so output
//! never depends on the mode.

use rayon::prelude::*;

/// How a level's updates execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchMode {
  /// Single-threaded loop. For tests and single-core targets.
  Serial,
  /// Fan out over rayon's thread pool.
  Parallel,
}

/// Apply `op` to every `(index, part, matrix)` slot of a level.
///
/// Returns after the last element has been processed - callers rely on this
/// as the barrier between one level and the next. `grain` is the minimum
/// number of elements a worker takes at a time in parallel mode.
pub fn for_each_slot<P, M, F>(
  mode: DispatchMode,
  grain: usize,
  parts: &mut [P],
  matrices: &mut [M],
  op: F,
) where
  P: Send,
  M: Send,
  F: Fn(usize, &mut P, &mut M) + Send + Sync,
{
  debug_assert_eq!(parts.len(), matrices.len());
  match mode {
    DispatchMode::Serial => {
      for (i, (part, matrix)) in parts.iter_mut().zip(matrices.iter_mut()).enumerate() {
        op(i, part, matrix);
      }
    }
    DispatchMode::Parallel => {
      parts
        .par_iter_mut()
        .zip_eq(matrices.par_iter_mut())
        .enumerate()
        .with_min_len(grain.max(1))
        .for_each(|(i, (part, matrix))| op(i, part, matrix));
    }
  }
}
