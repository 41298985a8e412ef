use super::*;
use crate::constants::{CHILD_DIRECTIONS, CHILD_ROTATIONS, MAX_DEPTH, MIN_DEPTH};
use crate::dispatch::DispatchMode;
use crate::scheduler::FrameScheduler;
use crate::types::RootTransform;

fn config(depth: usize) -> FractalConfig {
  FractalConfig::new().with_depth(depth)
}

#[test]
fn build_level_sizes() {
  for depth in MIN_DEPTH..=MAX_DEPTH {
    let tree = PartTree::build(&config(depth)).unwrap();
    assert_eq!(tree.depth(), depth);
    for li in 0..depth {
      assert_eq!(tree.level_len(li), level_len(li));
      assert_eq!(tree.matrices(li).len(), level_len(li));
    }
  }
}

#[test]
fn build_rejects_bad_depth() {
  assert!(PartTree::build(&config(0)).is_err());
  assert!(PartTree::build(&config(2)).is_err());
  assert!(PartTree::build(&config(9)).is_err());
}

#[test]
fn root_level_has_one_part() {
  let tree = PartTree::build(&config(5)).unwrap();
  assert_eq!(tree.level_len(0), 1);
}

#[test]
fn parts_initialized_from_child_tables() {
  let tree = PartTree::build(&config(3)).unwrap();
  for li in 0..3 {
    for (i, part) in tree.parts(li).iter().enumerate() {
      let slot = child_slot(i);
      assert_eq!(part.direction, CHILD_DIRECTIONS[slot]);
      assert_eq!(part.local_rotation, CHILD_ROTATIONS[slot]);
      assert_eq!(part.spin_angle, 0.0);
    }
  }
}

#[test]
fn matrices_start_zeroed() {
  let tree = PartTree::build(&config(3)).unwrap();
  for li in 0..3 {
    assert!(tree.matrices(li).iter().all(|m| *m == InstanceMatrix::ZERO));
  }
}

#[test]
fn seeds_deterministic_per_configured_seed() {
  let a = PartTree::build(&config(4)).unwrap();
  let b = PartTree::build(&config(4)).unwrap();
  for li in 0..4 {
    assert_eq!(a.seed(li), b.seed(li));
  }

  let c = PartTree::build(&config(4).with_seed(99)).unwrap();
  assert_ne!(a.seed(0), c.seed(0));
}

#[test]
fn seed_components_in_unit_range() {
  let tree = PartTree::build(&config(MAX_DEPTH)).unwrap();
  for li in 0..MAX_DEPTH {
    for c in tree.seed(li).to_array() {
      assert!((0.0..1.0).contains(&c));
    }
  }
}

#[test]
fn release_is_idempotent() {
  let mut tree = PartTree::build(&config(3)).unwrap();
  tree.release();
  assert_eq!(tree.depth(), 0);
  assert_eq!(tree.part_count(), 0);
  tree.release();
  assert_eq!(tree.depth(), 0);
}

#[test]
fn rebuild_discards_spin_accumulation() {
  let mut tree = PartTree::build(&config(3)).unwrap();
  let scheduler = FrameScheduler::new(DispatchMode::Serial);
  scheduler.advance(&mut tree, 1.0, 1.0, &RootTransform::IDENTITY);
  assert!(tree.parts(1).iter().all(|p| p.spin_angle > 0.0));

  tree.rebuild(&config(4)).unwrap();
  assert_eq!(tree.depth(), 4);
  for li in 0..4 {
    assert!(tree.parts(li).iter().all(|p| p.spin_angle == 0.0));
  }
}

#[test]
fn rebuild_failure_keeps_old_tree() {
  let mut tree = PartTree::build(&config(3)).unwrap();
  assert!(tree.rebuild(&config(20)).is_err());
  assert_eq!(tree.depth(), 3);
  assert_eq!(tree.part_count(), 31);
}
