use glam::Vec3;

use super::*;

#[test]
fn directions_are_unit() {
  for dir in CHILD_DIRECTIONS {
    assert!((dir.length() - 1.0).abs() < 1e-6);
  }
}

#[test]
fn rotations_are_unit() {
  for rot in CHILD_ROTATIONS {
    assert!((rot.length() - 1.0).abs() < 1e-6);
  }
}

#[test]
fn rotations_turn_up_onto_paired_direction() {
  for (rot, dir) in CHILD_ROTATIONS.iter().zip(CHILD_DIRECTIONS) {
    let up = *rot * Vec3::Y;
    assert!((up - dir).length() < 1e-6, "{up} vs {dir}");
  }
}

#[test]
fn level_len_is_powers_of_five() {
  assert_eq!(level_len(0), 1);
  assert_eq!(level_len(1), 5);
  assert_eq!(level_len(3), 125);
  assert_eq!(level_len(MAX_DEPTH - 1), 78125);
}

#[test]
fn parent_index_arithmetic() {
  assert_eq!(parent_index(0), 0);
  assert_eq!(parent_index(4), 0);
  assert_eq!(parent_index(5), 1);
  assert_eq!(parent_index(24), 4);
}

#[test]
fn child_slot_cycles_through_table() {
  assert_eq!(child_slot(0), 0);
  assert_eq!(child_slot(4), 4);
  assert_eq!(child_slot(5), 0);
  assert_eq!(child_slot(7), 2);
  assert_eq!(child_slot(24), 4);
}
