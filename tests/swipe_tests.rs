//! Move engine integration tests.
//!
//! Exercises the merge rules across directions and board sizes through the
//! public `rules` API.

use merge_grid::rules::{legal_directions, swipe, Direction};
use merge_grid::{Coord, Grid};

fn grid(size: usize, values: &[u64]) -> Grid {
    Grid::from_values(size, values).unwrap()
}

// =============================================================================
// Merge Rules
// =============================================================================

/// `[2, 2, 2, 2]` collapses to two 4s in every direction.
#[test]
fn test_no_cascade_every_direction() {
    let mut left = grid(4, &[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    swipe(&mut left, Direction::Left);
    assert_eq!(&left.values()[..4], &[4, 4, 0, 0]);

    let mut right = grid(4, &[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    swipe(&mut right, Direction::Right);
    assert_eq!(&right.values()[..4], &[0, 0, 4, 4]);

    let column = [2, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0];
    let mut up = grid(4, &column);
    swipe(&mut up, Direction::Up);
    let first_column: Vec<u64> = (0..4).map(|row| up.values()[row * 4]).collect();
    assert_eq!(first_column, vec![4, 4, 0, 0]);

    let mut down = grid(4, &column);
    swipe(&mut down, Direction::Down);
    let first_column: Vec<u64> = (0..4).map(|row| down.values()[row * 4]).collect();
    assert_eq!(first_column, vec![0, 0, 4, 4]);
}

/// Different values next to each other only slide.
#[test]
fn test_pairs_of_different_values() {
    let mut board = grid(4, &[2, 2, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let outcome = swipe(&mut board, Direction::Left);

    assert_eq!(&board.values()[..4], &[4, 8, 0, 0]);
    assert_eq!(outcome.merged_total(), 12);
}

/// `[8, 4, 4, 8]` merges the middle pair only.
#[test]
fn test_middle_pair() {
    let mut board = grid(4, &[8, 4, 4, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    swipe(&mut board, Direction::Left);
    assert_eq!(&board.values()[..4], &[8, 8, 8, 0]);
}

/// Lines are independent of each other.
#[test]
fn test_lines_are_independent() {
    let mut board = grid(
        3,
        &[
            2, 2, 2, //
            0, 4, 0, //
            8, 0, 8, //
        ],
    );
    swipe(&mut board, Direction::Left);
    assert_eq!(board.values(), vec![4, 2, 0, 4, 0, 0, 16, 0, 0]);
}

/// Larger boards follow the same rules.
#[test]
fn test_six_by_six_row() {
    let mut values = vec![0u64; 36];
    values[..6].copy_from_slice(&[2, 2, 2, 2, 2, 2]);
    let mut board = grid(6, &values);

    swipe(&mut board, Direction::Right);
    assert_eq!(&board.values()[..6], &[0, 0, 0, 4, 4, 4]);
}

// =============================================================================
// Identity
// =============================================================================

/// Merge records name the parents and the tile left on the board.
#[test]
fn test_merge_records_match_board() {
    let mut board = grid(2, &[4, 4, 2, 2]);
    let parent_ids: Vec<_> = board.tiles().map(|t| t.id).collect();

    let outcome = swipe(&mut board, Direction::Right);

    assert_eq!(outcome.merges.len(), 2);
    for merge in &outcome.merges {
        let tile = board.tile_at(merge.at).unwrap();
        assert_eq!(tile.id, merge.result);
        assert_eq!(tile.value, merge.value);
        assert!(merge.parents.iter().all(|p| parent_ids.contains(p)));
        assert!(!parent_ids.contains(&merge.result));
    }
    // Parent nearer the destination edge is listed first
    assert_eq!(outcome.merges[0].parents, [parent_ids[1], parent_ids[0]]);
    assert_eq!(outcome.merges[0].at, Coord::new(1, 0));
}

/// Every motion starts at a tile's old cell and ends at its new one.
#[test]
fn test_motions_trace_tiles() {
    let mut board = grid(4, &[0, 0, 0, 2, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let before = board.clone();
    let outcome = swipe(&mut board, Direction::Left);

    assert_eq!(outcome.motions.len(), 2);
    for motion in &outcome.motions {
        assert_eq!(before.tile_at(motion.from).map(|t| t.id), Some(motion.id));
        assert_eq!(board.tile_at(motion.to).map(|t| t.id), Some(motion.id));
    }
}

// =============================================================================
// Legal Directions
// =============================================================================

/// A single tile in a corner can only move two ways.
#[test]
fn test_corner_tile_legal_directions() {
    let board = grid(3, &[0, 0, 0, 0, 0, 0, 0, 0, 2]);
    assert_eq!(legal_directions(&board).as_slice(), &[Direction::Up, Direction::Left]);
}

/// An empty board has no legal direction but is not lost.
#[test]
fn test_empty_board_has_no_legal_direction() {
    let board = Grid::new(4);
    assert!(legal_directions(&board).is_empty());
    assert!(!merge_grid::rules::is_game_over(&board));
}
