//! Property tests for the move engine.
//!
//! Invariants covered:
//! - A slide keeps the tile sum and never increases occupancy.
//! - Occupancy drops by exactly the number of merges.
//! - Right is the mirror of left, down is the transpose of up.
//! - Sliding twice in the same direction: the second slide merges what the
//!   first produced at most pairwise, and a slide that reports no change left
//!   the board untouched.
//! - Every diff matches the board and points back into the grid.
//! - An effective move spawns exactly one `2`; a no-op spawns nothing.

use proptest::prelude::*;
use tui_2048::core::{Board, SimpleRng};
use tui_2048::types::{Direction, Position, Tile, GRID_SIZE};

fn cell_value() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        4 => (1u32..=6).prop_map(|e| 1 << e),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4(cell_value())).prop_map(Board::from_rows)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn slide_conserves_sum_and_counts_merges(mut b in board(), dir in direction()) {
        let sum = b.sum();
        let occupied = b.occupancy();

        let outcome = b.slide(dir);

        prop_assert_eq!(b.sum(), sum);
        prop_assert!(b.occupancy() <= occupied);
        prop_assert_eq!(occupied - b.occupancy(), outcome.merges as usize);
        prop_assert_eq!(outcome.spawned, None);
    }

    #[test]
    fn horizontal_moves_are_mirror_images(b in board()) {
        let mut right = b;
        right.slide(Direction::Right);

        let mut mirrored_left = b.mirrored();
        mirrored_left.slide(Direction::Left);

        prop_assert_eq!(right, mirrored_left.mirrored());
    }

    #[test]
    fn vertical_moves_are_transposed_horizontal_moves(b in board()) {
        let mut up = b;
        up.slide(Direction::Up);
        let mut left = b.transposed();
        left.slide(Direction::Left);
        prop_assert_eq!(up, left.transposed());

        let mut down = b;
        down.slide(Direction::Down);
        let mut right = b.transposed();
        right.slide(Direction::Right);
        prop_assert_eq!(down, right.transposed());
    }

    #[test]
    fn settled_board_is_a_fixed_point(mut b in board(), dir in direction()) {
        b.slide(dir);
        let settled = b;
        let outcome = b.slide(dir);
        if !outcome.changed {
            prop_assert_eq!(b, settled);
            prop_assert_eq!(outcome.merges, 0);
        }
        // A third slide after a merge-free second slide never changes anything.
        if outcome.merges == 0 {
            let again = b.slide(dir);
            prop_assert!(!again.changed);
        }
    }

    #[test]
    fn no_tile_grows_more_than_once_per_slide(mut b in board(), dir in direction()) {
        let before_max = b.max_tile();
        b.slide(dir);
        prop_assert!(b.max_tile() <= before_max.max(1) * 2);
    }

    #[test]
    fn diffs_describe_the_board(mut b in board(), dir in direction()) {
        let outcome = b.slide(dir);
        prop_assert_eq!(outcome.diffs.len(), b.occupancy());

        for diff in &outcome.diffs {
            prop_assert_eq!(b.get(diff.position), diff.tile);
            prop_assert!(!diff.motion.is_new);

            // The recorded origin lies on the board, against the move.
            let origin = diff.position.offset_by(-diff.motion.previous_offset);
            prop_assert!(origin.is_some());
            if diff.motion.was_merged() {
                let ghost = diff.position.offset_by(-diff.motion.merged_from_offset);
                prop_assert!(ghost.is_some());
            }
        }
    }

    #[test]
    fn move_spawns_only_after_a_change(mut b in board(), dir in direction(), seed in any::<u64>()) {
        let before = b;
        let mut rng = SimpleRng::new(seed);
        let outcome = b.move_tiles(dir, &mut rng);

        if outcome.changed {
            let pos = outcome.spawned.expect("a slide that changed the board frees a cell or moved into one");
            prop_assert_eq!(b.get(pos), Tile::spawn());
            prop_assert_eq!(b.sum(), before.sum() + 2);
        } else {
            prop_assert_eq!(outcome.spawned, None);
            prop_assert_eq!(b, before);
        }
    }

    #[test]
    fn lines_move_independently(mut b in board(), dir in direction()) {
        // Each row (left/right) or column (up/down) keeps its own sum.
        let line_sum = |board: &Board, i: usize| -> u64 {
            (0..GRID_SIZE)
                .map(|j| {
                    let pos = if dir.is_horizontal() { Position::new(i, j) } else { Position::new(j, i) };
                    board.get(pos).value() as u64
                })
                .sum()
        };
        let before: Vec<u64> = (0..GRID_SIZE).map(|i| line_sum(&b, i)).collect();
        b.slide(dir);
        let after: Vec<u64> = (0..GRID_SIZE).map(|i| line_sum(&b, i)).collect();
        prop_assert_eq!(before, after);
    }
}
