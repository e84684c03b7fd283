//! Board tests - slides, merges, spawning and diff records

use tui_2048::core::{Board, RandomSource, SimpleRng};
use tui_2048::types::{Direction, Offset, Position, Tile, TileMotion, CELL_COUNT};

/// Random source that always draws the same raw value.
struct Fixed(u64);

impl RandomSource for Fixed {
    fn next_u64(&mut self) -> u64 {
        self.0
    }
}

fn row0(board: &Board) -> [u32; 4] {
    board.to_rows()[0]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.empty_count(), CELL_COUNT);
    assert_eq!(board.occupancy(), 0);
    assert_eq!(board.sum(), 0);
    assert_eq!(board.max_tile(), 0);
    assert!(board.has_moves());
}

#[test]
fn test_hand_traced_left_move() {
    let mut board = Board::from_rows([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = board.slide(Direction::Left);

    assert!(outcome.changed);
    assert_eq!(outcome.merges, 1);
    assert_eq!(row0(&board), [4, 4, 0, 0]);

    let survivor = outcome.diff_at(Position::new(0, 0)).unwrap();
    assert_eq!(survivor.tile, Tile::new(4));
    assert_eq!(survivor.motion.previous_offset, Offset::ZERO);
    assert_eq!(survivor.motion.merged_from_offset, Offset::new(0, -1));
    assert!(!survivor.motion.is_new);

    let slid = outcome.diff_at(Position::new(0, 1)).unwrap();
    assert_eq!(slid.motion.previous_offset, Offset::new(0, -1));
    assert!(!slid.motion.was_merged());
}

#[test]
fn test_hand_traced_right_moves() {
    let mut board = Board::from_rows([[0, 4, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let outcome = board.slide(Direction::Right);
    assert_eq!(row0(&board), [0, 0, 4, 4]);
    assert_eq!(
        outcome.diff_at(Position::new(0, 3)).unwrap().motion.merged_from_offset,
        Offset::new(0, 1)
    );
    assert_eq!(
        outcome.diff_at(Position::new(0, 2)).unwrap().motion.previous_offset,
        Offset::new(0, 1)
    );

    let outcome = board.slide(Direction::Right);
    assert!(outcome.changed);
    assert_eq!(row0(&board), [0, 0, 0, 8]);
    let merged = outcome.diff_at(Position::new(0, 3)).unwrap();
    // Only the latest merge is described.
    assert_eq!(merged.motion.merged_from_offset, Offset::new(0, 1));
    assert_eq!(merged.motion.previous_offset, Offset::ZERO);
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let mut board = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let outcome = board.slide(Direction::Left);
    assert_eq!(row0(&board), [4, 4, 0, 0]);
    assert_eq!(outcome.merges, 2);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let mut board = Board::from_rows([[4, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
    board.slide(Direction::Left);
    assert_eq!(row0(&board), [4, 4, 0, 0]);
}

#[test]
fn test_columns_move_up_and_down() {
    let rows = [[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 8]];

    let mut up = Board::from_rows(rows);
    let outcome = up.slide(Direction::Up);
    assert_eq!(
        up.to_rows(),
        [[4, 0, 0, 8], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
    );
    let top = outcome.diff_at(Position::new(0, 0)).unwrap();
    assert_eq!(top.motion.merged_from_offset, Offset::new(-2, 0));
    let eight = outcome.diff_at(Position::new(0, 3)).unwrap();
    assert_eq!(eight.motion.previous_offset, Offset::new(-3, 0));

    let mut down = Board::from_rows(rows);
    down.slide(Direction::Down);
    assert_eq!(
        down.to_rows(),
        [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 8]]
    );
}

#[test]
fn test_no_op_move_changes_nothing() {
    let start = Board::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
    let mut board = start;
    let mut rng = SimpleRng::new(3);
    let outcome = board.move_tiles(Direction::Left, &mut rng);

    assert!(!outcome.changed);
    assert_eq!(outcome.spawned, None);
    assert_eq!(outcome.merges, 0);
    assert_eq!(board, start);
    assert!(outcome
        .diffs
        .iter()
        .all(|d| d.motion == TileMotion::STILL));
}

#[test]
fn test_effective_move_spawns_exactly_one_tile() {
    let mut board = Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let mut rng = SimpleRng::new(17);
    let outcome = board.move_tiles(Direction::Left, &mut rng);

    assert!(outcome.changed);
    let spawned = outcome.spawned.expect("a cell was free");
    assert_ne!(spawned, Position::new(0, 0));
    assert_eq!(board.get(spawned), Tile::spawn());
    assert_eq!(board.occupancy(), 2);
    assert_eq!(board.sum(), 4);
    assert_eq!(outcome.diff_at(spawned).unwrap().motion, TileMotion::SPAWNED);
}

#[test]
fn test_spawn_on_empty_board() {
    let mut board = Board::new();
    let pos = board.spawn_tile(&mut SimpleRng::new(5)).unwrap();
    assert_eq!(board.occupancy(), 1);
    assert_eq!(board.get(pos).value(), 2);
}

#[test]
fn test_spawn_on_full_board_is_noop() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut board = Board::from_rows(rows);
    assert_eq!(board.spawn_tile(&mut SimpleRng::new(5)), None);
    assert_eq!(board.to_rows(), rows);
    assert!(!board.has_moves());
}

#[test]
fn test_spawn_picks_first_and_last_empty_cells() {
    // Reservoir sampling: a source that never replaces keeps the first
    // empty cell, one that always replaces ends on the last.
    let rows = [[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 0, 2], [2, 2, 2, 0]];

    let mut first = Board::from_rows(rows);
    assert_eq!(first.spawn_tile(&mut Fixed(u64::MAX)), Some(Position::new(0, 1)));

    let mut last = Board::from_rows(rows);
    assert_eq!(last.spawn_tile(&mut Fixed(0)), Some(Position::new(3, 3)));
}

#[test]
fn test_has_moves_with_adjacent_pair() {
    let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
    assert!(board.has_moves());
}

#[test]
fn test_mirror_and_transpose() {
    let board = Board::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(board.mirrored().to_rows()[0], [16, 8, 4, 2]);
    let t = board.transposed().to_rows();
    assert_eq!([t[0][0], t[1][0], t[2][0], t[3][0]], [2, 4, 8, 16]);
    assert_eq!(board.mirrored().mirrored(), board);
    assert_eq!(board.transposed().transposed(), board);
}

#[test]
fn test_clear() {
    let mut board = Board::from_rows([[2; 4]; 4]);
    board.clear();
    assert_eq!(board, Board::new());
}
