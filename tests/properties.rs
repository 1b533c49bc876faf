//! Property tests for rotation, the grid-text codec and board resolution.

mod common;

use common::*;
use proptest::prelude::*;
use tableturf::cards::{rotate_grid, CardCatalog, CardId, Rotation};
use tableturf::core::space::{EMPTY, INVALID, NEUTRAL, SPECIAL, TRIVIAL};
use tableturf::core::{Grid, PlayerId};
use tableturf::rules::{get_board_state, move_board, CardPlacement};
use tableturf::stages::{parse_grid, print_grid};

fn pattern() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::sample::select(vec![EMPTY, TRIVIAL, SPECIAL]), 64)
        .prop_map(|values| Grid::from_values(8, 8, values))
}

fn board_grid() -> impl Strategy<Value = Grid> {
    let cell = prop::sample::select(vec![
        EMPTY, TRIVIAL, SPECIAL, -TRIVIAL, -SPECIAL, NEUTRAL, INVALID,
    ]);
    (1u32..12, 1u32..12).prop_flat_map(move |(w, h)| {
        prop::collection::vec(cell.clone(), (w * h) as usize)
            .prop_map(move |values| Grid::from_values(w, h, values))
    })
}

fn placement() -> impl Strategy<Value = CardPlacement> {
    (0u8..2, 1u32..=24, 0u8..4, -8i32..10, -8i32..10).prop_map(|(p, card, r, x, y)| {
        CardPlacement::new(
            PlayerId::new(p),
            CardId::new(card),
            Rotation::new(r),
            tableturf::core::Coord::new(x, y),
        )
    })
}

proptest! {
    /// Four quarter turns are the identity; two half turns likewise.
    #[test]
    fn test_rotation_cycles(grid in pattern()) {
        let mut turned = grid.clone();
        for _ in 0..4 {
            turned = rotate_grid(&turned, Rotation::new(1));
        }
        prop_assert_eq!(&turned, &grid);

        let half = rotate_grid(&rotate_grid(&grid, Rotation::new(1)), Rotation::new(1));
        prop_assert_eq!(half, rotate_grid(&grid, Rotation::new(2)));

        let inked = |g: &Grid| g.iter_non_empty().count();
        prop_assert_eq!(inked(&rotate_grid(&grid, Rotation::new(3))), inked(&grid));
    }

    /// Printing then parsing a grid gives it back.
    #[test]
    fn test_grid_text_round_trip(grid in board_grid()) {
        let text = print_grid(&grid);
        prop_assert_eq!(parse_grid(&text).unwrap(), grid);
    }

    /// Resolution never changes the playable cell set, and the counts are
    /// always a recomputation of the grid.
    #[test]
    fn test_resolution_conserves_cells(
        batches in prop::collection::vec((placement(), prop::option::of(placement())), 1..8)
    ) {
        let cards = CardCatalog::builtin().unwrap();
        let start = box_seats();
        let playable = start.grid().values().iter().filter(|&&v| v != INVALID).count();

        let mut board = start;
        for (first, second) in batches {
            let mut batch = vec![first];
            if let Some(second) = second.filter(|s| s.player != first.player) {
                batch.push(second);
            }
            board = move_board(&cards, &board, &batch);

            prop_assert_eq!(&get_board_state(board.grid().clone()), &board);

            let grid = board.grid();
            let count = board.count();
            let total = count.area[P0] as usize
                + count.area[P1] as usize
                + grid.count(NEUTRAL)
                + grid.count(EMPTY);
            prop_assert_eq!(total, playable);
            prop_assert_eq!(grid.count(INVALID), 0);
        }
    }

    /// A lone placement never lowers the tier of a cell.
    #[test]
    fn test_single_placement_never_downgrades(p in placement()) {
        let cards = CardCatalog::builtin().unwrap();
        let before = box_seats();
        let after = move_board(&cards, &before, &[p]);
        for ((_, old), (_, new)) in before.grid().iter().zip(after.grid().iter()) {
            prop_assert!(new.abs() >= old.abs());
        }
    }
}
