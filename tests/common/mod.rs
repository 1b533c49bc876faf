//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use tableturf::cards::{CardCatalog, CardId, Rotation};
use tableturf::core::{Coord, PlayerId};
use tableturf::rules::{get_board_state, BoardState, CardPlacement, Engine};
use tableturf::stages::{parse_grid, print_grid, Stage, StageCatalog, StageId};

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);

/// Builtin card ids used by the fixtures.
pub const INK_DOT: CardId = CardId::new(1);
pub const TWIN_DROP: CardId = CardId::new(2);
pub const SHORT_LINE: CardId = CardId::new(4);

pub const BOX_SEATS: StageId = StageId::new(0);

pub fn builtin() -> Engine {
    Engine::builtin().unwrap()
}

/// Engine over the builtin cards and a single stage with id 100.
pub fn engine_on(layout: &str) -> Engine {
    let stage = Stage::new(StageId::new(100), "Fixture", parse_grid(layout).unwrap());
    Engine::new(
        Arc::new(CardCatalog::builtin().unwrap()),
        Arc::new(StageCatalog::from_stages([stage]).unwrap()),
    )
}

pub fn board(text: &str) -> BoardState {
    get_board_state(parse_grid(text).unwrap())
}

pub fn box_seats() -> BoardState {
    let engine = builtin();
    let stage = engine.stages().get(BOX_SEATS).unwrap();
    get_board_state(stage.board.clone())
}

pub fn place(player: PlayerId, card: CardId, rotation: u8, x: i32, y: i32) -> CardPlacement {
    CardPlacement::new(player, card, Rotation::new(rotation), Coord::new(x, y))
}

/// Compare boards through their text form so failures print readable grids.
pub fn assert_board(actual: &BoardState, expected: &str) {
    let expected = print_grid(&parse_grid(expected).unwrap());
    assert_eq!(print_grid(actual.grid()), expected);
}

/// Builtin cards 1..=15, in order.
pub fn starter_deck() -> Vec<CardId> {
    (1..=15).map(CardId::new).collect()
}
