//! Brute-force move generation.
//!
//! Every rotation is tried at every position where the card's 8×8 box can
//! still touch the board. The result is the complete legal move set; nothing
//! is pruned or deduplicated (symmetric cards yield repeated footprints under
//! different rotations).

use crate::cards::{rotate, CardId, Rotation};
use crate::core::config::{CARD_SIZE, HAND_SIZE};
use crate::core::grid::Coord;
use crate::core::player::PlayerId;
use crate::rules::board::is_pattern_move_valid;
use crate::rules::{Action, Engine, GameState, PlacementParams, PlayerMovement};

/// All legal placements of `card` for `player`.
///
/// Ordered by rotation, then row, then column. Unknown cards have none.
#[must_use]
pub fn enumerate_board_moves(
    engine: &Engine,
    game: &GameState,
    player: PlayerId,
    card: CardId,
    special: bool,
) -> Vec<PlacementParams> {
    let Some(card) = engine.cards().get(card) else {
        return Vec::new();
    };
    let board = game.board.grid();
    let pad = CARD_SIZE as i32;
    let (w, h) = (board.width() as i32, board.height() as i32);

    let mut moves = Vec::new();
    for rotation in Rotation::ALL {
        let pattern = rotate(card, rotation);
        for y in -pad..h + pad {
            for x in -pad..w + pad {
                let position = Coord::new(x, y);
                if is_pattern_move_valid(board, player, &pattern, position, special) {
                    moves.push(PlacementParams { rotation, position });
                }
            }
        }
    }
    moves
}

/// Every legal movement for `player`.
///
/// For each occupied hand slot: special placements when the meter affords
/// the card, then trivial placements. The discard of every hand slot comes
/// last, so the list is never empty.
#[must_use]
pub fn enumerate_game_moves(engine: &Engine, game: &GameState, player: PlayerId) -> Vec<PlayerMovement> {
    let state = game.player(player);
    let mut moves = Vec::new();

    for hand in 0..HAND_SIZE {
        let Some(card) = engine.hand_card(game, player, hand) else {
            continue;
        };
        let affordable = state.special >= card.special_cost;
        for (action, special) in [(Action::Special, true), (Action::Trivial, false)] {
            if special && !affordable {
                continue;
            }
            moves.extend(
                enumerate_board_moves(engine, game, player, card.id, special)
                    .into_iter()
                    .map(|params| PlayerMovement {
                        player,
                        action,
                        hand,
                        params: Some(params),
                    }),
            );
        }
    }

    moves.extend((0..HAND_SIZE).map(|hand| PlayerMovement::discard(player, hand)));
    moves
}
