//! Automated players.
//!
//! Players are trait-based so the match runner can pit any two against each
//! other:
//! - `DiscardPlayer`: always discards (baseline)
//! - `RandomPlayer`: uniform over the legal moves
//! - `GreedyPlayer`: one-ply area maximizer

use crate::core::rng::GameRng;
use crate::core::player::PlayerId;
use crate::rules::{move_board, CardPlacement, Engine, GameState, PlayerMovement};

use super::enumerate::enumerate_game_moves;

/// A seat at the table.
///
/// The runner asks for one movement per round. Returned movements must be
/// legal; the runner rejects anything else.
pub trait Player: Send {
    /// Display name for logs and records.
    fn name(&self) -> &str;

    /// Pick this round's movement.
    fn choose(&mut self, engine: &Engine, game: &GameState, player: PlayerId) -> PlayerMovement;

    /// Whether to redraw the opening hand. Asked before the first round
    /// while the player still has redraw quota.
    fn wants_redraw(&mut self, _engine: &Engine, _game: &GameState, _player: PlayerId) -> bool {
        false
    }

    /// Whether to concede before this round.
    fn gives_up(&mut self, _engine: &Engine, _game: &GameState, _player: PlayerId) -> bool {
        false
    }
}

// =============================================================================
// Discard
// =============================================================================

/// Discards hand slot 0 every round.
#[derive(Clone, Debug, Default)]
pub struct DiscardPlayer;

impl Player for DiscardPlayer {
    fn name(&self) -> &str {
        "Discard"
    }

    fn choose(&mut self, _engine: &Engine, _game: &GameState, player: PlayerId) -> PlayerMovement {
        PlayerMovement::discard(player, 0)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among all legal movements, discards included.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
    redraw_chance: f64,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Use an existing stream, typically a fork of the match RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            redraw_chance: 0.0,
        }
    }

    /// Probability of asking for a redraw (builder pattern).
    #[must_use]
    pub fn with_redraw_chance(mut self, chance: f64) -> Self {
        self.redraw_chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose(&mut self, engine: &Engine, game: &GameState, player: PlayerId) -> PlayerMovement {
        let moves = enumerate_game_moves(engine, game, player);
        // Never empty: every hand slot can be discarded.
        let i = self.rng.gen_range_usize(0..moves.len());
        moves[i]
    }

    fn wants_redraw(&mut self, _engine: &Engine, _game: &GameState, _player: PlayerId) -> bool {
        self.rng.gen_bool(self.redraw_chance)
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Plays the placement that maximizes own area minus opponent area,
/// looking only at its own card (the opponent's move is unknown).
///
/// Ties go to the earliest move in enumeration order. Discards hand slot 0
/// only when nothing can be placed.
#[derive(Clone, Debug, Default)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    fn score(engine: &Engine, game: &GameState, movement: &PlayerMovement) -> Option<i64> {
        let params = movement.params?;
        let card = engine.hand_card(game, movement.player, movement.hand)?;
        let placement =
            CardPlacement::new(movement.player, card.id, params.rotation, params.position);
        let board = move_board(engine.cards(), &game.board, &[placement]);
        let area = board.count().area;
        let me = movement.player;
        Some(i64::from(area[me]) - i64::from(area[me.opponent()]))
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose(&mut self, engine: &Engine, game: &GameState, player: PlayerId) -> PlayerMovement {
        let mut best: Option<(i64, PlayerMovement)> = None;
        for movement in enumerate_game_moves(engine, game, player) {
            let Some(score) = Self::score(engine, game, &movement) else {
                continue;
            };
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, movement));
            }
        }
        best.map_or_else(|| PlayerMovement::discard(player, 0), |(_, m)| m)
    }
}
