//! Round engine: match bootstrap, move legality, round resolution.
//!
//! The engine owns no match state. It holds the shared catalogs and the
//! rules configuration, and every operation maps an input [`GameState`] to
//! a new one. The same engine can drive any number of concurrent matches.

use std::sync::Arc;

use log::trace;
use smallvec::smallvec;

use super::board::{self, footprint, footprints_overlap, move_board, BoardState};
use super::movement::{Action, CardPlacement, PlayerMovement};
use super::state::{Batch, GameResult, GameState, PlayerState};
use crate::cards::{Card, CardCatalog, CardId};
use crate::core::config::{RulesConfig, HAND_SIZE};
use crate::core::error::{CatalogError, EngineError};
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::rng::Shuffle;
use crate::stages::{StageCatalog, StageId};

/// Rules engine bound to a card catalog and a stage catalog.
///
/// ## Example
///
/// ```
/// use tableturf::cards::CardId;
/// use tableturf::rules::{Engine, PlayerMovement};
/// use tableturf::core::PlayerId;
/// use tableturf::stages::StageId;
///
/// let engine = Engine::builtin().unwrap();
/// let deck: Vec<CardId> = (1..=15).map(CardId::new).collect();
/// let game = engine.init_game(StageId::new(0), [deck.clone(), deck]).unwrap();
///
/// let next = engine.move_game(&game, &[
///     PlayerMovement::discard(PlayerId::new(0), 0),
///     PlayerMovement::discard(PlayerId::new(1), 0),
/// ]);
/// assert_eq!(next.round, 11);
/// assert_eq!(next.players[PlayerId::new(0)].special, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    cards: Arc<CardCatalog>,
    stages: Arc<StageCatalog>,
    config: RulesConfig,
}

impl Engine {
    /// Create an engine with the default rules.
    #[must_use]
    pub fn new(cards: Arc<CardCatalog>, stages: Arc<StageCatalog>) -> Self {
        Self {
            cards,
            stages,
            config: RulesConfig::default(),
        }
    }

    /// Engine over the bundled card and stage sets.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Arc::new(CardCatalog::builtin()?),
            Arc::new(StageCatalog::builtin()?),
        ))
    }

    /// Replace the rules configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn cards(&self) -> &CardCatalog {
        &self.cards
    }

    #[must_use]
    pub fn stages(&self) -> &StageCatalog {
        &self.stages
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Start a match on `stage`.
    ///
    /// Each player's first four cards form the hand and the rest the deck,
    /// in the given order. Shuffling is the caller's job.
    pub fn init_game(
        &self,
        stage: StageId,
        decks: [Vec<CardId>; 2],
    ) -> Result<GameState, EngineError> {
        let stage = self
            .stages
            .get(stage)
            .ok_or(EngineError::UnknownStage(stage))?;

        for (i, deck) in decks.iter().enumerate() {
            let player = PlayerId::new(i as u8);
            if deck.len() < HAND_SIZE {
                return Err(EngineError::DeckTooSmall {
                    player,
                    found: deck.len(),
                    needed: HAND_SIZE,
                });
            }
            if let Some(&unknown) = deck.iter().find(|&&id| !self.cards.contains(id)) {
                return Err(EngineError::UnknownCard(unknown));
            }
        }

        let [d0, d1] = decks;
        Ok(GameState {
            stage: stage.id,
            round: self.config.rounds,
            board: board::get_board_state(stage.board.clone()),
            players: PlayerPair::from_array([PlayerState::deal(d0), PlayerState::deal(d1)]),
            prev_moves: Vec::new(),
        })
    }

    /// Card held by `player` in `slot`, resolved through the catalog.
    #[must_use]
    pub fn hand_card(&self, game: &GameState, player: PlayerId, slot: usize) -> Option<&Card> {
        game.players[player]
            .card_in_hand(slot)
            .and_then(|id| self.cards.get(id))
    }

    /// Whether `movement` is legal for its player in `game`.
    ///
    /// Discarding any hand slot is always legal. Placing requires
    /// placement parameters, a card in the slot, enough special meter for a
    /// special attack, and a legal board placement.
    #[must_use]
    pub fn is_game_move_valid(&self, game: &GameState, movement: &PlayerMovement) -> bool {
        if movement.hand >= HAND_SIZE {
            return false;
        }
        if movement.action == Action::Discard {
            return true;
        }
        let Some(params) = movement.params else {
            return false;
        };
        let Some(card) = self.hand_card(game, movement.player, movement.hand) else {
            return false;
        };
        let special = movement.action == Action::Special;
        if special && game.players[movement.player].special < card.special_cost {
            return false;
        }
        board::is_board_move_valid(
            &self.cards,
            &game.board,
            &CardPlacement::new(movement.player, card.id, params.rotation, params.position),
            special,
        )
    }

    /// Resolve one round.
    ///
    /// Both movements are applied simultaneously. When both players place
    /// cards whose footprints overlap and whose areas differ, the larger
    /// card is painted first and the smaller one second, so the smaller
    /// card wins the contested cells its tier allows. Otherwise both are
    /// painted in one batch and equal-tier collisions turn neutral.
    ///
    /// Only a slot whose card was played is refilled; a discarded card stays
    /// in hand.
    ///
    /// Panics if the match is over, if `movements[i]` does not belong to
    /// player `i`, or if either movement is illegal.
    #[must_use]
    pub fn move_game(&self, game: &GameState, movements: &[PlayerMovement; 2]) -> GameState {
        assert!(!game.is_terminal(), "match is over");
        for (player, movement) in PlayerId::all().zip(movements) {
            assert_eq!(movement.player, player, "movement order must follow seats");
            assert!(
                self.is_game_move_valid(game, movement),
                "illegal movement: {movement}"
            );
        }

        let mut earn: PlayerPair<i64> = PlayerPair::default();
        let mut placed: PlayerPair<Option<(CardPlacement, &Card)>> = PlayerPair::default();
        for movement in movements {
            let player = movement.player;
            let entry = match (movement.action, movement.params) {
                (Action::Discard, _) | (_, None) => {
                    earn[player] += 1;
                    continue;
                }
                (action, Some(params)) => {
                    let card = self
                        .hand_card(game, player, movement.hand)
                        .unwrap_or_else(|| panic!("{player} has no card in slot {}", movement.hand));
                    if action == Action::Special {
                        earn[player] -= i64::from(card.special_cost);
                    }
                    (
                        CardPlacement::new(player, card.id, params.rotation, params.position),
                        card,
                    )
                }
            };
            placed[player] = Some(entry);
        }

        let batches = Self::schedule(placed.into_array());
        let mut board: BoardState = game.board.clone();
        for batch in &batches {
            board = move_board(&self.cards, &board, batch);
        }

        let pre = game.board.count();
        let post = board.count();
        for player in PlayerId::all() {
            earn[player] += i64::from(post.special[player]) - i64::from(pre.special[player]);
        }

        trace!(
            "round {} resolved: {} batch(es), earned {:?}",
            game.round,
            batches.len(),
            earn.as_array()
        );

        let players = game.players.map(|player, state| {
            let movement = &movements[player.index()];
            let mut next = state.clone();
            if !movement.is_discard() {
                next.hand[movement.hand] = next.deck.pop_front();
            }
            next.area = post.area[player];
            let special = i64::from(state.special) + earn[player];
            next.special = u32::try_from(special)
                .unwrap_or_else(|_| panic!("{player} special meter went negative ({special})"));
            next
        });

        GameState {
            stage: game.stage,
            round: game.round - 1,
            board,
            players,
            prev_moves: batches,
        }
    }

    /// Split the round's placements into the batches painted in order.
    fn schedule(placed: [Option<(CardPlacement, &Card)>; 2]) -> Vec<Batch> {
        match placed {
            [Some((p0, c0)), Some((p1, c1))] => {
                let overlap = footprints_overlap(
                    &footprint(c0, p0.rotation, p0.position),
                    &footprint(c1, p1.rotation, p1.position),
                );
                if !overlap || c0.area == c1.area {
                    vec![smallvec![p0, p1]]
                } else if c0.area > c1.area {
                    vec![smallvec![p0], smallvec![p1]]
                } else {
                    vec![smallvec![p1], smallvec![p0]]
                }
            }
            [Some((p, _)), None] | [None, Some((p, _))] => vec![smallvec![p]],
            [None, None] => Vec::new(),
        }
    }

    /// Reshuffle a player's hand and deck together and deal a new hand.
    ///
    /// Only allowed before the first round. The redraw quota is tracked by
    /// the caller.
    #[must_use]
    pub fn redraw(
        &self,
        game: &GameState,
        player: PlayerId,
        shuffle: &mut impl Shuffle,
    ) -> GameState {
        let mut pool = game.players[player].card_order();
        shuffle.shuffle(&mut pool);
        self.redeal(game, player, &pool)
    }

    /// Deal `order` as a player's new hand and deck.
    ///
    /// `order` must be a permutation of the player's current hand and deck
    /// (this is how a recorded redraw is replayed). Panics otherwise, or
    /// after the first round.
    #[must_use]
    pub fn redeal(&self, game: &GameState, player: PlayerId, order: &[CardId]) -> GameState {
        assert_eq!(
            game.round, self.config.rounds,
            "redraw is only allowed before the first round"
        );
        let state = &game.players[player];
        assert!(
            state.holds_exactly(order),
            "redraw must reuse {player}'s own cards"
        );

        let mut next = game.clone();
        let area = state.area;
        let special = state.special;
        next.players[player] = PlayerState {
            area,
            special,
            ..PlayerState::deal(order.iter().copied())
        };
        next
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_terminal(&self, game: &GameState) -> bool {
        game.is_terminal()
    }

    /// Final result: the player with more board area wins, equal area is a
    /// draw. `None` while the match is still running.
    #[must_use]
    pub fn game_result(&self, game: &GameState) -> Option<GameResult> {
        if !game.is_terminal() {
            return None;
        }
        let area = game.board.count().area;
        let (a, b) = (area[PlayerId::new(0)], area[PlayerId::new(1)]);
        Some(match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::new(0)),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::new(1)),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
