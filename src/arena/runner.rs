//! Match runner and replay.
//!
//! The runner is the caller-side legality gate: every movement a
//! [`Player`] returns is checked before it reaches
//! [`Engine::move_game`], and an illegal one ends the run with
//! [`MatchError::IllegalMove`] instead of a panic.

use log::{debug, warn};

use super::record::{FinishReason, MatchRecord, Redraw};
use crate::cards::CardId;
use crate::core::error::MatchError;
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::rng::{GameRng, Shuffle};
use crate::players::Player;
use crate::rules::{Engine, GameState, PlayerMovement};
use crate::stages::StageId;

/// Final state plus the record that reproduces it.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    pub record: MatchRecord,
    pub state: GameState,
}

/// Drives complete matches between two players.
///
/// ```
/// use tableturf::arena::MatchRunner;
/// use tableturf::cards::CardId;
/// use tableturf::core::GameRng;
/// use tableturf::players::{DiscardPlayer, GreedyPlayer};
/// use tableturf::rules::Engine;
/// use tableturf::stages::StageId;
///
/// let runner = MatchRunner::new(Engine::builtin().unwrap());
/// let deck: Vec<CardId> = (1..=15).map(CardId::new).collect();
///
/// let outcome = runner
///     .run(
///         StageId::new(0),
///         [deck.clone(), deck],
///         [&mut GreedyPlayer, &mut DiscardPlayer],
///         &mut GameRng::new(1),
///     )
///     .unwrap();
/// assert_eq!(outcome.record.rounds_played(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct MatchRunner {
    engine: Engine,
}

impl MatchRunner {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Play a full match.
    ///
    /// Each deck is shuffled with `rng`, then each player may redraw while
    /// it has quota, then rounds are played until the match ends or a
    /// player concedes.
    pub fn run(
        &self,
        stage: StageId,
        decks: [Vec<CardId>; 2],
        mut seats: [&mut dyn Player; 2],
        rng: &mut GameRng,
    ) -> Result<MatchOutcome, MatchError> {
        let [mut d0, mut d1] = decks;
        rng.shuffle(&mut d0);
        rng.shuffle(&mut d1);
        let decks = PlayerPair::from_array([d0, d1]);

        let mut game = self
            .engine
            .init_game(stage, decks.as_array().clone())?;
        let names = PlayerPair::new(|p| seats[p.index()].name().to_owned());
        debug!("match start on {stage}: {} vs {}", names.as_array()[0], names.as_array()[1]);

        let mut redraws: PlayerPair<Vec<Redraw>> = PlayerPair::default();
        for player in PlayerId::all() {
            let seat = &mut seats[player.index()];
            for _ in 0..self.engine.config().redraw_quota {
                if !seat.wants_redraw(&self.engine, &game, player) {
                    break;
                }
                game = self.engine.redraw(&game, player, rng);
                debug!("{player} redraws");
                redraws[player].push(Redraw {
                    deck: game.players[player].card_order(),
                });
            }
        }

        let mut moves = Vec::new();
        let mut finish_reason = FinishReason::Normal;
        let mut winner = None;

        while !game.is_terminal() {
            if let Some(quitter) = PlayerId::all()
                .find(|&p| seats[p.index()].gives_up(&self.engine, &game, p))
            {
                debug!("{quitter} gives up at round {}", game.round);
                finish_reason = FinishReason::GiveUp;
                winner = Some(quitter.opponent());
                break;
            }

            let m0 = seats[0].choose(&self.engine, &game, PlayerId::new(0));
            let m1 = seats[1].choose(&self.engine, &game, PlayerId::new(1));
            let pair = [m0, m1];
            check_movements(&self.engine, &game, &pair)?;

            game = self.engine.move_game(&game, &pair);
            moves.push(pair);
        }

        if finish_reason == FinishReason::Normal {
            winner = self.engine.game_result(&game).and_then(|r| r.winner());
        }
        debug!(
            "match end ({finish_reason:?}): winner {winner:?}, area {:?}",
            game.board.count().area.as_array()
        );

        Ok(MatchOutcome {
            record: MatchRecord {
                stage,
                names,
                decks,
                redraws,
                moves,
                winner,
                finish_reason,
            },
            state: game,
        })
    }
}

/// Reject a movement pair the engine would refuse.
fn check_movements(
    engine: &Engine,
    game: &GameState,
    pair: &[PlayerMovement; 2],
) -> Result<(), MatchError> {
    for (player, movement) in PlayerId::all().zip(pair) {
        if movement.player != player || !engine.is_game_move_valid(game, movement) {
            warn!("rejected movement from {player} in round {}: {movement}", game.round);
            return Err(MatchError::IllegalMove {
                round: game.round,
                movement: *movement,
            });
        }
    }
    Ok(())
}

/// Rebuild the final state of a recorded match.
///
/// Deterministic: replaying the record of a live match yields that match's
/// final state.
pub fn replay(engine: &Engine, record: &MatchRecord) -> Result<GameState, MatchError> {
    let mut game = engine.init_game(record.stage, record.decks.as_array().clone())?;

    let quota = engine.config().redraw_quota;
    for (player, redraws) in record.redraws.iter() {
        if redraws.len() > quota as usize {
            return Err(MatchError::RedrawQuota {
                player,
                found: redraws.len(),
                quota,
            });
        }
        for redraw in redraws {
            if !game.players[player].holds_exactly(&redraw.deck) {
                return Err(MatchError::BadRedraw { player });
            }
            game = engine.redeal(&game, player, &redraw.deck);
        }
    }

    for pair in &record.moves {
        if game.is_terminal() {
            return Err(MatchError::MatchOver);
        }
        check_movements(engine, &game, pair)?;
        game = engine.move_game(&game, pair);
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{DiscardPlayer, RandomPlayer};

    fn deck() -> Vec<CardId> {
        (1..=15).map(CardId::new).collect()
    }

    /// Concedes once the round counter reaches `at`.
    struct Quitter {
        at: u32,
    }

    impl Player for Quitter {
        fn name(&self) -> &str {
            "Quitter"
        }

        fn choose(&mut self, _: &Engine, _: &GameState, player: PlayerId) -> PlayerMovement {
            PlayerMovement::discard(player, 0)
        }

        fn gives_up(&mut self, _: &Engine, game: &GameState, _: PlayerId) -> bool {
            game.round == self.at
        }
    }

    /// Always submits an out-of-range hand slot.
    struct Cheater;

    impl Player for Cheater {
        fn name(&self) -> &str {
            "Cheater"
        }

        fn choose(&mut self, _: &Engine, _: &GameState, player: PlayerId) -> PlayerMovement {
            PlayerMovement::discard(player, 7)
        }
    }

    #[test]
    fn test_discard_match_is_a_draw() {
        let runner = MatchRunner::new(Engine::builtin().unwrap());
        let outcome = runner
            .run(
                StageId::new(0),
                [deck(), deck()],
                [&mut DiscardPlayer, &mut DiscardPlayer],
                &mut GameRng::new(9),
            )
            .unwrap();

        assert_eq!(outcome.record.finish_reason, FinishReason::Normal);
        assert_eq!(outcome.record.winner, None);
        assert_eq!(outcome.record.rounds_played(), 12);
        assert_eq!(outcome.state.round, 0);
    }

    #[test]
    fn test_give_up_awards_opponent() {
        let runner = MatchRunner::new(Engine::builtin().unwrap());
        let outcome = runner
            .run(
                StageId::new(0),
                [deck(), deck()],
                [&mut DiscardPlayer, &mut Quitter { at: 10 }],
                &mut GameRng::new(9),
            )
            .unwrap();

        assert_eq!(outcome.record.finish_reason, FinishReason::GiveUp);
        assert_eq!(outcome.record.winner, Some(PlayerId::new(0)));
        assert_eq!(outcome.record.rounds_played(), 2);
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let runner = MatchRunner::new(Engine::builtin().unwrap());
        let result = runner.run(
            StageId::new(0),
            [deck(), deck()],
            [&mut DiscardPlayer, &mut Cheater],
            &mut GameRng::new(9),
        );

        assert!(matches!(
            result,
            Err(MatchError::IllegalMove { round: 12, movement }) if movement.hand == 7
        ));
    }

    #[test]
    fn test_unknown_stage_is_an_error() {
        let runner = MatchRunner::new(Engine::builtin().unwrap());
        let result = runner.run(
            StageId::new(77),
            [deck(), deck()],
            [&mut DiscardPlayer, &mut DiscardPlayer],
            &mut GameRng::new(9),
        );
        assert!(matches!(result, Err(MatchError::Engine(_))));
    }

    #[test]
    fn test_redraw_recorded_and_replayed() {
        let engine = Engine::builtin().unwrap();
        let runner = MatchRunner::new(engine.clone());
        let mut a = RandomPlayer::new(1).with_redraw_chance(1.0);
        let mut b = RandomPlayer::new(2);

        let outcome = runner
            .run(StageId::new(5), [deck(), deck()], [&mut a, &mut b], &mut GameRng::new(4))
            .unwrap();

        assert_eq!(outcome.record.redraws[PlayerId::new(0)].len(), 1);
        assert!(outcome.record.redraws[PlayerId::new(1)].is_empty());
        assert_eq!(replay(&engine, &outcome.record).unwrap(), outcome.state);
    }

    #[test]
    fn test_replay_rejects_tampered_redraw() {
        let engine = Engine::builtin().unwrap();
        let mut record = MatchRunner::new(engine.clone())
            .run(
                StageId::new(0),
                [deck(), deck()],
                [&mut DiscardPlayer, &mut DiscardPlayer],
                &mut GameRng::new(3),
            )
            .unwrap()
            .record;
        record.redraws[PlayerId::new(1)].push(Redraw {
            deck: vec![CardId::new(1)],
        });

        assert_eq!(
            replay(&engine, &record),
            Err(MatchError::BadRedraw {
                player: PlayerId::new(1)
            })
        );
    }

    #[test]
    fn test_replay_rejects_extra_rounds() {
        let engine = Engine::builtin().unwrap();
        let mut record = MatchRunner::new(engine.clone())
            .run(
                StageId::new(0),
                [deck(), deck()],
                [&mut DiscardPlayer, &mut DiscardPlayer],
                &mut GameRng::new(3),
            )
            .unwrap()
            .record;
        let last = record.moves[0];
        record.moves.push(last);

        assert_eq!(replay(&engine, &record), Err(MatchError::MatchOver));
    }
}
