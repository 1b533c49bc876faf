//! Engine and game bindings for Python.

use std::sync::Arc;

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardCatalog, CardId};
use crate::core::{GameRng, Shuffle};
use crate::players::enumerate_game_moves;
use crate::rules::{is_deck_valid, Engine, GameState};
use crate::stages::{print_grid, StageCatalog, StageId};

use super::py_core::{player_id, PyMovement};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for Engine.
///
/// Holds the card and stage catalogs shared by every game it creates.
#[pyclass(name = "Engine")]
#[derive(Clone)]
pub struct PyEngine {
    engine: Engine,
}

#[pymethods]
impl PyEngine {
    /// Create an engine over the bundled stages.
    ///
    /// # Arguments
    /// - cards_json: JSON array of card records; the bundled set if omitted
    #[new]
    #[pyo3(signature = (cards_json = None))]
    fn new(cards_json: Option<&str>) -> PyResult<Self> {
        let cards = match cards_json {
            Some(json) => CardCatalog::from_json(json),
            None => CardCatalog::builtin(),
        }
        .map_err(value_error)?;
        let stages = StageCatalog::builtin().map_err(value_error)?;
        Ok(Self {
            engine: Engine::new(Arc::new(cards), Arc::new(stages)),
        })
    }

    /// Ids of all known stages, ascending.
    fn stage_ids(&self) -> Vec<u32> {
        self.engine.stages().stages().iter().map(|s| s.id.raw()).collect()
    }

    /// Ids of all known cards, ascending.
    fn card_ids(&self) -> Vec<u32> {
        self.engine.cards().cards().iter().map(|c| c.id.raw()).collect()
    }

    fn is_deck_valid(&self, deck: Vec<u32>) -> bool {
        let deck: Vec<CardId> = deck.into_iter().map(CardId::new).collect();
        is_deck_valid(self.engine.cards(), &deck, self.engine.config().deck_size)
    }

    /// Start a game. Decks are shuffled first when a seed is given.
    #[pyo3(signature = (stage, deck0, deck1, seed = None))]
    fn new_game(
        &self,
        stage: u32,
        deck0: Vec<u32>,
        deck1: Vec<u32>,
        seed: Option<u64>,
    ) -> PyResult<PyGame> {
        let mut decks = [deck0, deck1].map(|d| d.into_iter().map(CardId::new).collect::<Vec<_>>());
        if let Some(seed) = seed {
            let mut rng = GameRng::new(seed);
            for deck in &mut decks {
                rng.shuffle(deck);
            }
        }
        let state = self
            .engine
            .init_game(StageId::new(stage), decks)
            .map_err(value_error)?;
        Ok(PyGame {
            engine: self.engine.clone(),
            state,
        })
    }
}

/// Python wrapper for a running game.
#[pyclass(name = "Game")]
#[derive(Clone)]
pub struct PyGame {
    engine: Engine,
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Every legal movement for a player, discards last.
    fn legal_moves(&self, player: u8) -> PyResult<Vec<PyMovement>> {
        let player = player_id(player)?;
        Ok(enumerate_game_moves(&self.engine, &self.state, player)
            .into_iter()
            .map(PyMovement)
            .collect())
    }

    fn is_move_valid(&self, movement: &PyMovement) -> bool {
        self.engine.is_game_move_valid(&self.state, &movement.0)
    }

    /// Resolve one round. Raises ValueError on an illegal movement or when
    /// the game is already over.
    fn step(&mut self, move0: &PyMovement, move1: &PyMovement) -> PyResult<()> {
        if self.state.is_terminal() {
            return Err(PyValueError::new_err("game is over"));
        }
        for (seat, m) in [&move0.0, &move1.0].into_iter().enumerate() {
            if m.player.index() != seat || !self.engine.is_game_move_valid(&self.state, m) {
                return Err(PyValueError::new_err(format!("illegal movement: {m}")));
            }
        }
        self.state = self.engine.move_game(&self.state, &[move0.0, move1.0]);
        Ok(())
    }

    /// Board in grid-text form.
    fn board_text(&self) -> String {
        print_grid(self.state.board.grid())
    }

    /// Board as an int8 array of shape (height, width).
    fn board_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let grid = self.state.board.grid();
        let (w, h) = grid.size();
        PyArray1::from_vec_bound(py, grid.values().to_vec())
            .reshape([h as usize, w as usize])
            .map_err(value_error)
    }

    #[getter]
    fn round(&self) -> u32 {
        self.state.round
    }

    fn area(&self, player: u8) -> PyResult<u32> {
        Ok(self.state.players[player_id(player)?].area)
    }

    fn special(&self, player: u8) -> PyResult<u32> {
        Ok(self.state.players[player_id(player)?].special)
    }

    /// Hand card ids by slot; None for an empty slot.
    fn hand(&self, player: u8) -> PyResult<Vec<Option<u32>>> {
        let state = &self.state.players[player_id(player)?];
        Ok(state.hand.iter().map(|c| c.map(CardId::raw)).collect())
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Winning player, or None for a draw or an unfinished game.
    fn winner(&self) -> Option<u8> {
        self.engine
            .game_result(&self.state)
            .and_then(|r| r.winner())
            .map(u8::from)
    }

    /// Copy the game for lookahead.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(stage={}, round={})",
            self.state.stage.raw(),
            self.state.round
        )
    }
}
