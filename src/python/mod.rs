//! Python bindings for the tableturf rules engine.
//!
//! Exposes the engine to Python bots and analysis scripts.
//!
//! # Quick Start
//!
//! ```python
//! import tableturf as tt
//!
//! engine = tt.Engine()
//! deck = list(range(1, 16))
//! game = engine.new_game(0, deck, deck, seed=42)
//!
//! while not game.is_terminal():
//!     m0 = game.legal_moves(0)[0]
//!     m1 = game.legal_moves(1)[-1]
//!     game.step(m0, m1)
//!
//! print(game.board_text(), game.winner())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// tableturf: territory-painting card game rules.
#[pymodule]
fn tableturf(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMovement>()?;
    m.add_class::<PyEngine>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
