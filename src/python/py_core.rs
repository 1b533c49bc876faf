//! Movement bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Rotation;
use crate::core::{Coord, PlayerId};
use crate::rules::{Action, PlacementParams, PlayerMovement};

pub(crate) fn player_id(id: u8) -> PyResult<PlayerId> {
    PlayerId::try_from(id).map_err(PyValueError::new_err)
}

/// Python wrapper for PlayerMovement.
#[pyclass(name = "Movement")]
#[derive(Clone, Debug)]
pub struct PyMovement(pub PlayerMovement);

#[pymethods]
impl PyMovement {
    /// Create a movement.
    ///
    /// # Arguments
    /// - player: 0 or 1
    /// - action: "trivial", "special" or "discard"
    /// - hand: hand slot 0-3
    /// - rotation, x, y: placement, ignored for discards
    #[new]
    #[pyo3(signature = (player, action, hand, rotation = 0, x = 0, y = 0))]
    fn new(player: u8, action: &str, hand: usize, rotation: u8, x: i32, y: i32) -> PyResult<Self> {
        let player = player_id(player)?;
        let action = match action {
            "trivial" => Action::Trivial,
            "special" => Action::Special,
            "discard" => return Ok(Self(PlayerMovement::discard(player, hand))),
            other => return Err(PyValueError::new_err(format!("unknown action {other:?}"))),
        };
        let rotation = Rotation::try_from(rotation).map_err(PyValueError::new_err)?;
        Ok(Self(PlayerMovement {
            player,
            action,
            hand,
            params: Some(PlacementParams {
                rotation,
                position: Coord::new(x, y),
            }),
        }))
    }

    #[getter]
    fn player(&self) -> u8 {
        self.0.player.into()
    }

    #[getter]
    fn action(&self) -> &'static str {
        match self.0.action {
            Action::Trivial => "trivial",
            Action::Special => "special",
            Action::Discard => "discard",
        }
    }

    #[getter]
    fn hand(&self) -> usize {
        self.0.hand
    }

    /// `(rotation, x, y)`, or None for a discard.
    #[getter]
    fn params(&self) -> Option<(u8, i32, i32)> {
        self.0
            .params
            .map(|p| (p.rotation.steps(), p.position.x, p.position.y))
    }

    fn __repr__(&self) -> String {
        format!("Movement({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = rustc_hash::FxHasher::default();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
