//! Shared vocabulary: cell states, shot outcomes and error types.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::grid::GridError;

/// Per-cell shot state on a board.
///
/// The numeric values are the observation encoding consumed by agents:
/// untried cells read 0, misses -1, hits 1 and sunk cells 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Untried,
    Miss,
    Hit,
    Sunk,
}

impl CellState {
    /// Observation value for this state.
    pub const fn value(self) -> i8 {
        match self {
            CellState::Untried => 0,
            CellState::Miss => -1,
            CellState::Hit => 1,
            CellState::Sunk => 2,
        }
    }

    /// Returns `true` for `Hit` and `Sunk` cells.
    pub const fn is_struck(self) -> bool {
        matches!(self, CellState::Hit | CellState::Sunk)
    }
}

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot repeated on a cell already known to be hit or sunk.
    Repeat,
    /// First hit on a ship segment; the ship still floats.
    Hit,
    /// Hit completed a ship, carrying its id.
    Sunk(usize),
}

impl ShotOutcome {
    /// Reward signal for this outcome: wasted shots cost -1, hits are free.
    pub const fn reward(self) -> f32 {
        match self {
            ShotOutcome::Miss | ShotOutcome::Repeat => -1.0,
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => 0.0,
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Underlying grid error (out-of-bounds cell access).
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Ship id is 0 (the water placeholder) or beyond the roster.
    #[error("ship id {ship_id} is not in the roster")]
    UnknownShip { ship_id: usize },
    /// Attempted to place a ship that is already on the board.
    #[error("ship {ship_id} is already placed")]
    ShipAlreadyPlaced { ship_id: usize },
    /// Ship run does not fit within the grid bounds.
    #[error("ship {ship_id} does not fit on the board at the requested position")]
    ShipOutOfBounds { ship_id: usize },
    /// Ship run crosses a cell already occupied by another ship.
    #[error("ship {ship_id} overlaps a previously placed ship")]
    ShipOverlaps { ship_id: usize },
    /// Random placement gave up after exhausting its attempt budget.
    #[error("unable to place ship {ship_id} after {attempts} attempts")]
    PlacementExhausted { ship_id: usize, attempts: usize },
}

/// Errors surfaced by the environment layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// Shot coordinate outside the grid; nothing is mutated.
    #[error("invalid action: ({x}, {y}) is outside the {width}x{height} grid")]
    InvalidAction {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Board-level failure (placement, internal grid access).
    #[error(transparent)]
    Board(#[from] BoardError),
    /// Configuration rejected at construction.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
