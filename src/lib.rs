//! Two-grid Battleships game environment with a `reset`/`step`/`render`/
//! `close` episode interface.
//!
//! The board engine places a roster of ships at random without overlap,
//! resolves shots into miss/hit/sunk outcomes with a reward per shot, and
//! reports termination once every ship is sunk. Rendering and any RL
//! framework glue consume the engine through read-only grid accessors.

mod board;
mod common;
mod config;
mod env;
mod grid;
mod logging;
mod render;
mod ship;

pub use board::{Board, WATER};
pub use common::{BoardError, CellState, EnvError, ShotOutcome};
pub use config::{ConfigError, EnvConfig, MAX_PLACEMENT_ATTEMPTS};
pub use env::{BattleshipsEnv, EnvInfo, StepResult};
pub use grid::{Grid, GridError};
pub use logging::init_logging;
pub use render::BoardRenderer;
pub use ship::{Orientation, Ship};
