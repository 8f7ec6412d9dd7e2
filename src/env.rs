//! The Battleships environment: episode lifecycle around two board pairs.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::{CellState, EnvError};
use crate::config::{EnvConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::Grid;
use crate::render::BoardRenderer;

/// Auxiliary step information.
///
/// Always empty in this environment; the type exists so the step surface
/// matches the usual `(observation, reward, done, info)` contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvInfo {
    entries: Vec<(&'static str, f32)>,
}

impl EnvInfo {
    /// Create empty info.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no entries are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Opponent hit-state grid after the shot.
    pub observation: Grid<CellState>,
    /// Reward for the shot: -1 for misses and wasted repeats, 0 for hits.
    pub reward: f32,
    /// `true` once every opponent ship is sunk.
    pub done: bool,
    /// Always-empty auxiliary mapping.
    pub info: EnvInfo,
}

/// Single-episode Battleships environment.
///
/// Holds one board pair: the agent's own fleet (never fired upon here) and
/// the opponent fleet that every [`step`](Self::step) shot targets. Each env
/// value owns its episode state outright; construct one per episode consumer
/// rather than sharing a process-wide instance.
#[derive(Debug)]
pub struct BattleshipsEnv {
    config: EnvConfig,
    rng: SmallRng,
    own: Board,
    opponent: Board,
    done: bool,
    renderer: Option<BoardRenderer>,
}

impl BattleshipsEnv {
    /// Create an environment with the default 10×10 grid and classic roster.
    pub fn new() -> Result<Self, EnvError> {
        Self::with_config(EnvConfig::default())
    }

    /// Create an environment from `config`, validating it and placing the
    /// first episode's ships.
    pub fn with_config(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let (width, height) = config.grid_size;
        let mut env = BattleshipsEnv {
            own: Board::new(width, height, &config.ship_sizes),
            opponent: Board::new(width, height, &config.ship_sizes),
            config,
            rng,
            done: false,
            renderer: None,
        };
        env.reset()?;
        Ok(env)
    }

    /// Start a fresh episode: rebuild both boards with new random placements
    /// and return the all-untried opponent hit grid.
    pub fn reset(&mut self) -> Result<Grid<CellState>, EnvError> {
        let (width, height) = self.config.grid_size;
        let mut own = Board::new(width, height, &self.config.ship_sizes);
        let mut opponent = Board::new(width, height, &self.config.ship_sizes);
        own.place_ships_random(&mut self.rng, MAX_PLACEMENT_ATTEMPTS)?;
        opponent.place_ships_random(&mut self.rng, MAX_PLACEMENT_ATTEMPTS)?;
        self.own = own;
        self.opponent = opponent;
        self.done = false;
        log::debug!("episode reset on a {}x{} grid", width, height);
        Ok(self.opponent.hits().clone())
    }

    /// Fire at `action = (x, y)` on the opponent board.
    ///
    /// Fails fast with `InvalidAction` on out-of-bounds coordinates, leaving
    /// all state untouched. Shots after `done` are not rejected; callers are
    /// expected to stop.
    pub fn step(&mut self, action: (usize, usize)) -> Result<StepResult, EnvError> {
        let (x, y) = action;
        if !self.opponent.in_bounds(x, y) {
            return Err(EnvError::InvalidAction {
                x,
                y,
                width: self.opponent.width(),
                height: self.opponent.height(),
            });
        }
        let outcome = self.opponent.resolve_shot(x, y)?;
        let done = self.opponent.all_sunk();
        if done && !self.done {
            log::debug!("all opponent ships sunk, episode done");
        }
        self.done = done;
        Ok(StepResult {
            observation: self.opponent.hits().clone(),
            reward: outcome.reward(),
            done,
            info: EnvInfo::new(),
        })
    }

    /// Current observation: the opponent hit-state grid. Idempotent.
    pub fn observe(&self) -> &Grid<CellState> {
        self.opponent.hits()
    }

    /// Returns `true` once the episode has terminated.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The agent's own board (read-only, for rendering).
    pub fn own_board(&self) -> &Board {
        &self.own
    }

    /// The opponent board targeted by shots (read-only, for rendering).
    pub fn opponent_board(&self) -> &Board {
        &self.opponent
    }

    /// Environment configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Draw both boards as text. The renderer is acquired lazily on the
    /// first call and kept until [`close`](Self::close).
    pub fn render(&mut self) -> String {
        let renderer = self.renderer.get_or_insert_with(BoardRenderer::new);
        renderer.draw(&self.own, &self.opponent)
    }

    /// Release the renderer, if one was acquired.
    pub fn close(&mut self) {
        self.renderer = None;
    }
}
