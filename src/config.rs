//! Environment configuration and validation.

use serde::{Deserialize, Serialize};

/// Attempt budget per ship for random placement before giving up with
/// `PlacementExhausted`.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Errors raised while validating an [`EnvConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroGridDimension { width: usize, height: usize },
    #[error("ship roster must start with the reserved 0 placeholder")]
    MissingPlaceholder,
    #[error("ship roster entry {index} has zero length")]
    ZeroShipLength { index: usize },
    #[error("ship {index} (length {length}) cannot fit on a {width}x{height} grid")]
    ShipTooLong {
        index: usize,
        length: usize,
        width: usize,
        height: usize,
    },
}

/// Configuration for a [`BattleshipsEnv`](crate::BattleshipsEnv).
///
/// `ship_sizes` keeps the conventional leading `0` so that index 0 stays the
/// "empty water" id and ship ids index the roster directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Grid dimensions as `(width, height)`.
    pub grid_size: (usize, usize),
    /// Ship lengths indexed by ship id; entry 0 is the water placeholder.
    pub ship_sizes: Vec<usize>,
    /// Fixed RNG seed for reproducible placement. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            grid_size: (10, 10),
            ship_sizes: vec![0, 5, 4, 3, 3, 2],
            seed: None,
        }
    }
}

impl EnvConfig {
    /// Check the configuration for structural problems.
    ///
    /// Rosters that are geometrically impossible to place despite passing
    /// these checks (e.g. more ship cells than free cells) are reported later
    /// by the bounded placement loop instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.grid_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroGridDimension { width, height });
        }
        if self.ship_sizes.first() != Some(&0) {
            return Err(ConfigError::MissingPlaceholder);
        }
        for (index, &length) in self.ship_sizes.iter().enumerate().skip(1) {
            if length == 0 {
                return Err(ConfigError::ZeroShipLength { index });
            }
            if length > width && length > height {
                return Err(ConfigError::ShipTooLong {
                    index,
                    length,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }

    /// Number of ships in the roster (excluding the placeholder).
    pub fn num_ships(&self) -> usize {
        self.ship_sizes.len().saturating_sub(1)
    }

    /// Total number of ship cells; an episode ends when this many cells are
    /// sunk.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_sizes.iter().sum()
    }
}
