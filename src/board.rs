//! Board engine: ship occupancy, shot resolution, sunk promotion.

use rand::Rng;

use crate::common::{BoardError, CellState, ShotOutcome};
use crate::grid::Grid;
use crate::ship::{Orientation, Ship};

/// Occupancy value for a cell holding no ship.
pub const WATER: usize = 0;

/// One side's board: an occupancy grid of ship ids, a hit-state grid that
/// accumulates shot outcomes, and the placed ships indexed by id.
///
/// Occupancy is immutable once all ships are placed; only `resolve_shot`
/// mutates the hit-state grid, and per-cell transitions are monotonic
/// (`untried → miss` or `untried → hit → sunk`, never back).
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    roster: Vec<usize>,
    occupancy: Grid<usize>,
    hits: Grid<CellState>,
    ships: Vec<Option<Ship>>,
    total_ship_cells: usize,
}

impl Board {
    /// Create an all-water board for the given roster (no ships placed yet).
    pub fn new(width: usize, height: usize, roster: &[usize]) -> Self {
        Board {
            width,
            height,
            roster: roster.to_vec(),
            occupancy: Grid::new(width, height, WATER),
            hits: Grid::new(width, height, CellState::Untried),
            ships: vec![None; roster.len().saturating_sub(1)],
            total_ship_cells: roster.iter().sum(),
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when `(x, y)` lies on the board.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        self.occupancy.in_bounds(x, y)
    }

    /// Ship-id occupancy grid (0 = water).
    pub fn occupancy(&self) -> &Grid<usize> {
        &self.occupancy
    }

    /// Hit-state grid accumulated from resolved shots.
    pub fn hits(&self) -> &Grid<CellState> {
        &self.hits
    }

    /// Ships placed so far, indexed by `id - 1`.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Number of cells belonging to sunk ships.
    pub fn sunk_cells(&self) -> usize {
        self.hits.count_matching(|&s| s == CellState::Sunk)
    }

    /// Returns `true` once every roster ship is fully sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_cells() == self.total_ship_cells
    }

    /// Place a single ship by id at anchor `(x, y)` with `orientation`.
    ///
    /// The write is atomic: every target cell is verified to be water before
    /// any cell is claimed.
    pub fn place_ship(
        &mut self,
        ship_id: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let length = self.ship_length(ship_id)?;
        if self.ships[ship_id - 1].is_some() {
            return Err(BoardError::ShipAlreadyPlaced { ship_id });
        }
        let ship = Ship::new(ship_id, length, x, y, orientation);
        if !ship.fits(self.width, self.height) {
            return Err(BoardError::ShipOutOfBounds { ship_id });
        }
        if !self.is_free(&ship) {
            return Err(BoardError::ShipOverlaps { ship_id });
        }
        for (cx, cy) in ship.cells() {
            self.occupancy.set(cx, cy, ship_id)?;
        }
        log::debug!(
            "placed ship {} (length {}) at ({}, {}) {:?}",
            ship_id,
            length,
            x,
            y,
            orientation
        );
        self.ships[ship_id - 1] = Some(ship);
        Ok(())
    }

    /// Returns a random in-bounds, non-overlapping `(x, y, Orientation)` for
    /// `ship_id`, retrying up to `max_attempts` fresh samples.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_id: usize,
        max_attempts: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let length = self.ship_length(ship_id)?;
        for _ in 0..max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // skip samples whose orientation cannot fit at all
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal if length <= self.width => {
                    (self.width - length, self.height - 1)
                }
                Orientation::Vertical if length <= self.height => {
                    (self.width - 1, self.height - length)
                }
                _ => continue,
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let ship = Ship::new(ship_id, length, x, y, orientation);
            if self.is_free(&ship) {
                return Ok((x, y, orientation));
            }
        }
        Err(BoardError::PlacementExhausted {
            ship_id,
            attempts: max_attempts,
        })
    }

    /// Randomly place every roster ship, id order 1..=N.
    pub fn place_ships_random<R: Rng>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        for ship_id in 1..self.roster.len() {
            let (x, y, orientation) = self.random_placement(rng, ship_id, max_attempts)?;
            self.place_ship(ship_id, x, y, orientation)?;
        }
        Ok(())
    }

    /// Resolve a shot at `(x, y)`, marking the hit-state grid and reporting
    /// the outcome.
    ///
    /// Water records a miss (repeat misses re-record the same value). A cell
    /// already hit or sunk is a wasted `Repeat` with no state change. A first
    /// hit marks the cell and, when it completes the ship, promotes all of
    /// that ship's cells to sunk.
    pub fn resolve_shot(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        let ship_id = *self.occupancy.get(x, y)?;
        if ship_id == WATER {
            self.hits.set(x, y, CellState::Miss)?;
            return Ok(ShotOutcome::Miss);
        }
        if self.hits.get(x, y)?.is_struck() {
            return Ok(ShotOutcome::Repeat);
        }
        self.hits.set(x, y, CellState::Hit)?;
        let ship = self
            .ships
            .get(ship_id - 1)
            .and_then(|slot| slot.as_ref())
            .copied()
            .ok_or(BoardError::UnknownShip { ship_id })?;
        let sunk = ship
            .cells()
            .all(|(cx, cy)| self.hits.get(cx, cy).map_or(false, |s| s.is_struck()));
        if sunk {
            for (cx, cy) in ship.cells() {
                self.hits.set(cx, cy, CellState::Sunk)?;
            }
            log::debug!("shot ({}, {}) sank ship {}", x, y, ship_id);
            return Ok(ShotOutcome::Sunk(ship_id));
        }
        Ok(ShotOutcome::Hit)
    }

    fn ship_length(&self, ship_id: usize) -> Result<usize, BoardError> {
        if ship_id == WATER {
            return Err(BoardError::UnknownShip { ship_id });
        }
        self.roster
            .get(ship_id)
            .copied()
            .ok_or(BoardError::UnknownShip { ship_id })
    }

    fn is_free(&self, ship: &Ship) -> bool {
        ship.cells()
            .all(|(x, y)| self.occupancy.get(x, y).map_or(false, |&id| id == WATER))
    }
}
