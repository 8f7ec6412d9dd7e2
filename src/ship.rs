//! Ship placement geometry.

use serde::{Deserialize, Serialize};

/// Orientation of a ship's run on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored on the board: a straight run of `length` cells starting at
/// `(x, y)` and extending along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    id: usize,
    length: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl Ship {
    /// Describe a ship run. Bounds are checked by the board at placement.
    pub fn new(id: usize, length: usize, x: usize, y: usize, orientation: Orientation) -> Self {
        Ship {
            id,
            length,
            x,
            y,
            orientation,
        }
    }

    /// Ship id (index into the roster, never 0).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Run length in cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Anchor cell `(x, y)` of the run.
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Orientation of the run.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` when the whole run lies within a `width × height` grid.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.x + self.length <= width && self.y < height,
            Orientation::Vertical => self.x < width && self.y + self.length <= height,
        }
    }

    /// Iterator over the cells covered by the run, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.x + i, self.y),
            Orientation::Vertical => (self.x, self.y + i),
        })
    }

    /// Returns `true` when `(x, y)` is part of the run.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells().any(|cell| cell == (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_cells_extend_along_x() {
        let ship = Ship::new(1, 3, 2, 1, Orientation::Horizontal);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(cells, vec![(2, 1), (3, 1), (4, 1)]);
        assert!(ship.contains(3, 1));
        assert!(!ship.contains(2, 2));
    }

    #[test]
    fn fits_respects_both_axes() {
        let ship = Ship::new(1, 4, 1, 0, Orientation::Vertical);
        assert!(ship.fits(2, 4));
        assert!(!ship.fits(2, 3));
        assert!(!ship.fits(1, 4));
    }
}
