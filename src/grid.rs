//! A dense, runtime-sized grid container.
//!
//! Boards are `width × height` matrices stored row-major in a `Vec`. All
//! access goes through explicit bounds-checked coordinates; there is no
//! panicking index path in the library.

use serde::{Deserialize, Serialize};

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Coordinate outside `[0, width) × [0, height)`.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A `width × height` matrix of cell values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when `(x, y)` lies on the grid.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Reference to the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T, GridError> {
        self.check_bounds(x, y)?;
        Ok(&self.cells[y * self.width + x])
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        self.cells[y * self.width + x] = value;
        Ok(())
    }

    /// Number of cells matching `pred`.
    pub fn count_matching(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Iterator over `((x, y), &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| ((i % self.width, i / self.width), c))
    }

    /// Iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
