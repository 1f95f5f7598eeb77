//! The per-cell strike state of a board.

use core::ops::Index;

use crate::common::Coordinate;

/// State of one board cell as seen by the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Not struck yet.
    #[default]
    Empty,
    /// Struck, part of a ship that still floats.
    Hit,
    /// Struck, no ship there.
    Missed,
    /// Part of a ship whose every cell has been struck.
    Destroyed,
}

/// `width * height` cells stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl CellGrid {
    /// A grid of `Empty` cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            self.in_bounds(x, y),
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// State of a cell. Panics when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.offset(x, y)]
    }

    /// State of a cell, `None` when out of bounds.
    pub fn try_get(&self, x: usize, y: usize) -> Option<CellState> {
        self.in_bounds(x, y).then(|| self.cells[y * self.width + x])
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, state: CellState) {
        let i = self.offset(x, y);
        self.cells[i] = state;
    }

    /// Reset every cell to `Empty`.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    /// In-bounds orthogonal neighbors, in the order up, down, left, right.
    pub fn neighbors(&self, c: Coordinate) -> impl Iterator<Item = Coordinate> {
        let (w, h) = (self.width, self.height);
        let up = c.y.checked_sub(1).map(|y| Coordinate::new(c.x, y));
        let down = (c.y + 1 < h).then(|| Coordinate::new(c.x, c.y + 1));
        let left = c.x.checked_sub(1).map(|x| Coordinate::new(x, c.y));
        let right = (c.x + 1 < w).then(|| Coordinate::new(c.x + 1, c.y));
        [up, down, left, right].into_iter().flatten()
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|s| **s == state).count()
    }
}

impl Index<Coordinate> for CellGrid {
    type Output = CellState;

    fn index(&self, c: Coordinate) -> &CellState {
        &self.cells[self.offset(c.x, c.y)]
    }
}
