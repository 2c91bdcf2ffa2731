//! The board [`Grid`] — a width×height array of [`CellState`]s with
//! start/target markers.
//!
//! A `Grid` is a plain owned value. A search borrows it mutably for the
//! duration of one run and annotates explored cells onto it; nothing else
//! touches the board while a search is in flight.

use crate::geom::Point;

/// The state of a single board cell.
///
/// A well-formed board holds exactly one `Start` and one `Target` cell, and
/// `Obstacle` cells never transition to any other state. `Path` is applied
/// only after the fact, to cells a search has explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    Target,
    Obstacle,
    Path,
}

/// A 2D board of [`CellState`]s, row-major, anchored at the origin.
///
/// Construction places the start and target markers; the caller is
/// responsible for handing over well-formed coordinates (in bounds, distinct,
/// not on an obstacle). The grid does not re-validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellState>,
    start: Point,
    target: Point,
}

impl Grid {
    /// Create a new board of the given dimensions with the start and target
    /// markers placed. All other cells begin `Empty`.
    pub fn new(width: i32, height: i32, start: Point, target: Point) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut grid = Self {
            width: w,
            height: h,
            cells: vec![CellState::default(); (w * h) as usize],
            start,
            target,
        };
        grid.set(start, CellState::Start);
        grid.set(target, CellState::Target);
        grid
    }

    /// Width of the board.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the board.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// The start cell coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The target cell coordinate.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether `p` is inside the board bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellState> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, state: CellState) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = state;
    }

    /// Count how many cells equal the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, c)
        })
    }
}
