use waypath_core::{CellState, Grid, Point};

/// Candidate step offsets, tried in a fixed order: north, the north
/// diagonals, the horizontals, south, the south diagonals.
///
/// The order feeds the open set's first-in-scan-order tie-break and must not
/// change.
const DIRS: [Point; 8] = [
    Point::new(0, -1),  // N
    Point::new(-1, -1), // NW
    Point::new(1, -1),  // NE
    Point::new(1, 0),   // E
    Point::new(-1, 0),  // W
    Point::new(0, 1),   // S
    Point::new(-1, 1),  // SW
    Point::new(1, 1),   // SE
];

/// Cached neighbor computation helper.
///
/// Enumerates the in-bounds, non-obstacle 8-connected neighbors of a cell,
/// reusing an internal buffer across queries. Diagonal steps are allowed
/// even when both adjacent orthogonal cells are obstacles.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the passable neighbors of `p` on `grid`, in fixed order.
    pub fn passable(&mut self, p: Point, grid: &Grid) -> &[Point] {
        self.buf.clear();
        for d in DIRS {
            let n = p + d;
            if grid.contains(n) && grid.at(n) != Some(CellState::Obstacle) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_all_eight_in_fixed_order() {
        let grid = Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        let mut neighbors = Neighbors::new();
        assert_eq!(
            neighbors.passable(Point::new(1, 1), &grid),
            [
                Point::new(1, 0), // N
                Point::new(0, 0), // NW
                Point::new(2, 0), // NE
                Point::new(2, 1), // E
                Point::new(0, 1), // W
                Point::new(1, 2), // S
                Point::new(0, 2), // SW
                Point::new(2, 2), // SE
            ]
        );
    }

    #[test]
    fn corner_cell_is_clipped_to_bounds() {
        let grid = Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        let mut neighbors = Neighbors::new();
        assert_eq!(
            neighbors.passable(Point::new(0, 0), &grid),
            [Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn obstacles_are_excluded() {
        let mut grid = Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        grid.set(Point::new(1, 0), CellState::Obstacle);
        grid.set(Point::new(1, 1), CellState::Obstacle);
        let mut neighbors = Neighbors::new();
        assert_eq!(
            neighbors.passable(Point::new(0, 0), &grid),
            [Point::new(0, 1)]
        );
    }

    #[test]
    fn diagonal_moves_ignore_orthogonal_blockers() {
        // Both cells orthogonally adjacent to the diagonal are obstacles;
        // the diagonal itself stays reachable (no corner-cutting check).
        let mut grid = Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        grid.set(Point::new(1, 0), CellState::Obstacle);
        grid.set(Point::new(0, 1), CellState::Obstacle);
        let mut neighbors = Neighbors::new();
        assert_eq!(
            neighbors.passable(Point::new(0, 0), &grid),
            [Point::new(1, 1)]
        );
    }
}
