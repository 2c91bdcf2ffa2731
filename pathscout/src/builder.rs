//! Board construction: precondition checks and seeded obstacle scattering.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use thiserror::Error;
use waypath_core::{CellState, Grid, Point};

/// Parameters for one board.
#[derive(Debug, Clone)]
pub struct BoardSpec {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub target: Point,
    pub obstacles: u32,
    pub seed: u64,
}

/// Precondition violations caught before a board is built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("cell {0} is outside the board")]
    OutOfBounds(Point),
    #[error("start and target must be distinct cells")]
    StartIsTarget,
    #[error("{requested} obstacles do not fit alongside the markers ({free} cells free)")]
    TooManyObstacles { requested: u32, free: u32 },
}

/// Validate `spec` and build its board.
///
/// Obstacles are placed by rejection sampling: coordinates are drawn
/// uniformly until one lands on an unoccupied cell, so neither marker is
/// ever overwritten. Deterministic for a fixed seed.
pub fn build(spec: &BoardSpec) -> Result<Grid, BuildError> {
    if spec.width <= 0 || spec.height <= 0 {
        return Err(BuildError::InvalidDimensions {
            width: spec.width,
            height: spec.height,
        });
    }
    for p in [spec.start, spec.target] {
        if p.x < 0 || p.y < 0 || p.x >= spec.width || p.y >= spec.height {
            return Err(BuildError::OutOfBounds(p));
        }
    }
    if spec.start == spec.target {
        return Err(BuildError::StartIsTarget);
    }
    // The markers occupy two cells; the sampling loop can only terminate if
    // enough empty cells remain for every requested obstacle.
    let free = (spec.width * spec.height - 2).max(0) as u32;
    if spec.obstacles > free {
        return Err(BuildError::TooManyObstacles {
            requested: spec.obstacles,
            free,
        });
    }

    let mut grid = Grid::new(spec.width, spec.height, spec.start, spec.target);
    let mut rng = StdRng::seed_from_u64(spec.seed);
    for _ in 0..spec.obstacles {
        loop {
            let p = Point::new(
                rng.random_range(0..spec.width),
                rng.random_range(0..spec.height),
            );
            if grid.at(p) == Some(CellState::Empty) {
                grid.set(p, CellState::Obstacle);
                break;
            }
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> BoardSpec {
        BoardSpec {
            width: 10,
            height: 8,
            start: Point::new(0, 0),
            target: Point::new(9, 7),
            obstacles: 12,
            seed: 42,
        }
    }

    #[test]
    fn scatters_the_requested_number_of_obstacles() {
        let grid = build(&spec()).unwrap();
        assert_eq!(grid.count(CellState::Obstacle), 12);
        assert_eq!(grid.at(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(grid.at(Point::new(9, 7)), Some(CellState::Target));
    }

    #[test]
    fn same_seed_builds_the_same_board() {
        assert_eq!(build(&spec()).unwrap(), build(&spec()).unwrap());
    }

    #[test]
    fn rejects_bad_specs() {
        let mut s = spec();
        s.width = 0;
        assert!(matches!(
            build(&s),
            Err(BuildError::InvalidDimensions { .. })
        ));

        let mut s = spec();
        s.target = Point::new(10, 0);
        assert_eq!(build(&s), Err(BuildError::OutOfBounds(Point::new(10, 0))));

        let mut s = spec();
        s.target = s.start;
        assert_eq!(build(&s), Err(BuildError::StartIsTarget));

        let mut s = spec();
        s.obstacles = 79;
        assert_eq!(
            build(&s),
            Err(BuildError::TooManyObstacles {
                requested: 79,
                free: 78,
            })
        );
    }

    #[test]
    fn can_fill_every_free_cell() {
        let s = BoardSpec {
            width: 3,
            height: 2,
            start: Point::new(0, 0),
            target: Point::new(2, 1),
            obstacles: 4,
            seed: 7,
        };
        let grid = build(&s).unwrap();
        assert_eq!(grid.count(CellState::Obstacle), 4);
        assert_eq!(grid.count(CellState::Empty), 0);
    }
}
