//! Stamping explored cells onto the board for rendering.

use waypath_core::{CellState, Grid, Point};

/// Mark each cell in `cells` as part of the explored route.
///
/// The start cell keeps its marker. Stamping an already-stamped cell is a
/// no-op, so repeated stamping of the same set leaves the board unchanged.
/// Obstacle coordinates never reach this function: neighbor expansion
/// filters them out before they can enter the closed set.
pub fn stamp(grid: &mut Grid, cells: impl IntoIterator<Item = Point>) {
    for p in cells {
        if grid.at(p) != Some(CellState::Start) {
            grid.set(p, CellState::Path);
        }
    }
}
