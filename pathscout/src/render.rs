//! Plain-text board rendering.

use waypath_core::{CellState, Grid, Point};

/// Glyph for one cell state.
fn rune(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Start => 'S',
        CellState::Target => 'T',
        CellState::Obstacle => 'x',
        CellState::Path => 'R',
    }
}

/// Render the board as text, one line per row.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(grid.at(Point::new(x, y)).map_or(' ', rune));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_row() {
        let mut grid = Grid::new(3, 2, Point::new(0, 0), Point::new(2, 1));
        grid.set(Point::new(1, 0), CellState::Obstacle);
        grid.set(Point::new(1, 1), CellState::Path);
        assert_eq!(render(&grid), "Sx.\n.RT\n");
    }
}
