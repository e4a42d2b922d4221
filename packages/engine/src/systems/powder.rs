//! Powder rule - how one sand particle moves during a tick.
//!
//! Straight down if free, else one of the two lower diagonals in the order
//! the configured bias gives, else stay. Cells outside the grid are walls.
//! Below the last row is either a floor or an exit, per `FloorMode`.

use crate::core::config::FloorMode;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallOutcome {
    /// Settled for this tick.
    Stay,
    /// Move into this empty cell.
    Move { row: u32, col: u32 },
    /// Fell through an open floor.
    Exit,
}

/// Decide the move for the sand particle at `(row, col)`.
///
/// `diagonals` holds the two column offsets in preference order, as
/// returned by `DiagonalBias::offsets`.
#[inline]
pub fn next_position(
    grid: &Grid,
    row: u32,
    col: u32,
    diagonals: [i32; 2],
    floor: FloorMode,
) -> FallOutcome {
    let below = row + 1;
    if below >= grid.rows() {
        return match floor {
            FloorMode::Solid => FallOutcome::Stay,
            FloorMode::Open => FallOutcome::Exit,
        };
    }

    let below_i = below as i32;
    let col_i = col as i32;

    if grid.is_free(below_i, col_i) {
        return FallOutcome::Move { row: below, col };
    }

    for dc in diagonals {
        let target = col_i + dc;
        if grid.is_free(below_i, target) {
            return FallOutcome::Move { row: below, col: target as u32 };
        }
    }

    FallOutcome::Stay
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT_FIRST: [i32; 2] = [-1, 1];
    const RIGHT_FIRST: [i32; 2] = [1, -1];

    #[test]
    fn falls_straight_when_below_is_free() {
        let mut grid = Grid::new(4, 4);
        grid.fill(0, 1);
        assert_eq!(
            next_position(&grid, 0, 1, LEFT_FIRST, FloorMode::Solid),
            FallOutcome::Move { row: 1, col: 1 }
        );
    }

    #[test]
    fn blocked_particle_prefers_configured_diagonal() {
        let mut grid = Grid::new(4, 4);
        grid.fill(2, 1);
        grid.fill(3, 1);
        assert_eq!(
            next_position(&grid, 2, 1, LEFT_FIRST, FloorMode::Solid),
            FallOutcome::Move { row: 3, col: 0 }
        );
        assert_eq!(
            next_position(&grid, 2, 1, RIGHT_FIRST, FloorMode::Solid),
            FallOutcome::Move { row: 3, col: 2 }
        );
    }

    #[test]
    fn walls_block_diagonals() {
        let mut grid = Grid::new(4, 4);
        grid.fill(2, 0);
        grid.fill(3, 0);
        // Left of column 0 is outside the grid, so the right diagonal wins.
        assert_eq!(
            next_position(&grid, 2, 0, LEFT_FIRST, FloorMode::Solid),
            FallOutcome::Move { row: 3, col: 1 }
        );
        grid.fill(3, 1);
        assert_eq!(next_position(&grid, 2, 0, LEFT_FIRST, FloorMode::Solid), FallOutcome::Stay);
    }

    #[test]
    fn bottom_row_depends_on_floor() {
        let mut grid = Grid::new(4, 4);
        grid.fill(3, 2);
        assert_eq!(next_position(&grid, 3, 2, LEFT_FIRST, FloorMode::Solid), FallOutcome::Stay);
        assert_eq!(next_position(&grid, 3, 2, LEFT_FIRST, FloorMode::Open), FallOutcome::Exit);
    }
}
