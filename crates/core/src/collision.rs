//! Collision validator

use crate::grid::PlayfieldGrid;
use crate::piece::Piece;
use crate::projector::project;
use crate::types::GRID_WIDTH;

/// Check that every projected cell of `piece` may be occupied.
///
/// A cell passes when it is in bounds and shows the background color, or when
/// it sits above the visible top (negative row) inside the playfield columns.
/// `grid` should hold only locked cells, not the falling piece itself.
pub fn is_valid(piece: &Piece, grid: &PlayfieldGrid) -> bool {
    project(piece).iter().all(|&(x, y)| {
        if y < 0 {
            (0..GRID_WIDTH).contains(&x)
        } else {
            grid.is_empty_at(x, y)
        }
    })
}
