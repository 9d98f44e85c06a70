//! Shape projector - rotation layout to absolute grid cells
//!
//! A layout is a 5x5 box; most shapes leave blank rows and columns around
//! their cells. Projection trims the leading blank rows and the smallest
//! leading blank column so the piece anchor `(x, y)` is the top-left corner of
//! its visible cells. That keeps spawned pieces flush with the playfield edge.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{LAYOUT_HEIGHT, LAYOUT_WIDTH};

/// Grid coordinate `(column, row)`. Rows above the visible top are negative.
pub type Position = (i32, i32);

/// Occupied cells of a projected piece, in row-major scan order.
pub type ProjectedCells = ArrayVec<Position, { LAYOUT_WIDTH * LAYOUT_HEIGHT }>;

/// Project `piece`'s current rotation layout onto grid coordinates.
///
/// Cells come out top-to-bottom, left-to-right; spawn placement relies on the
/// first and last entries being the top-most and bottom-most cells.
pub fn project(piece: &Piece) -> ProjectedCells {
    let layout = piece.layout();
    let mut cells = ProjectedCells::new();

    let mut buffer_rows = 0;
    let mut buffer_columns = LAYOUT_WIDTH as i32;
    let mut within_buffer_y = true;

    for (y, row) in layout.rows().iter().enumerate() {
        if within_buffer_y && !row.contains(&true) {
            buffer_rows += 1;
            continue;
        }
        within_buffer_y = false;

        let mut within_buffer_x = true;
        for (x, &occupied) in row.iter().enumerate() {
            if !occupied {
                continue;
            }
            if within_buffer_x {
                buffer_columns = buffer_columns.min(x as i32);
            }
            within_buffer_x = false;
            cells.push((piece.x + x as i32, piece.y + y as i32));
        }
    }

    for cell in cells.iter_mut() {
        cell.0 -= buffer_columns;
        cell.1 -= buffer_rows;
    }
    cells
}

/// Width and height of the box spanned by `cells`.
pub fn bounding_box(cells: &[Position]) -> Option<(i32, i32)> {
    let min_x = cells.iter().map(|c| c.0).min()?;
    let max_x = cells.iter().map(|c| c.0).max()?;
    let min_y = cells.iter().map(|c| c.1).min()?;
    let max_y = cells.iter().map(|c| c.1).max()?;
    Some((max_x - min_x + 1, max_y - min_y + 1))
}
