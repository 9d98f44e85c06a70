//! Grid module - locked cells and the per-frame playfield view
//!
//! [`LockedCells`] is the source of truth: every cell a settled piece left
//! behind, keyed by position. [`PlayfieldGrid`] is a dense 10x20 color buffer
//! rebuilt from it once per frame, with the falling piece painted on top.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use std::collections::HashMap;

use crate::projector::Position;
use crate::types::{Rgb, GRID_BACKGROUND, GRID_HEIGHT, GRID_WIDTH};

const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Positions claimed by settled pieces and their colors.
///
/// Entries are only ever added during a game. Positions above the visible top
/// (negative rows) are kept too; they are what top-out detection looks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedCells {
    cells: HashMap<Position, Rgb>,
}

impl LockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position: Position, color: Rgb) {
        self.cells.insert(position, color);
    }

    pub fn get(&self, position: Position) -> Option<Rgb> {
        self.cells.get(&position).copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Rgb)> + '_ {
        self.cells.iter().map(|(&pos, &color)| (pos, color))
    }

    /// True once any locked cell reaches row 0 or above the playfield.
    pub fn check_lost(&self) -> bool {
        self.cells.keys().any(|&(_, y)| y < 1)
    }
}

impl FromIterator<(Position, Rgb)> for LockedCells {
    fn from_iter<I: IntoIterator<Item = (Position, Rgb)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Dense GRID_WIDTH x GRID_HEIGHT color buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfieldGrid {
    cells: [Rgb; GRID_SIZE],
}

impl PlayfieldGrid {
    /// All-background grid.
    pub fn new() -> Self {
        Self {
            cells: [GRID_BACKGROUND; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn offset(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y * GRID_WIDTH + x) as usize)
    }

    /// Color at `(x, y)`, or None outside the playfield.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        Self::offset(x, y).map(|i| self.cells[i])
    }

    /// Paint `(x, y)`. Returns false (and does nothing) outside the playfield.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        match Self::offset(x, y) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    /// In bounds and showing the background color.
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(GRID_BACKGROUND)
    }

    /// Row `y` as a slice of GRID_WIDTH colors.
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * GRID_WIDTH as usize;
        &self.cells[start..start + GRID_WIDTH as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks(GRID_WIDTH as usize)
    }

    /// Overwrite this grid with `locked` on top of the background.
    pub fn rebuild_from(&mut self, locked: &LockedCells) {
        self.cells.fill(GRID_BACKGROUND);
        for (pos, color) in locked.iter() {
            // Cells above the visible top are not part of the view.
            self.set(pos.0, pos.1, color);
        }
    }
}

impl Default for PlayfieldGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fresh playfield view from locked cells.
pub fn build_grid(locked: &LockedCells) -> PlayfieldGrid {
    let mut grid = PlayfieldGrid::new();
    grid.rebuild_from(locked);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_offset_calculation() {
        assert_eq!(PlayfieldGrid::offset(0, 0), Some(0));
        assert_eq!(PlayfieldGrid::offset(9, 0), Some(9));
        assert_eq!(PlayfieldGrid::offset(0, 1), Some(10));
        assert_eq!(PlayfieldGrid::offset(9, 19), Some(199));
        assert_eq!(PlayfieldGrid::offset(-1, 0), None);
        assert_eq!(PlayfieldGrid::offset(10, 0), None);
        assert_eq!(PlayfieldGrid::offset(0, 20), None);
        assert_eq!(PlayfieldGrid::offset(0, -1), None);
    }

    #[test]
    fn rebuild_clears_previous_overlay() {
        let red = Rgb::new(255, 0, 0);
        let mut grid = PlayfieldGrid::new();
        grid.set(2, 2, red);

        let locked: LockedCells = [((4, 4), red)].into_iter().collect();
        grid.rebuild_from(&locked);

        assert_eq!(grid.get(2, 2), Some(GRID_BACKGROUND));
        assert_eq!(grid.get(4, 4), Some(red));
    }

    #[test]
    fn locked_cells_above_top_are_not_drawn() {
        let red = Rgb::new(255, 0, 0);
        let locked: LockedCells = [((3, -1), red)].into_iter().collect();
        assert_eq!(build_grid(&locked), PlayfieldGrid::new());
        assert!(locked.check_lost());
    }

    #[test]
    fn row_and_get_agree_on_column_row_order() {
        let red = Rgb::new(255, 0, 0);
        let locked: LockedCells = [((3, 5), red)].into_iter().collect();
        let grid = build_grid(&locked);

        assert_eq!(grid.get(3, 5), Some(red));
        assert_eq!(grid.row(5)[3], red);
        assert_eq!(grid.get(5, 3), Some(GRID_BACKGROUND));
        assert_eq!(grid.row(3)[5], GRID_BACKGROUND);
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut grid = PlayfieldGrid::new();
        assert!(!grid.set(-1, 0, Rgb::new(1, 2, 3)));
        assert!(!grid.set(0, GRID_HEIGHT, Rgb::new(1, 2, 3)));
        assert_eq!(grid, PlayfieldGrid::new());
    }
}
