//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data, usable from core logic, input mapping and
//! terminal rendering alike.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn column**: `GRID_WIDTH / 2`, shifted above row 0 by the piece height
//!
//! Rows above the visible top are negative; they are legal for a falling piece.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `UPDATE_INTERVAL_MS` | 1000 | Unit the fall threshold is a fraction of |
//! | `DEFAULT_FALL_SPEED` | 0.27 | Piece falls once the accumulator passes 270ms |
//! | `FRAME_MS` | 16 | Frame clock cap (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use supa_tetris_types::{ShapeName, GRID_HEIGHT, GRID_WIDTH};
//!
//! let shape = ShapeName::from_char('t').unwrap();
//! assert_eq!(shape, ShapeName::T);
//! assert_eq!(shape.index(), 6);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Playfield width in cells (10 columns)
pub const GRID_WIDTH: i32 = 10;

/// Playfield height in cells (20 rows)
pub const GRID_HEIGHT: i32 = 20;

/// Columns in every rotation layout
pub const LAYOUT_WIDTH: usize = 5;

/// Rows in every rotation layout
pub const LAYOUT_HEIGHT: usize = 5;

/// Character marking an occupied layout cell
pub const OCCUPIED_MARKER: char = '0';

/// Character marking an empty layout cell
pub const EMPTY_MARKER: char = '.';

/// Prefix of the line that opens a shape entry in the shape data
pub const SHAPE_DELIMITER: &str = "//";

/// Shape names in catalog order. Entry `i` of the shape data belongs to `SHAPE_NAMES[i]`.
pub const SHAPE_NAMES: &str = "SZIOJLT";

/// Interval the fall threshold is measured against (milliseconds)
pub const UPDATE_INTERVAL_MS: u32 = 1000;

/// Fraction of `UPDATE_INTERVAL_MS` that must elapse before the piece falls one row
pub const DEFAULT_FALL_SPEED: f32 = 0.27;

/// Frame clock cap in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of an unoccupied playfield cell
pub const GRID_BACKGROUND: Rgb = Rgb::new(34, 47, 62);

/// Window background behind the playfield
pub const WINDOW_BACKGROUND: Rgb = Rgb::new(52, 31, 151);

/// Playfield border
pub const GRID_BORDER: Rgb = Rgb::new(29, 209, 161);

/// Title text
pub const TITLE_COLOR: Rgb = Rgb::new(10, 189, 227);

/// Labels and gridlines
pub const FONT_COLOR: Rgb = Rgb::new(200, 214, 229);

/// Shape colors, indexed like `SHAPE_NAMES`
pub const SHAPE_COLORS: [Rgb; 7] = [
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 165, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(128, 0, 128),
];

/// The seven shape identities
///
/// Each shape has a fixed catalog slot and color:
/// - **S**: Green
/// - **Z**: Red
/// - **I**: Cyan
/// - **O**: Yellow
/// - **J**: Orange
/// - **L**: Blue
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ShapeName {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl ShapeName {
    /// All shapes in catalog order
    pub const ALL: [ShapeName; 7] = [
        ShapeName::S,
        ShapeName::Z,
        ShapeName::I,
        ShapeName::O,
        ShapeName::J,
        ShapeName::L,
        ShapeName::T,
    ];

    /// Position of this shape in `SHAPE_NAMES` and in the shape data
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape at catalog position `index`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a shape name from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use supa_tetris_types::ShapeName;
    ///
    /// assert_eq!(ShapeName::from_char('S'), Some(ShapeName::S));
    /// assert_eq!(ShapeName::from_char('o'), Some(ShapeName::O));
    /// assert_eq!(ShapeName::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(ShapeName::S),
            'Z' => Some(ShapeName::Z),
            'I' => Some(ShapeName::I),
            'O' => Some(ShapeName::O),
            'J' => Some(ShapeName::J),
            'L' => Some(ShapeName::L),
            'T' => Some(ShapeName::T),
            _ => None,
        }
    }

    /// Uppercase letter for this shape
    pub fn as_char(self) -> char {
        match self {
            ShapeName::S => 'S',
            ShapeName::Z => 'Z',
            ShapeName::I => 'I',
            ShapeName::O => 'O',
            ShapeName::J => 'J',
            ShapeName::L => 'L',
            ShapeName::T => 'T',
        }
    }

    /// Display color bound to this shape
    pub fn color(self) -> Rgb {
        SHAPE_COLORS[self.index()]
    }
}

/// Discrete input commands consumed by the game loop
///
/// Produced by the input collaborator, drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// End the game loop
    Quit,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Advance to the next rotation layout
    Rotate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_names_match_catalog_order() {
        let letters: String = ShapeName::ALL.iter().map(|s| s.as_char()).collect();
        assert_eq!(letters, SHAPE_NAMES);

        for (i, c) in SHAPE_NAMES.chars().enumerate() {
            let shape = ShapeName::from_char(c).unwrap();
            assert_eq!(shape.index(), i);
            assert_eq!(ShapeName::from_index(i), Some(shape));
        }
        assert_eq!(ShapeName::from_index(7), None);
    }

    #[test]
    fn shape_colors_are_distinct_from_background() {
        for shape in ShapeName::ALL {
            assert_ne!(shape.color(), GRID_BACKGROUND);
        }
        assert_eq!(ShapeName::J.color(), Rgb::new(255, 165, 0));
        assert_eq!(ShapeName::T.color(), Rgb::new(128, 0, 128));
    }
}
