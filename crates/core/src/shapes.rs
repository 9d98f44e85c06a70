//! Shapes module - shape catalog and shape data parser
//!
//! Shape data is a text resource: each entry opens with a `//` delimiter line,
//! followed by 5x5 rotation blocks of `0` (occupied) and `.` (empty) separated by
//! single blank lines. The last block of every entry is a duplicate that only
//! exists to terminate the entry, so the parser drops it.
//!
//! ```text
//! // O
//! .....
//! .....
//! .00..
//! .00..
//! .....
//!
//! .....        <- dropped
//! ...
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::types::{
    ShapeName, EMPTY_MARKER, LAYOUT_HEIGHT, LAYOUT_WIDTH, OCCUPIED_MARKER, SHAPE_DELIMITER,
};

/// Shape data compiled into the binary.
pub const BUILTIN_SHAPES: &str = include_str!("../../../resources/shapes.txt");

/// Errors raised while loading shape data or looking shapes up.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("shape data could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("expected {expected} shapes, found {found}")]
    ShapeCount { expected: usize, found: usize },
    #[error("shape {0:?} is not in the catalog")]
    MissingShape(ShapeName),
}

/// One orientation of a shape: a fixed 5x5 occupancy grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationLayout {
    rows: [[bool; LAYOUT_WIDTH]; LAYOUT_HEIGHT],
}

impl RotationLayout {
    /// Build a layout from its text rows, e.g. `["..0..", ".000.", ...]`.
    ///
    /// Returns `None` unless there are exactly `LAYOUT_HEIGHT` rows of
    /// `LAYOUT_WIDTH` marker characters with at least one occupied cell.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        if lines.len() != LAYOUT_HEIGHT {
            return None;
        }
        let mut rows = [[false; LAYOUT_WIDTH]; LAYOUT_HEIGHT];
        for (row, line) in rows.iter_mut().zip(lines) {
            let line = line.as_ref();
            if line.chars().count() != LAYOUT_WIDTH {
                return None;
            }
            for (cell, ch) in row.iter_mut().zip(line.chars()) {
                *cell = match ch {
                    OCCUPIED_MARKER => true,
                    EMPTY_MARKER => false,
                    _ => return None,
                };
            }
        }
        let layout = Self { rows };
        if layout.cell_count() == 0 {
            return None;
        }
        Some(layout)
    }

    /// Occupancy rows, top to bottom.
    pub fn rows(&self) -> &[[bool; LAYOUT_WIDTH]; LAYOUT_HEIGHT] {
        &self.rows
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }
}

/// A named shape with its ordered rotation layouts (at least one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDefinition {
    name: ShapeName,
    rotations: Vec<RotationLayout>,
}

impl ShapeDefinition {
    pub fn name(&self) -> ShapeName {
        self.name
    }

    pub fn rotations(&self) -> &[RotationLayout] {
        &self.rotations
    }

    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Layout for `rotation`, wrapped into range.
    pub fn layout(&self, rotation: usize) -> &RotationLayout {
        &self.rotations[rotation % self.rotations.len()]
    }
}

/// Lookup table from shape name to its definition.
///
/// Either holds all seven shapes or is empty (shape data unavailable).
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    shapes: Vec<Arc<ShapeDefinition>>,
}

impl ShapeCatalog {
    /// Catalog with no shapes. Every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog parsed from the compiled-in shape data.
    pub fn builtin() -> Result<Self, CatalogError> {
        parse_shapes(BUILTIN_SHAPES)
    }

    /// Read and parse shape data from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        parse_shapes(&text)
    }

    /// Like [`ShapeCatalog::load`], but falls back to an empty catalog.
    ///
    /// The error is handed back so the caller can report it once at startup.
    pub fn load_or_empty(path: impl AsRef<Path>) -> (Self, Option<CatalogError>) {
        match Self::load(path) {
            Ok(catalog) => (catalog, None),
            Err(err) => (Self::empty(), Some(err)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Definition for `name`.
    pub fn get(&self, name: ShapeName) -> Result<Arc<ShapeDefinition>, CatalogError> {
        self.shapes
            .get(name.index())
            .cloned()
            .ok_or(CatalogError::MissingShape(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDefinition> {
        self.shapes.iter().map(|s| s.as_ref())
    }
}

/// Shape entry under construction: raw blocks of text lines.
struct RawShape {
    line: usize,
    letter: Option<char>,
    blocks: Vec<Vec<String>>,
}

/// Parse shape data text into a catalog.
pub fn parse_shapes(text: &str) -> Result<ShapeCatalog, CatalogError> {
    let mut raw: Vec<RawShape> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(rest) = line.strip_prefix(SHAPE_DELIMITER) {
            // Closing the previous entry happens in `finish_shape`.
            raw.push(RawShape {
                line: line_no,
                letter: rest.trim().chars().next(),
                blocks: vec![Vec::new()],
            });
            continue;
        }

        let Some(current) = raw.last_mut() else {
            if line.is_empty() {
                continue;
            }
            return Err(CatalogError::Parse {
                line: line_no,
                reason: "layout row before the first shape delimiter".to_string(),
            });
        };

        if line.is_empty() {
            current.blocks.push(Vec::new());
        } else if let Some(block) = current.blocks.last_mut() {
            block.push(line.to_string());
        }
    }

    if raw.len() != ShapeName::ALL.len() {
        return Err(CatalogError::ShapeCount {
            expected: ShapeName::ALL.len(),
            found: raw.len(),
        });
    }

    let shapes = raw
        .into_iter()
        .zip(ShapeName::ALL)
        .map(|(entry, name)| finish_shape(entry, name).map(Arc::new))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShapeCatalog { shapes })
}

fn finish_shape(mut entry: RawShape, name: ShapeName) -> Result<ShapeDefinition, CatalogError> {
    let line = entry.line;
    let parse_err = |reason: String| CatalogError::Parse { line, reason };

    if let Some(letter) = entry.letter {
        if ShapeName::from_char(letter) != Some(name) {
            return Err(parse_err(format!(
                "delimiter names {letter:?} but entry {} is {:?}",
                name.index(),
                name
            )));
        }
    }

    // The final block is the terminating duplicate.
    entry.blocks.pop();
    if entry.blocks.is_empty() {
        return Err(parse_err(format!("shape {name:?} has no rotations")));
    }

    let rotations = entry
        .blocks
        .iter()
        .enumerate()
        .map(|(r, block)| {
            RotationLayout::from_rows(block.as_slice()).ok_or_else(|| {
                parse_err(format!(
                    "shape {name:?} rotation {r} is not a {LAYOUT_WIDTH}x{LAYOUT_HEIGHT} layout of \
                     '{OCCUPIED_MARKER}'/'{EMPTY_MARKER}' with an occupied cell"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShapeDefinition { name, rotations })
}
