//! Piece module - a movable shape instance with single-step undo
//!
//! Every move or rotate records itself as the last action; [`Piece::reverse`]
//! applies the inverse of that one action. The game loop moves first, validates,
//! and reverses on collision instead of checking ahead of time.

use std::sync::Arc;

use crate::projector::project;
use crate::shapes::{CatalogError, RotationLayout, ShapeCatalog, ShapeDefinition};
use crate::types::{Rgb, ShapeName, GRID_WIDTH};

/// The most recent action applied to a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LastAction {
    Rotate,
    MoveLeft,
    MoveRight,
    MoveDown,
}

/// Active or upcoming piece.
///
/// `(x, y)` is the top-left anchor of the trimmed layout (see [`project`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub x: i32,
    pub y: i32,
    shape: Arc<ShapeDefinition>,
    rotation: usize,
    color: Rgb,
    last_action: LastAction,
}

impl Piece {
    /// Create a piece at `(x, y)` in rotation 0.
    ///
    /// The last action starts as [`LastAction::MoveDown`], so an immediate
    /// `reverse()` lifts the piece one row.
    pub fn new(x: i32, y: i32, shape: Arc<ShapeDefinition>) -> Self {
        let color = shape.name().color();
        Self {
            x,
            y,
            shape,
            rotation: 0,
            color,
            last_action: LastAction::MoveDown,
        }
    }

    /// Spawn `name` centered above the visible playfield.
    ///
    /// The piece starts at `(GRID_WIDTH / 2, 0)` and is lifted by its own height,
    /// so its bottom row sits just above row 0.
    pub fn spawn(name: ShapeName, catalog: &ShapeCatalog) -> Result<Self, CatalogError> {
        let mut piece = Self::new(GRID_WIDTH / 2, 0, catalog.get(name)?);

        let cells = project(&piece);
        let height = match (cells.first(), cells.last()) {
            (Some(first), Some(last)) => last.1 - first.1 + 1,
            _ => 0,
        };
        for _ in 0..height {
            piece.reverse();
        }
        Ok(piece)
    }

    pub fn shape(&self) -> &ShapeDefinition {
        &self.shape
    }

    pub fn name(&self) -> ShapeName {
        self.shape.name()
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Layout for the current rotation.
    pub fn layout(&self) -> &RotationLayout {
        self.shape.layout(self.rotation)
    }

    pub fn rotate(&mut self) {
        self.last_action = LastAction::Rotate;
        self.rotation = (self.rotation + 1) % self.shape.rotation_count();
    }

    pub fn move_left(&mut self) {
        self.last_action = LastAction::MoveLeft;
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.last_action = LastAction::MoveRight;
        self.x += 1;
    }

    pub fn move_down(&mut self) {
        self.last_action = LastAction::MoveDown;
        self.y += 1;
    }

    /// Undo the last action.
    ///
    /// Does not touch the recorded action, so calling it twice applies the
    /// same inverse twice rather than undoing an older action.
    pub fn reverse(&mut self) {
        match self.last_action {
            LastAction::Rotate => {
                let count = self.shape.rotation_count();
                self.rotation = (self.rotation + count - 1) % count;
            }
            LastAction::MoveLeft => self.x += 1,
            LastAction::MoveRight => self.x -= 1,
            LastAction::MoveDown => self.y -= 1,
        }
    }
}
