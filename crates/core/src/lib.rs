//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece/grid model and the frame-stepped game loop.
//! It has no dependency on a terminal: input and rendering come in through the
//! traits in [`game_loop`].
//!
//! # Module Structure
//!
//! - [`shapes`]: shape catalog and shape data parser
//! - [`piece`]: movable piece with single-step undo and spawn placement
//! - [`projector`]: rotation layout to absolute, trimmed grid cells
//! - [`collision`]: placement validity against the playfield
//! - [`grid`]: locked cells and the per-frame playfield view
//! - [`rng`]: uniform random shape selection
//! - [`game_state`]: fall timer, input dispatch and locking
//! - [`game_loop`]: collaborator traits, frame clock and the loop driver
//! - [`config`]: environment configuration
//! - [`events`]: game events and the JSON-lines event log
//!
//! # Game Rules
//!
//! - Pieces spawn centered, just above the visible top, and fall one row each
//!   time the fall accumulator passes `fall_speed * UPDATE_INTERVAL_MS`
//! - A move that collides is undone in the same frame
//! - A piece that cannot fall locks in place; the next piece takes over
//! - The game ends when a locked cell reaches row 0
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use supa_tetris_core::{GameState, ShapeCatalog, ShapePicker};
//! use supa_tetris_core::types::InputEvent;
//!
//! let catalog = ShapeCatalog::builtin().unwrap();
//! let mut game = GameState::new(catalog, ShapePicker::seeded(12345), 0.27).unwrap();
//!
//! game.tick(Duration::from_millis(16), &[InputEvent::MoveLeft]).unwrap();
//! game.tick(Duration::from_millis(300), &[InputEvent::Rotate]).unwrap();
//!
//! assert!(!game.check_lost());
//! ```

pub mod collision;
pub mod config;
pub mod events;
pub mod game_loop;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod projector;
pub mod rng;
pub mod shapes;

pub use supa_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::is_valid;
pub use config::GameConfig;
pub use events::{EventLog, GameEvent};
pub use game_loop::{run_game, FrameClock, GameOver, InputSource, Renderer, SystemClock};
pub use game_state::{GameState, TickOutcome};
pub use grid::{build_grid, LockedCells, PlayfieldGrid};
pub use piece::{LastAction, Piece};
pub use projector::{bounding_box, project, Position, ProjectedCells};
pub use rng::ShapePicker;
pub use shapes::{
    parse_shapes, CatalogError, RotationLayout, ShapeCatalog, ShapeDefinition, BUILTIN_SHAPES,
};
