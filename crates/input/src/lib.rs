//! Terminal input module (game-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and drains the
//! terminal event queue without blocking, once per frame.

pub mod map;
pub mod poll;

pub use supa_tetris_core as core;
pub use supa_tetris_types as types;

pub use map::{input_event, should_quit};
pub use poll::{collect_events, TerminalInput};
