//! Terminal rendering for the playfield.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer and the renderer flushes only what changed.
//!
//! - [`game_view`] is pure and unit-tested
//! - [`renderer`] owns terminal I/O
//! - [`frontend`] ties both to the core [`Renderer`](crate::core::Renderer) trait

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod renderer;

pub use supa_tetris_core as core;
pub use supa_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use frontend::TerminalFrontend;
pub use game_view::{preview_cells, GameView, Viewport};
pub use renderer::{changed_runs, encode_frame, Run, TerminalRenderer};
