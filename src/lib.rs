//! Supa Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `supa_tetris::{core,input,term,types}`.

pub use supa_tetris_core as core;
pub use supa_tetris_input as input;
pub use supa_tetris_term as term;
pub use supa_tetris_types as types;
