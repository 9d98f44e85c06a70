//! Game loop driver and its collaborator seams.
//!
//! The loop is single-threaded and frame-stepped: wait for the frame clock,
//! drain input, tick the state, hand the view to the renderer, check for
//! top-out. The caller owns every piece of state and passes it in.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::events::{EventLog, GameEvent};
use crate::game_state::{GameState, TickOutcome};
use crate::grid::PlayfieldGrid;
use crate::piece::Piece;
use crate::types::InputEvent;

/// Source of player commands, drained without blocking once per frame.
pub trait InputSource {
    /// Append every pending event to `out`.
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> Result<()>;
}

/// Consumer of the per-frame view. Must not keep references past the call.
pub trait Renderer {
    fn render(&mut self, grid: &PlayfieldGrid, next: &Piece) -> Result<()>;
}

/// Paces the loop; returns the time elapsed since the previous tick.
pub trait FrameClock {
    fn tick(&mut self) -> Duration;
}

/// Wall clock that sleeps until the next frame boundary.
#[derive(Debug, Clone)]
pub struct SystemClock {
    frame: Duration,
    last: Instant,
}

impl SystemClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            last: Instant::now(),
        }
    }
}

impl FrameClock for SystemClock {
    fn tick(&mut self) -> Duration {
        let deadline = self.last + self.frame;
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
    Quit,
    ToppedOut,
}

/// Run frames until the player quits or the stack tops out.
pub fn run_game(
    game: &mut GameState,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    clock: &mut impl FrameClock,
    log: &mut EventLog,
) -> Result<GameOver> {
    let mut pending = Vec::with_capacity(16);

    loop {
        let elapsed = clock.tick();

        pending.clear();
        input.drain(&mut pending)?;

        let outcome = game.tick(elapsed, &pending)?;
        for event in game.drain_events() {
            log.record(&event);
        }

        renderer.render(game.grid(), game.next_piece())?;

        if game.check_lost() {
            log.record(&GameEvent::ToppedOut {
                locked_total: game.locked_cells().len(),
            });
            return Ok(GameOver::ToppedOut);
        }
        if outcome == TickOutcome::Quit {
            log.record(&GameEvent::Quit);
            return Ok(GameOver::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_waits_at_least_one_frame() {
        let mut clock = SystemClock::new(Duration::from_millis(5));
        let elapsed = clock.tick();
        assert!(elapsed >= Duration::from_millis(5));
    }
}
