//! Game state module - fall timer, input dispatch and locking
//!
//! One call to [`GameState::tick`] is one frame of the game loop:
//!
//! 1. rebuild the playfield view from the locked cells
//! 2. add the frame time to the fall accumulator
//! 3. once the accumulator passes the threshold, move the piece down; if that
//!    collides, undo it and mark the piece for locking
//! 4. apply each input event, undoing any that collides
//! 5. paint the falling piece over the view
//! 6. lock a marked piece, promote the next piece and spawn a new one
//!
//! Rendering and the loss check happen afterwards, in [`crate::game_loop`].

use std::mem;
use std::time::Duration;

use crate::collision::is_valid;
use crate::events::GameEvent;
use crate::grid::{LockedCells, PlayfieldGrid};
use crate::piece::Piece;
use crate::projector::project;
use crate::rng::ShapePicker;
use crate::shapes::{CatalogError, ShapeCatalog};
use crate::types::{InputEvent, UPDATE_INTERVAL_MS};

/// What the frame asked of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: ShapeCatalog,
    picker: ShapePicker,
    current: Piece,
    next: Piece,
    locked: LockedCells,
    /// View rebuilt each tick; holds the falling piece overlay afterwards.
    grid: PlayfieldGrid,
    fall_accumulator: Duration,
    fall_speed: f32,
    should_lock: bool,
    /// Pending events for the log (consumed by the loop driver).
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session: spawn the current and next pieces.
    ///
    /// Fails when the catalog lacks a drawn shape (e.g. shape data never loaded).
    pub fn new(
        catalog: ShapeCatalog,
        mut picker: ShapePicker,
        fall_speed: f32,
    ) -> Result<Self, CatalogError> {
        let current = Piece::spawn(picker.pick(), &catalog)?;
        let next = Piece::spawn(picker.pick(), &catalog)?;
        let events = vec![spawned(&current), spawned(&next)];

        Ok(Self {
            catalog,
            picker,
            current,
            next,
            locked: LockedCells::new(),
            grid: PlayfieldGrid::new(),
            fall_accumulator: Duration::ZERO,
            fall_speed,
            should_lock: false,
            events,
        })
    }

    /// Replace the locked cells, e.g. to resume from a prepared board.
    pub fn with_locked(mut self, locked: LockedCells) -> Self {
        self.grid.rebuild_from(&locked);
        self.locked = locked;
        self
    }

    /// Replace the falling piece.
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn locked_cells(&self) -> &LockedCells {
        &self.locked
    }

    /// Playfield view of the last tick, falling piece included.
    pub fn grid(&self) -> &PlayfieldGrid {
        &self.grid
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    pub fn fall_accumulator(&self) -> Duration {
        self.fall_accumulator
    }

    /// Top-out: a locked cell sits on row 0 or above it.
    pub fn check_lost(&self) -> bool {
        self.locked.check_lost()
    }

    /// Take the events recorded since the last call.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Advance one frame.
    pub fn tick(
        &mut self,
        elapsed: Duration,
        input: &[InputEvent],
    ) -> Result<TickOutcome, CatalogError> {
        self.grid.rebuild_from(&self.locked);

        self.fall_accumulator += elapsed;
        let progress = self.fall_accumulator.as_millis() as f32 / UPDATE_INTERVAL_MS as f32;
        if progress > self.fall_speed {
            self.fall_accumulator = Duration::ZERO;
            self.current.move_down();
            if !is_valid(&self.current, &self.grid) {
                self.current.reverse();
                self.should_lock = true;
            }
        }

        let mut outcome = TickOutcome::Continue;
        for &event in input {
            match event {
                InputEvent::Quit => {
                    outcome = TickOutcome::Quit;
                    continue;
                }
                InputEvent::MoveLeft => self.current.move_left(),
                InputEvent::MoveRight => self.current.move_right(),
                InputEvent::SoftDrop => self.current.move_down(),
                InputEvent::Rotate => self.current.rotate(),
            }
            if !is_valid(&self.current, &self.grid) {
                self.current.reverse();
            }
        }

        let cells = project(&self.current);
        let color = self.current.color();
        for &(x, y) in cells.iter().filter(|&&(_, y)| y >= 0) {
            self.grid.set(x, y, color);
        }

        if self.should_lock {
            for &cell in &cells {
                self.locked.insert(cell, color);
            }
            self.events.push(GameEvent::Locked {
                shape: self.current.name(),
                cells: cells.to_vec(),
                locked_total: self.locked.len(),
            });

            let spawned_piece = Piece::spawn(self.picker.pick(), &self.catalog)?;
            self.events.push(spawned(&spawned_piece));
            self.current = mem::replace(&mut self.next, spawned_piece);
            self.should_lock = false;
        }

        Ok(outcome)
    }
}

fn spawned(piece: &Piece) -> GameEvent {
    GameEvent::Spawned {
        shape: piece.name(),
        x: piece.x,
        y: piece.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgb, ShapeName, GRID_BACKGROUND, GRID_HEIGHT};

    const QUICK: Duration = Duration::from_millis(1);
    const FALL: Duration = Duration::from_millis(300);

    fn game() -> GameState {
        let catalog = ShapeCatalog::builtin().unwrap();
        GameState::new(catalog, ShapePicker::seeded(1), 0.27).unwrap()
    }

    fn place(game: &mut GameState, name: ShapeName, x: i32, y: i32) {
        let shape = game.catalog().get(name).unwrap();
        game.set_current(Piece::new(x, y, shape));
    }

    #[test]
    fn new_game_spawns_two_pieces_above_field() {
        let mut game = game();
        assert!(project(game.current_piece()).iter().all(|c| c.1 < 0));
        assert!(project(game.next_piece()).iter().all(|c| c.1 < 0));
        assert_eq!(game.drain_events().count(), 2);
        assert!(!game.check_lost());
    }

    #[test]
    fn piece_falls_only_after_threshold() {
        let mut game = game();
        place(&mut game, ShapeName::O, 4, 0);

        game.tick(Duration::from_millis(100), &[]).unwrap();
        assert_eq!(game.current_piece().y, 0);
        assert_eq!(game.fall_accumulator(), Duration::from_millis(100));

        game.tick(Duration::from_millis(200), &[]).unwrap();
        assert_eq!(game.current_piece().y, 1);
        assert_eq!(game.fall_accumulator(), Duration::ZERO);
    }

    #[test]
    fn blocked_input_is_undone() {
        let mut game = game();
        place(&mut game, ShapeName::O, 0, 5);

        game.tick(QUICK, &[InputEvent::MoveLeft]).unwrap();
        assert_eq!(game.current_piece().x, 0);

        game.tick(QUICK, &[InputEvent::MoveRight, InputEvent::SoftDrop])
            .unwrap();
        assert_eq!((game.current_piece().x, game.current_piece().y), (1, 6));
    }

    #[test]
    fn falling_piece_is_painted_but_not_locked() {
        let mut game = game();
        place(&mut game, ShapeName::O, 2, 3);
        game.tick(QUICK, &[]).unwrap();

        let color = ShapeName::O.color();
        assert_eq!(game.grid().get(2, 3), Some(color));
        assert_eq!(game.grid().get(3, 4), Some(color));
        assert_eq!(game.grid().get(4, 4), Some(GRID_BACKGROUND));
        assert!(game.locked_cells().is_empty());
    }

    #[test]
    fn landing_locks_and_promotes_next_piece() {
        let mut game = game();
        place(&mut game, ShapeName::O, 4, GRID_HEIGHT - 2);
        let next = game.next_piece().clone();
        game.drain_events().for_each(drop);

        game.tick(FALL, &[]).unwrap();

        let color = ShapeName::O.color();
        for cell in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(game.locked_cells().get(cell), Some(color));
        }
        assert_eq!(game.current_piece(), &next);
        assert!(!game.check_lost());

        let events: Vec<_> = game.drain_events().collect();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::Locked { locked_total: 4, .. }, GameEvent::Spawned { .. }]
        ));
    }

    #[test]
    fn lock_above_top_is_a_loss() {
        let locked: LockedCells = (0..GRID_HEIGHT)
            .map(|y| ((4, y), Rgb::new(9, 9, 9)))
            .collect();
        let mut game = game().with_locked(locked);
        place(&mut game, ShapeName::O, 4, -2);

        game.tick(FALL, &[]).unwrap();
        assert!(game.check_lost());
        assert_eq!(game.locked_cells().get((5, -1)), Some(ShapeName::O.color()));
    }

    #[test]
    fn quit_still_finishes_the_frame() {
        let mut game = game();
        place(&mut game, ShapeName::O, 4, 4);
        let outcome = game
            .tick(QUICK, &[InputEvent::Quit, InputEvent::MoveRight])
            .unwrap();
        assert_eq!(outcome, TickOutcome::Quit);
        assert_eq!(game.current_piece().x, 5);
    }
}
