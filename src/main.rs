//! Terminal runner (default binary).
//!
//! Loads the shape data, builds the game state and drives it with terminal
//! input and the framebuffer renderer until the player quits or tops out.

use anyhow::{Context, Result};

use supa_tetris::core::{
    run_game, EventLog, GameConfig, GameEvent, GameOver, GameState, ShapeCatalog, ShapePicker,
    SystemClock,
};
use supa_tetris::input::TerminalInput;
use supa_tetris::term::TerminalFrontend;

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            eprintln!("[Game] Event log disabled: {e:#}");
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let (catalog, load_error) = ShapeCatalog::load_or_empty(&config.shapes_path);
    if let Some(err) = &load_error {
        eprintln!(
            "[Shapes] Could not load {}: {err}",
            config.shapes_path.display()
        );
        log.record(&GameEvent::CatalogUnavailable {
            reason: err.to_string(),
        });
    }

    // An empty catalog fails here, before the terminal is touched.
    let mut game = GameState::new(catalog, ShapePicker::new(config.seed), config.fall_speed)
        .context("cannot start a game without shape data")?;

    let mut frontend = TerminalFrontend::new();
    frontend.enter()?;

    let result = run_game(
        &mut game,
        &mut TerminalInput::new(),
        &mut frontend,
        &mut SystemClock::new(config.frame),
        &mut log,
    );

    // Always try to restore terminal state.
    let _ = frontend.exit();

    match result? {
        GameOver::Quit => eprintln!("[Game] Quit"),
        GameOver::ToppedOut => eprintln!(
            "[Game] Topped out with {} locked cells",
            game.locked_cells().len()
        ),
    }
    Ok(())
}
