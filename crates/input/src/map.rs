//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an input event.
pub fn input_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(InputEvent::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(InputEvent::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(InputEvent::SoftDrop),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputEvent::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::MoveRight)
        );
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::SoftDrop)
        );

        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(InputEvent::MoveRight)
        );
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(InputEvent::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Rotate)
        );
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(InputEvent::Rotate)
        );
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(InputEvent::Rotate)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            input_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(input_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(input_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(input_event(KeyEvent::from(KeyCode::Enter)), None);
    }
}
