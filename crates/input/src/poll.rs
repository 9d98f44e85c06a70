//! Non-blocking drain of the terminal event queue.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::InputSource;
use crate::map::input_event;
use crate::types::InputEvent;

/// Translate raw terminal events, keeping key presses that map to a command.
///
/// Releases and auto-repeats are dropped, as are unmapped keys and non-key events.
pub fn collect_events(events: impl IntoIterator<Item = Event>, out: &mut Vec<InputEvent>) {
    for ev in events {
        let Event::Key(key) = ev else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(input) = input_event(key) {
            out.push(input);
        }
    }
}

/// Input collaborator backed by the crossterm event queue.
#[derive(Debug, Default)]
pub struct TerminalInput {
    raw: Vec<Event>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        self.raw.clear();
        while event::poll(Duration::ZERO)? {
            self.raw.push(event::read()?);
        }
        collect_events(self.raw.drain(..), out);
        Ok(())
    }
}
