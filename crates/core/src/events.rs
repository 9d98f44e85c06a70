//! Game events and the JSON-lines event log.
//!
//! The log is optional. When no path is configured every call is a no-op; when
//! the file cannot be written the log disables itself and play continues.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::projector::Position;
use crate::types::ShapeName;

/// Notable state transitions of a game session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Shape data failed to load; the catalog is empty.
    CatalogUnavailable { reason: String },
    /// A new upcoming piece was drawn.
    Spawned { shape: ShapeName, x: i32, y: i32 },
    /// The current piece settled into the locked cells.
    Locked {
        shape: ShapeName,
        cells: Vec<Position>,
        locked_total: usize,
    },
    /// A locked cell reached the top row.
    ToppedOut { locked_total: usize },
    /// The player asked to quit.
    Quit,
}

/// Append-only JSON-lines sink for [`GameEvent`]s.
#[derive(Debug, Default)]
pub struct EventLog {
    out: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Log that drops every event.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("couldn't open event log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Write one event as a JSON line.
    pub fn record(&mut self, event: &GameEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() || out.flush().is_err() {
            self.out = None;
        }
    }
}
