//! Terminal implementation of the core renderer collaborator.

use anyhow::Result;
use crossterm::terminal;

use crate::core::{Piece, PlayfieldGrid, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

pub struct TerminalFrontend {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self {
            view: GameView::default(),
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(DEFAULT_VIEWPORT.width, DEFAULT_VIEWPORT.height),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Renderer for TerminalFrontend {
    fn render(&mut self, grid: &PlayfieldGrid, next: &Piece) -> Result<()> {
        let viewport = terminal::size()
            .map(|(w, h)| Viewport::new(w, h))
            .unwrap_or(DEFAULT_VIEWPORT);
        self.view.render_into(grid, next, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
