//! GameView: maps the playfield grid and next piece into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{project, Piece, PlayfieldGrid, ProjectedCells};
use crate::fb::{FrameBuffer, Style};
use crate::types::{
    Rgb, FONT_COLOR, GRID_BACKGROUND, GRID_BORDER, GRID_HEIGHT, GRID_WIDTH, LAYOUT_HEIGHT,
    TITLE_COLOR, WINDOW_BACKGROUND,
};

const TITLE: &str = "SUPA TETRIS";
const NEXT_LABEL: &str = "NEXT PIECE";
/// Rows reserved above the playfield frame for the title.
const TITLE_ROWS: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Top-left corner of the playfield frame for `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h + TITLE_ROWS) / 2 + TITLE_ROWS;
        (x, y)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(
        &self,
        grid: &PlayfieldGrid,
        next: &Piece,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let title = Style::new(TITLE_COLOR, WINDOW_BACKGROUND).bold();
        let title_x = start_x + frame_w.saturating_sub(TITLE.len() as u16) / 2;
        fb.put_str(title_x, start_y.saturating_sub(TITLE_ROWS), TITLE, title);

        let border = Style::new(GRID_BORDER, WINDOW_BACKGROUND);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in grid.rows().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(start_x + 1, start_y + 1, x as u16, y as u16);
                self.draw_cell(fb, px, py, color);
            }
        }

        self.draw_next_panel(fb, next, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &PlayfieldGrid, next: &Piece, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, next, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, origin_x: u16, origin_y: u16, x: u16, y: u16) -> (u16, u16) {
        (origin_x + x * self.cell_w, origin_y + y * self.cell_h)
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, color: Rgb) {
        if color == GRID_BACKGROUND {
            // Gridline dot.
            let style = Style::new(FONT_COLOR, GRID_BACKGROUND).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(px, py, '·', style);
        } else {
            let style = Style::new(color, GRID_BACKGROUND).bold();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_next_panel(
        &self,
        fb: &mut FrameBuffer,
        next: &Piece,
        viewport: Viewport,
        panel_x: u16,
        panel_y: u16,
    ) {
        let box_w = (NEXT_LABEL.len() as u16).max(LAYOUT_HEIGHT as u16 * self.cell_w);
        if panel_x.saturating_add(box_w) > viewport.width {
            return;
        }

        fb.put_str(
            panel_x,
            panel_y,
            NEXT_LABEL,
            Style::new(FONT_COLOR, WINDOW_BACKGROUND).bold(),
        );

        let style = Style::new(next.color(), WINDOW_BACKGROUND).bold();
        for &(x, y) in preview_cells(next).iter() {
            let (px, py) = self.cell_origin(panel_x, panel_y + 2, x as u16, y as u16);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

/// Projected cells of `piece`, shifted so the top-left cell is at (0, 0).
pub fn preview_cells(piece: &Piece) -> ProjectedCells {
    let mut cells = project(piece);
    let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
    for cell in cells.iter_mut() {
        cell.0 -= min_x;
        cell.1 -= min_y;
    }
    cells
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
