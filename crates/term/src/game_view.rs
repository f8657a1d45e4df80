//! GameView: maps a [`RenderSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::figure::{Bitmask, ShapeKind};
use crate::core::RenderSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Cell, GameStatus, APPLE_CELL, EMPTY_CELL, FIELD_HEIGHT, FIELD_WIDTH, FIGURE_SIZE,
    SNAKE_BODY_CELL, SNAKE_HEAD_CELL,
};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// How non-zero grid values are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Values 1..=7 are figure color ids
    Figures,
    /// Values are snake body / head / apple
    Snake,
}

/// A lightweight terminal view shared by both games.
pub struct GameView {
    palette: Palette,
    /// Grid cell width in terminal columns.
    cell_w: u16,
    title: &'static str,
}

impl GameView {
    pub fn tetris() -> Self {
        Self {
            palette: Palette::Figures,
            cell_w: 2,
            title: "TETRIS",
        }
    }

    pub fn snake() -> Self {
        Self {
            palette: Palette::Snake,
            cell_w: 2,
            title: "SNAKE",
        }
    }

    /// Total frame size (field plus border), in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (FIELD_WIDTH as u16 * self.cell_w + 2, FIELD_HEIGHT as u16 + 2)
    }

    /// Render a snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &RenderSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.draw_box(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (ch, style) = self.cell_glyph(cell);
                let px = start_x + 1 + x as u16 * self.cell_w;
                fb.fill_rect(px, start_y + 1 + y as u16, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        let overlay = if snap.paused {
            Some("PAUSED")
        } else {
            match snap.status {
                GameStatus::Playing => None,
                GameStatus::GameOver => Some("GAME OVER"),
                GameStatus::Win => Some("YOU WIN"),
            }
        };
        if let Some(text) = overlay {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(
                x,
                start_y + frame_h / 2,
                text,
                CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_glyph(&self, cell: Cell) -> (char, CellStyle) {
        if cell == EMPTY_CELL {
            return ('·', CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim());
        }
        let fg = match self.palette {
            Palette::Figures => figure_color(cell),
            Palette::Snake => match cell {
                SNAKE_BODY_CELL => Rgb::new(100, 220, 120),
                SNAKE_HEAD_CELL => Rgb::new(240, 220, 80),
                APPLE_CELL => Rgb::new(220, 80, 80),
                _ => Rgb::new(200, 200, 200),
            },
        };
        ('█', CellStyle::new(fg, FIELD_BG).bold())
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RenderSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, self.title, label);
        y += 2;

        for (name, number) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LEVEL", snap.level),
            ("SPEED", snap.speed),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        if let Some(next) = &snap.next {
            fb.put_str(panel_x, y, "NEXT", label);
            self.draw_preview(fb, next, panel_x, y + 1);
        } else if snap.boosted {
            fb.put_str(panel_x, y, "BOOST", label);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, next: &Bitmask, x: u16, y: u16) {
        for (row, cells) in next.iter().enumerate().take(FIGURE_SIZE) {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == EMPTY_CELL {
                    continue;
                }
                let style = CellStyle::new(figure_color(cell), PANEL_BG);
                fb.fill_rect(x + col as u16 * self.cell_w, y + row as u16, self.cell_w, 1, '█', style);
            }
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::tetris()
    }
}

fn figure_color(id: Cell) -> Rgb {
    match ShapeKind::from_color_id(id) {
        Some(ShapeKind::I) => Rgb::new(80, 220, 220),
        Some(ShapeKind::J) => Rgb::new(80, 120, 220),
        Some(ShapeKind::L) => Rgb::new(255, 165, 0),
        Some(ShapeKind::O) => Rgb::new(240, 220, 80),
        Some(ShapeKind::S) => Rgb::new(100, 220, 120),
        Some(ShapeKind::T) => Rgb::new(200, 120, 220),
        Some(ShapeKind::Z) => Rgb::new(220, 80, 80),
        None => Rgb::new(200, 200, 200),
    }
}
