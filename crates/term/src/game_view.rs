//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{shape_of, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SHAPE_GRID};

const SCREEN_BG: Rgb = Rgb::new(18, 18, 18);
const WELL_BG: Rgb = Rgb::new(33, 37, 41);
const GRID_FG: Rgb = Rgb::new(73, 80, 87);
const TEXT_PRIMARY: Rgb = Rgb::new(248, 249, 250);
const TEXT_SECONDARY: Rgb = Rgb::new(173, 181, 189);
const ACCENT: Rgb = Rgb::new(13, 202, 240);

/// Minimum panel width for the side panel to be drawn at all
const PANEL_MIN_W: u16 = 12;

const CONTROLS: [&str; 8] = [
    "A/D    Move",
    "S      Soft drop",
    "W/E    Rotate",
    "Q      Rotate back",
    "Enter  Hard drop",
    "Space  Pause",
    "R      Restart",
    "Esc    Quit",
];

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the well sits inside a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellLayout {
    /// Top-left corner of the border
    pub start_x: u16,
    pub start_y: u16,
    /// Border size including the border itself
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Piece color, one per kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(79, 172, 254),
        PieceKind::O => Rgb::new(255, 230, 109),
        PieceKind::T => Rgb::new(186, 85, 211),
        PieceKind::S => Rgb::new(102, 187, 106),
        PieceKind::Z => Rgb::new(239, 83, 80),
        PieceKind::J => Rgb::new(92, 107, 192),
        PieceKind::L => Rgb::new(255, 167, 38),
    }
}

/// A lightweight terminal view of one game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> WellLayout {
        let frame_w = u16::from(BOARD_WIDTH) * self.cell_w + 2;
        let frame_h = u16::from(BOARD_HEIGHT) * self.cell_h + 2;
        // Leave room for the side panel to the right of the well.
        let total_w = frame_w + 2 + 20;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        WellLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Screen position of the top-left glyph of board cell `(x, y)`
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let layout = self.layout(viewport);
        (
            layout.start_x + 1 + x * self.cell_w,
            layout.start_y + 1 + y * self.cell_h,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT_PRIMARY, SCREEN_BG).cell(' '));

        let layout = self.layout(viewport);
        self.draw_border(fb, layout);
        self.draw_board(fb, snap, layout);
        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over {
            self.draw_overlay(fb, layout, "GAME OVER", Some(snap.score), "SPACE to restart");
        } else if snap.paused {
            self.draw_overlay(fb, layout, "PAUSED", None, "SPACE to resume");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: WellLayout) {
        let WellLayout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        let style = CellStyle::new(GRID_FG, SCREEN_BG);

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: WellLayout) {
        let empty = CellStyle::new(GRID_FG, WELL_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (cx, cy) = (x as u16, y as u16);
                match cell.kind() {
                    Some(kind) => self.draw_block(fb, layout, cx, cy, kind),
                    None => self.fill_cell(fb, layout, cx, cy, '·', empty),
                }
            }
        }

        let Some(active) = snap.active else {
            return;
        };
        if let Some(ghost_y) = snap.ghost_y {
            let ghost = CellStyle::new(piece_color(active.kind), WELL_BG).dim();
            for (x, y) in active.cells_at(ghost_y) {
                if let Some((cx, cy)) = on_board(x, y) {
                    self.fill_cell(fb, layout, cx, cy, '░', ghost);
                }
            }
        }
        for (x, y) in active.cells() {
            if let Some((cx, cy)) = on_board(x, y) {
                self.draw_block(fb, layout, cx, cy, active.kind);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: WellLayout, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), WELL_BG).bold();
        self.fill_cell(fb, layout, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: WellLayout,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + x * self.cell_w;
        let py = layout.start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: WellLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(TEXT_SECONDARY, SCREEN_BG);
        let value = CellStyle::new(TEXT_PRIMARY, SCREEN_BG).bold();

        let mut y = layout.start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
            ("HIGH", snap.high_score),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let grid = shape_of(snap.next, 0);
        let block = CellStyle::new(piece_color(snap.next), SCREEN_BG).bold();
        // Top grid row is empty for every spawn state.
        for row in 1..SHAPE_GRID {
            for col in 0..SHAPE_GRID {
                if grid.is_filled(row, col) {
                    let px = panel_x + col as u16 * self.cell_w;
                    fb.fill_rect(px, y, self.cell_w, 1, '█', block);
                }
            }
            y += 1;
        }

        y += 1;
        let legend = CellStyle::new(TEXT_SECONDARY, SCREEN_BG).dim();
        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, legend);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        layout: WellLayout,
        title: &str,
        score: Option<u32>,
        action: &str,
    ) {
        let inner_x = layout.start_x + 1;
        let inner_w = layout.frame_w - 2;
        let top = layout.start_y + layout.frame_h / 2 - 3;
        let card = CellStyle::new(TEXT_PRIMARY, SCREEN_BG);
        fb.fill_rect(inner_x, top, inner_w, 6, ' ', card);

        let centered = |text_w: u16| inner_x + inner_w.saturating_sub(text_w) / 2;

        fb.put_str(centered(text_width(title)), top + 1, title, card.bold());
        if let Some(score) = score {
            let w = 6 + digit_count(score);
            let x = fb.put_str(centered(w), top + 2, "SCORE ", card.dim());
            fb.put_u32(x, top + 2, score, card);
        }
        fb.put_str(
            centered(text_width(action)),
            top + 4,
            action,
            CellStyle::new(ACCENT, SCREEN_BG),
        );
    }
}

fn on_board(x: i8, y: i8) -> Option<(u16, u16)> {
    let inside = (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y);
    inside.then(|| (x as u16, y as u16))
}

fn text_width(s: &str) -> u16 {
    s.chars().count() as u16
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
