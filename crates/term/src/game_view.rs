//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each board slot is `cell_w x cell_h` terminal cells; the tile inside
//! leaves a one-cell gutter on its right and bottom edge. Animated sprites
//! are positioned in fractional cells and rounded to the grid, clipped to
//! the board interior.

use crate::animation::{tile_sprites, Sprite};
use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::GRID_SIZE;

/// Board background.
pub const BACKGROUND: Rgb = Rgb::hex(0x004643);
/// Empty slot fill.
pub const EMPTY_SLOT: Rgb = Rgb::hex(0x0b5550);
/// Frame and panel labels.
pub const ACCENT: Rgb = Rgb::hex(0xabd1c6);
/// Highlight used for the title and overlay.
pub const HIGHLIGHT: Rgb = Rgb::hex(0xf9bc60);

const TILE_TEXT: Rgb = Rgb::new(0, 0, 0);

/// Fill color for a tile value; everything from 2048 up shares one color.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 | 1 => HIGHLIGHT,
        2 => Rgb::hex(0xeee4da),
        4 => Rgb::hex(0xeee1c9),
        8 => Rgb::hex(0xf3b27a),
        16 => Rgb::hex(0xf69664),
        32 => Rgb::hex(0xf77c5f),
        64 => Rgb::hex(0xf75f3b),
        128 => Rgb::hex(0xedd073),
        256 => Rgb::hex(0xedcc62),
        512 => Rgb::hex(0xedc950),
        1024 => Rgb::hex(0xedc53f),
        _ => Rgb::hex(0xedc22e),
    }
}

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

/// Vertical placement of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Outer frame, border included.
    pub frame: Rect,
    /// Board interior (inside the border).
    pub inner: Rect,
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board slot width in terminal columns.
    cell_w: u16,
    /// Board slot height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x4 keeps tiles roughly square and fits "2048" with padding.
        Self::new(8, 4)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board lands in `viewport`.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let inner_w = (GRID_SIZE as u16) * self.cell_w + 1;
        let inner_h = (GRID_SIZE as u16) * self.cell_h + 1;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame: Rect::new(start_x as i32, start_y as i32, frame_w as i32, frame_h as i32),
            inner: Rect::new(
                start_x as i32 + 1,
                start_y as i32 + 1,
                inner_w as i32,
                inner_h as i32,
            ),
        }
    }

    /// Resting rectangle of the tile in slot `(row, col)`.
    pub fn tile_rect(&self, layout: &BoardLayout, row: usize, col: usize) -> Rect {
        Rect::new(
            layout.inner.x + 1 + (col as i32) * self.cell_w as i32,
            layout.inner.y + 1 + (row as i32) * self.cell_h as i32,
            self.cell_w as i32 - 1,
            self.cell_h as i32 - 1,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let clip = layout.inner;

        let board = CellStyle::new(ACCENT, BACKGROUND);
        fb.fill_rect_clipped(clip, fb.bounds(), ' ', board);
        self.draw_border(fb, layout.frame, CellStyle::new(ACCENT, Rgb::new(0, 0, 0)));

        let slot = CellStyle::new(EMPTY_SLOT, EMPTY_SLOT);
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                fb.fill_rect_clipped(self.tile_rect(&layout, r, c), clip, ' ', slot);
            }
        }

        // Static tiles first so sliding ones are drawn on top of them.
        let elapsed = snap.since_move_ms;
        for pass_moving in [false, true] {
            for r in 0..GRID_SIZE {
                for c in 0..GRID_SIZE {
                    let view = snap.view(r, c);
                    if view.motion.has_moved() != pass_moving {
                        continue;
                    }
                    let home = self.tile_rect(&layout, r, c);
                    for sprite in tile_sprites(view, elapsed) {
                        self.draw_sprite(fb, home, &sprite, clip);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout.frame);

        if snap.game_over {
            self.draw_overlay(fb, layout.frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, home: Rect, sprite: &Sprite, clip: Rect) {
        if sprite.scale <= 0.0 {
            return;
        }
        let w = home.w as f32 * sprite.scale;
        let h = home.h as f32 * sprite.scale;
        let left = home.x as f32 + sprite.dx * self.cell_w as f32 + (home.w as f32 - w) / 2.0;
        let top = home.y as f32 + sprite.dy * self.cell_h as f32 + (home.h as f32 - h) / 2.0;
        let rect = Rect::new(
            left.round() as i32,
            top.round() as i32,
            w.round() as i32,
            h.round() as i32,
        );
        if rect.is_empty() {
            return;
        }

        let fill = tile_color(sprite.value);
        fb.fill_rect_clipped(rect, clip, ' ', CellStyle::new(TILE_TEXT, fill));

        if digit_count(sprite.value) as i32 <= rect.w {
            let text = CellStyle::new(TILE_TEXT, fill).bold();
            let cx = rect.x + rect.w / 2;
            let cy = rect.y + rect.h / 2;
            fb.put_u32_centered_clipped(cx, cy, sprite.value, rect.intersect(clip), text);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Rect, style: CellStyle) {
        if frame.w < 2 || frame.h < 2 {
            return;
        }
        let (x, y) = (frame.x as u16, frame.y as u16);
        let (w, h) = (frame.w as u16, frame.h as u16);

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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Rect,
    ) {
        let panel_x = (frame.x + frame.w + 2) as u16;
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let title = CellStyle::new(HIGHLIGHT, Rgb::new(0, 0, 0)).bold();
        let label = CellStyle::new(ACCENT, Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = frame.y as u16;
        fb.put_str(panel_x, y, "2048", title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_char(panel_x, y, '#', value);
        fb.put_u32(panel_x + 1, y, snap.episode_id + 1, value);
        y = y.saturating_add(2);

        for line in ["arrows/hjkl/wasd", "drag to swipe", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Rect) {
        let style = CellStyle::new(HIGHLIGHT, BACKGROUND).bold();
        let sub = CellStyle::new(ACCENT, BACKGROUND);
        let mid_y = frame.y + frame.h / 2;
        self.put_centered(fb, frame, mid_y - 1, "GAME OVER", style);
        self.put_centered(fb, frame, mid_y + 1, "press r", sub);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, frame: Rect, y: i32, text: &str, style: CellStyle) {
        if y < 0 {
            return;
        }
        let text_w = text.chars().count() as i32;
        let x = frame.x + (frame.w - text_w).max(0) / 2;
        fb.put_str(x as u16, y as u16, text, style);
    }
}
