//! Animation timeline for one move.
//!
//! Everything is a pure function of the milliseconds since the last
//! effective move, so the same snapshot always draws the same frame.
//!
//! | Phase       | Window                          | What happens                         |
//! |-------------|---------------------------------|--------------------------------------|
//! | translate   | `0..=TRANSLATE_MS`              | tiles slide from their old cell      |
//! | appear      | `TRANSLATE_MS..+APPEAR_MS`      | spawned tiles grow in                |
//! | merge outro | `TRANSLATE_MS..=+MERGE_OUTRO_MS`| merged tiles pop to their new value  |

use arrayvec::ArrayVec;

use crate::core::TileView;
use crate::types::{Offset, ANIMATION_MS, APPEAR_MS, MERGE_OUTRO_MS, TRANSLATE_MS};

/// Overshoot used by the merge pop.
const MERGE_POP: f32 = 1.10;

/// `easeOutBack`: overshoots slightly past 1 before settling.
pub fn ease_out_back(x: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let t = x - 1.0;
    1.0 + C3 * t * t * t + C1 * t * t
}

/// True while a move that happened `elapsed_ms` ago is still animating.
pub fn is_animating(elapsed_ms: u64) -> bool {
    elapsed_ms < ANIMATION_MS as u64
}

/// Fraction of the slide still left to travel (1 at the start, 0 once done).
pub fn translate_remaining(elapsed_ms: u64) -> f32 {
    (1.0 - elapsed_ms as f32 / TRANSLATE_MS as f32).max(0.0)
}

/// One drawable tile: a value, a displacement in cells from its board slot,
/// and a scale factor around the slot center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub value: u32,
    /// Columns.
    pub dx: f32,
    /// Rows.
    pub dy: f32,
    pub scale: f32,
}

impl Sprite {
    fn at_rest(value: u32) -> Self {
        Self {
            value,
            dx: 0.0,
            dy: 0.0,
            scale: 1.0,
        }
    }

    fn sliding(value: u32, offset: Offset, remaining: f32) -> Self {
        Self {
            value,
            dx: -(offset.col as f32) * remaining,
            dy: -(offset.row as f32) * remaining,
            scale: 1.0,
        }
    }
}

/// Sprites for one cell, back to front.
///
/// A merged cell yields two: the absorbed tile sliding in underneath, then
/// the survivor. Empty cells and freshly spawned tiles still waiting for the
/// translate phase to end yield nothing.
pub fn tile_sprites(view: &TileView, elapsed_ms: u64) -> ArrayVec<Sprite, 2> {
    let mut out = ArrayVec::new();
    if view.is_empty() {
        return out;
    }

    let value = view.value();
    let motion = view.motion;
    let translate = TRANSLATE_MS as u64;
    let remaining = translate_remaining(elapsed_ms);

    if motion.is_new {
        if elapsed_ms <= translate {
            return out;
        }
        let mut sprite = Sprite::at_rest(value);
        if elapsed_ms <= translate + APPEAR_MS as u64 {
            let t = (elapsed_ms - translate) as f32 / APPEAR_MS as f32;
            sprite.scale = ease_out_back(t);
        }
        out.push(sprite);
        return out;
    }

    if motion.was_merged() {
        let outro_end = translate + MERGE_OUTRO_MS as u64;
        if elapsed_ms <= outro_end {
            out.push(Sprite::sliding(value / 2, motion.merged_from_offset, remaining));
        }

        let mut survivor = Sprite::sliding(value, motion.previous_offset, remaining);
        if elapsed_ms < translate {
            survivor.value = value / 2;
        } else if elapsed_ms <= outro_end {
            let t = (elapsed_ms - translate) as f32 / MERGE_OUTRO_MS as f32;
            survivor.scale = MERGE_POP * ease_out_back(t);
        }
        out.push(survivor);
        return out;
    }

    out.push(Sprite::sliding(value, motion.previous_offset, remaining));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Tile, TileMotion};

    fn view(value: u32, motion: TileMotion) -> TileView {
        TileView {
            tile: Tile::new(value),
            motion,
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_ease_out_back_endpoints() {
        assert!(approx(ease_out_back(0.0), 0.0));
        assert!(approx(ease_out_back(1.0), 1.0));
        // Overshoots in the middle.
        assert!(ease_out_back(0.8) > 1.0);
    }

    #[test]
    fn test_animation_window() {
        assert!(is_animating(0));
        assert!(is_animating(199));
        assert!(!is_animating(200));
    }

    #[test]
    fn test_empty_cell_draws_nothing() {
        assert!(tile_sprites(&TileView::default(), 0).is_empty());
    }

    #[test]
    fn test_still_tile_rests_in_place() {
        let s = tile_sprites(&view(8, TileMotion::STILL), 10);
        assert_eq!(s.as_slice(), &[Sprite::at_rest(8)]);
    }

    #[test]
    fn test_moving_tile_starts_at_previous_cell() {
        let motion = TileMotion {
            previous_offset: Offset::new(0, -3),
            ..TileMotion::STILL
        };
        let start = tile_sprites(&view(4, motion), 0)[0];
        assert!(approx(start.dx, 3.0));
        assert!(approx(start.dy, 0.0));

        let half = tile_sprites(&view(4, motion), 50)[0];
        assert!(approx(half.dx, 1.5));

        let done = tile_sprites(&view(4, motion), 150)[0];
        assert!(approx(done.dx, 0.0));
    }

    #[test]
    fn test_new_tile_waits_then_grows() {
        let v = view(2, TileMotion::SPAWNED);
        assert!(tile_sprites(&v, 0).is_empty());
        assert!(tile_sprites(&v, 100).is_empty());

        let growing = tile_sprites(&v, 130)[0];
        assert!(growing.scale > 0.0 && growing.scale < 1.2);
        assert!(approx(tile_sprites(&v, 160)[0].scale, 1.0));
        assert!(approx(tile_sprites(&v, 500)[0].scale, 1.0));
    }

    #[test]
    fn test_merge_draws_ghost_and_survivor() {
        let motion = TileMotion {
            previous_offset: Offset::ZERO,
            merged_from_offset: Offset::new(0, -1),
            is_new: false,
        };
        let v = view(4, motion);

        let early = tile_sprites(&v, 0);
        assert_eq!(early.len(), 2);
        // Ghost slides in from one cell to the right, both show the old value.
        assert_eq!(early[0].value, 2);
        assert!(approx(early[0].dx, 1.0));
        assert_eq!(early[1].value, 2);

        let pop = tile_sprites(&v, 150);
        assert_eq!(pop.len(), 2);
        assert_eq!(pop[1].value, 4);
        assert!(approx(pop[1].scale, MERGE_POP * ease_out_back(0.5)));

        let settled = tile_sprites(&v, 201);
        assert_eq!(settled.as_slice(), &[Sprite::at_rest(4)]);
    }
}
