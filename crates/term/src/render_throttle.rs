//! Frame pacing for the terminal front end.
//!
//! While a move animates every frame is drawn. Once the board is settled a
//! frame is drawn only when something visible changed, plus an occasional
//! refresh so a clobbered terminal heals on its own.

use crate::core::GameSnapshot;

/// Hash of everything a settled frame shows.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    let mut h = snap.board_hash;
    for v in [
        snap.moves as u64,
        snap.episode_id as u64,
        snap.game_over as u64,
    ] {
        h ^= v;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Next draw happens unconditionally (e.g. after a resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// - `animating=true`: always render.
    /// - `animating=false`: render on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let render = !self.has_rendered
            || animating
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(1_000)
    }
}
