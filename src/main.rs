//! Terminal 2048 runner (default binary).
//!
//! Polls crossterm for keys, mouse drags and resizes, drives the game clock
//! from wall time and redraws through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};

use tui_2048::config::{AppConfig, USAGE};
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit, MouseDrag};
use tui_2048::logging;
use tui_2048::term::{
    is_animating, snapshot_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer,
    Viewport,
};
use tui_2048::types::GameAction;

/// Poll interval while a move is animating (~60 fps).
const FRAME_MS: u64 = 16;
/// Poll interval once the board is settled.
const IDLE_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = AppConfig::from_env().parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };
    logging::init(&config)?;

    let mut term = TerminalRenderer::new().with_mouse_capture(config.mouse);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}

/// Wall-clock driver for the game's animation clock.
struct Clock {
    start: Instant,
    fed_ms: u64,
}

impl Clock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            fed_ms: 0,
        }
    }

    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Advance `game` to the current wall time.
    fn sync(&mut self, game: &mut GameState) -> u64 {
        let now = self.now_ms();
        let delta = now.saturating_sub(self.fed_ms);
        if delta > 0 {
            game.tick(delta.min(u32::MAX as u64) as u32);
            self.fed_ms = now;
        }
        now
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.seed_or_clock();
    let mut game = GameState::new(seed);
    info!(seed, mouse = config.mouse, "starting game");

    let view = GameView::default();
    let mut drag = MouseDrag::new(config.swipe_ms);
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut clock = Clock::new();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    loop {
        let now_ms = clock.sync(&mut game);
        game.snapshot_into(&mut snap);
        let animating = is_animating(snap.since_move_ms);

        if throttle.should_render(now_ms, snapshot_fingerprint(&snap), animating) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = Duration::from_millis(if animating { FRAME_MS } else { IDLE_MS });
        if !event::poll(timeout)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(moves = game.moves(), max_tile = game.board().max_tile(), "quit");
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => drag.handle(&mouse, clock.now_ms()),
            Event::Resize(w, h) => {
                debug!(width = w, height = h, "terminal resized");
                viewport = Viewport::new(w, h);
                term.invalidate();
                throttle.reset();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            // Stamp the move with the time it was made, not the last frame.
            clock.sync(&mut game);
            apply(&mut game, action);
        }
    }
}

fn apply(game: &mut GameState, action: GameAction) {
    let changed = game.apply_action(action);
    debug!(action = action.as_str(), changed, moves = game.moves(), "action");
}
