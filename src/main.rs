//! Terminal Frogger runner (default binary).
//!
//! Reads configuration from `FROGGER_*` environment variables and command-line
//! flags, then runs the game on the alternate screen until the player quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_frogger::core::GameSnapshot;
use tui_frogger::input::{action_for_event, should_quit, ActionBatch};
use tui_frogger::session::{Session, SessionConfig};
use tui_frogger::term::{FrameBuffer, GameView, TerminalRenderer};

fn main() -> Result<()> {
    let mut config = SessionConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    let mut session = Session::new(&config)?;
    match &config.journal_path {
        Some(path) => println!(
            "[Frogger] seed={} tick_ms={} journal={}",
            config.seed,
            config.tick_ms,
            path.display()
        ),
        None => println!("[Frogger] seed={} tick_ms={}", config.seed, config.tick_ms),
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(warning) = session.take_warning() {
        eprintln!("[Frogger] journal disabled: {}", warning);
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &SessionConfig) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut batch = ActionBatch::new();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        view.render_into(&snap, TerminalRenderer::viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick; drain everything already queued.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        let mut ready = event::poll(timeout)?;
        while ready {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        batch.push(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            ready = event::poll(Duration::ZERO)?;
        }

        for action in batch.drain() {
            session.apply_action(action);
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
