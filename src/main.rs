//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and a small full-redraw renderer. The engine has
//! no timers, so the loop blocks on the next key event instead of ticking.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, Screen, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(seed_from_clock());
    // Best score is host bookkeeping, recorded strictly after each turn.
    let mut best: u32 = 0;

    let view = GameView::default();
    let mut screen = Screen::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), best, Viewport::new(w, h), &mut screen);
        term.draw(&screen)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Move(direction)) => {
                        game.apply_move(direction);
                        best = best.max(game.score());
                    }
                    Some(GameAction::Restart) => {
                        game.reset(seed_from_clock());
                    }
                    None => {}
                }
            }
            Event::Resize(..) => {
                // Next loop iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
