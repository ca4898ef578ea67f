//! Key mapping probe.
//!
//! Prints every key event crossterm reports together with the action it maps
//! to. Useful for checking what a given terminal sends. Press q or Esc to quit.

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use tui_frogger::input::{action_for_event, handle_key_event, should_quit};

fn main() -> Result<()> {
    println!("[input-test] press keys to see their mapping, q or Esc to quit");

    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if should_quit(key) {
                print!("quit\r\n");
                return Ok(());
            }

            let mapped = handle_key_event(key).map(|a| a.as_str()).unwrap_or("-");
            let applied = if action_for_event(key).is_some() {
                "applied"
            } else {
                "ignored"
            };
            print!(
                "{:?} {:?} mods={:?} -> {} ({})\r\n",
                key.kind, key.code, key.modifiers, mapped, applied
            );
        }
    }
}
