//! Outcome journal.
//!
//! One JSON object per line, appended to a file:
//!
//! ```text
//! {"episode":1,"tick":412,"event":"splat","x":380.0,"y":420.0}
//! {"episode":2,"tick":0,"event":"reset","x":380.0,"y":600.0}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::types::{LossCause, Outcome};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalEvent {
    Won,
    Splat,
    Splash,
    Reset,
}

impl JournalEvent {
    /// The event recorded for a round ending with `outcome`.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Playing => None,
            Outcome::Won => Some(Self::Won),
            Outcome::Lost(LossCause::Splat) => Some(Self::Splat),
            Outcome::Lost(LossCause::Splash) => Some(Self::Splash),
        }
    }
}

/// One journal line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub episode: u32,
    pub tick: u64,
    pub event: JournalEvent,
    pub x: f32,
    pub y: f32,
}

impl JournalEntry {
    /// Entry for `event` at the game's current episode, tick and frog position.
    pub fn from_state(game: &GameState, event: JournalEvent) -> Self {
        let frog = game.frog();
        Self {
            episode: game.episode_id(),
            tick: game.tick_count(),
            event,
            x: frog.x,
            y: frog.y,
        }
    }
}

/// Append-only JSON-lines writer. A disabled journal accepts and drops entries.
#[derive(Debug)]
pub struct Journal {
    file: Option<File>,
    path: Option<PathBuf>,
    buf: Vec<u8>,
}

impl Journal {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn disabled() -> Self {
        Self {
            file: None,
            path: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one entry.
    ///
    /// On a write error the journal disables itself and returns the error;
    /// later calls are no-ops.
    pub fn record(&mut self, entry: &JournalEntry) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, entry).context("failed to encode journal entry")?;
        self.buf.push(b'\n');

        if let Err(e) = file.write_all(&self.buf).and_then(|_| file.flush()) {
            self.file = None;
            let shown = self
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            return Err(e).with_context(|| format!("failed to write journal {}", shown));
        }
        Ok(())
    }
}

/// Read every entry from a journal file.
pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<JournalEntry>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open journal {}", path.display()))?;

    let mut entries = Vec::new();
    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: bad journal line", path.display(), n + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("tui-frogger-{}-{}.jsonl", name, std::process::id()));
        let _ = std::fs::remove_file(&p);
        p
    }

    #[test]
    fn test_event_from_outcome() {
        assert_eq!(JournalEvent::from_outcome(Outcome::Playing), None);
        assert_eq!(JournalEvent::from_outcome(Outcome::Won), Some(JournalEvent::Won));
        assert_eq!(
            JournalEvent::from_outcome(Outcome::Lost(LossCause::Splash)),
            Some(JournalEvent::Splash)
        );
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = JournalEntry {
            episode: 3,
            tick: 12,
            event: JournalEvent::Splat,
            x: 380.0,
            y: 420.0,
        };
        let v = serde_json::to_value(entry).unwrap();
        assert_eq!(v["event"], "splat");
        assert_eq!(v["episode"], 3);
        assert_eq!(v["tick"], 12);
        assert_eq!(v["y"], 420.0);
    }

    #[test]
    fn test_disabled_journal_drops_entries() {
        let mut j = Journal::disabled();
        assert!(!j.is_enabled());
        let game = GameState::new(1);
        j.record(&JournalEntry::from_state(&game, JournalEvent::Reset))
            .unwrap();
    }

    #[test]
    fn test_appends_lines() {
        let path = temp_path("append");
        let game = GameState::new(1);
        {
            let mut j = Journal::open(&path).unwrap();
            j.record(&JournalEntry::from_state(&game, JournalEvent::Won))
                .unwrap();
        }
        {
            let mut j = Journal::open(&path).unwrap();
            j.record(&JournalEntry::from_state(&game, JournalEvent::Reset))
                .unwrap();
        }

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, JournalEvent::Won);
        assert_eq!(entries[1].event, JournalEvent::Reset);
        assert_eq!((entries[0].x, entries[0].y), (380.0, 600.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_missing_dir_is_error() {
        let mut p = std::env::temp_dir();
        p.push("tui-frogger-no-such-dir");
        p.push("deeper");
        p.push("journal.jsonl");
        assert!(Journal::open(&p).is_err());
    }
}
