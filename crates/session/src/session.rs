use anyhow::Result;

use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState};
use crate::journal::{Journal, JournalEntry, JournalEvent};
use crate::types::{GameAction, Outcome};

/// A game plus its journal.
///
/// Round endings and resets are journaled as they happen. The first journal
/// write failure is kept as a warning and the journal stays off afterwards.
#[derive(Debug)]
pub struct Session {
    game: GameState,
    journal: Journal,
    warning: Option<String>,
}

impl Session {
    /// Build a session from config, opening the journal if one is configured.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let journal = match &config.journal_path {
            Some(path) => Journal::open(path)?,
            None => Journal::disabled(),
        };
        Ok(Self::with_parts(GameState::new(config.seed), journal))
    }

    pub fn with_parts(game: GameState, journal: Journal) -> Self {
        Self {
            game,
            journal,
            warning: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Apply one player action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = self.game.apply_action(action);
        if action == GameAction::Reset {
            self.log(JournalEvent::Reset);
        }
        changed
    }

    /// Advance one frame, journaling the outcome if the round ended.
    pub fn tick(&mut self) -> Option<Outcome> {
        let ended = self.game.tick();
        if let Some(event) = ended.and_then(JournalEvent::from_outcome) {
            self.log(event);
        }
        ended
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// The first journal failure, if any. Returned once.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    fn log(&mut self, event: JournalEvent) {
        let entry = JournalEntry::from_state(&self.game, event);
        if let Err(e) = self.journal.record(&entry) {
            self.warning.get_or_insert_with(|| format!("{:#}", e));
        }
    }
}
