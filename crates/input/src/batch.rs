//! Per-frame action batch.
//!
//! Key presses are collected between two frames and applied, in arrival
//! order, before the next tick. The batch is fixed-capacity so the input path
//! never allocates; presses beyond the capacity in a single frame are dropped.

use arrayvec::ArrayVec;

use crate::types::GameAction;

/// Most actions kept for one frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct ActionBatch {
    actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    dropped: u32,
}

impl ActionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action. Returns `false` if the batch is full.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.actions.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Presses dropped because the batch was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Take the queued actions in arrival order, leaving the batch empty.
    pub fn drain(&mut self) -> impl Iterator<Item = GameAction> + '_ {
        self.dropped = 0;
        self.actions.drain(..)
    }
}
