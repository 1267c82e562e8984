//! Whole-snapshot state store.
//!
//! # Responsibility
//! - Own the single current `BoardState` for a session.
//! - Replace it atomically with handler-produced snapshots.
//!
//! # Invariants
//! - Every observer sees the same snapshot until the next `commit`.
//! - The store never hands out a partially updated state; updates are
//!   whole-value replacement, single-threaded and synchronous.

use crate::state::board::BoardState;

/// Single source of truth for the session's board state.
#[derive(Debug, Clone)]
pub struct StateStore {
    current: BoardState,
}

impl StateStore {
    /// Creates a store holding the fixed seed snapshot.
    pub fn new() -> Self {
        Self {
            current: BoardState::seeded(),
        }
    }

    /// Creates a store holding a caller-provided snapshot.
    pub fn with_state(state: BoardState) -> Self {
        Self { current: state }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> &BoardState {
        &self.current
    }

    /// Replaces the current snapshot wholesale.
    pub fn commit(&mut self, next: BoardState) {
        self.current = next;
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
