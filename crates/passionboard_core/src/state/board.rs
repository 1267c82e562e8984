//! Board state snapshot.
//!
//! # Responsibility
//! - Hold the whole interactive state of one session as a single value.
//! - Provide the fixed seed snapshot the session starts from.
//!
//! # Invariants
//! - `next_passion_id` is strictly greater than every id in `passions`.
//! - Handlers never mutate a snapshot in place; they build the next one.

use crate::model::passion::{seed_passions, Passion, PassionId};
use serde::{Deserialize, Serialize};

/// Creation-dialog interaction state.
///
/// Modeled as an explicit enum rather than a transient view flag so the
/// full open, type, submit/cancel interaction is testable without any
/// rendering layer attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateDialog {
    Closed,
    Open,
}

impl CreateDialog {
    /// Returns whether the add-passion modal should be drawn.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Immutable snapshot of the entire board at one instant.
///
/// Ids are issued from `next_passion_id`, a monotonic counter carried in
/// the snapshot itself. The counter never re-issues a value within a
/// session, so ids stay unique even if passion deletion is added later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Ordered list of passions; append order is display order.
    pub passions: Vec<Passion>,
    /// Text buffer behind the add-passion modal input.
    pub pending_passion_title: String,
    /// Text buffer behind the task-editor input.
    pub pending_task_text: String,
    /// Passion most recently targeted by a task command.
    pub target_passion_id: Option<PassionId>,
    /// Add-passion modal interaction state.
    pub create_dialog: CreateDialog,
    /// Next id to issue; strictly greater than every existing id.
    pub next_passion_id: PassionId,
}

impl BoardState {
    /// Builds the seed snapshot every session starts from.
    pub fn seeded() -> Self {
        let passions = seed_passions();
        let next_passion_id = passions.len() as PassionId + 1;
        Self {
            passions,
            pending_passion_title: String::new(),
            pending_task_text: String::new(),
            target_passion_id: None,
            create_dialog: CreateDialog::Closed,
            next_passion_id,
        }
    }

    /// Builds an empty snapshot, used by tests and embedders that supply
    /// their own starting list.
    pub fn empty() -> Self {
        Self {
            passions: Vec::new(),
            pending_passion_title: String::new(),
            pending_task_text: String::new(),
            target_passion_id: None,
            create_dialog: CreateDialog::Closed,
            next_passion_id: 1,
        }
    }

    /// Looks up one passion by id.
    pub fn passion(&self, id: PassionId) -> Option<&Passion> {
        self.passions.iter().find(|passion| passion.id == id)
    }

    /// Returns whether an id is present in the current list.
    pub fn contains(&self, id: PassionId) -> bool {
        self.passion(id).is_some()
    }
}
