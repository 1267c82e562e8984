//! Board command handlers.
//!
//! # Responsibility
//! - Turn user intents into next-state snapshots, one synchronous step
//!   per intent.
//! - Enforce the silent-rejection contract for degenerate input.
//!
//! # Invariants
//! - Handlers never mutate the input snapshot; they return a new value.
//! - A rejected command returns a state equal to its input.
//! - Every issued passion id comes from the snapshot's monotonic counter.

use crate::model::passion::{Passion, PassionId};
use crate::service::color::ColorSource;
use crate::state::board::{BoardState, CreateDialog};
use log::{debug, info};

/// Discrete user-originated event fed into the command dispatcher.
///
/// This enum is the whole inbound boundary of the core; the rendering
/// layer translates clicks and text changes into these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit the add-passion modal with a title.
    CreatePassion { title: String },
    /// Append a task to one passion's list.
    AddTask { passion_id: PassionId, text: String },
    /// Remove one task from one passion's list by position.
    RemoveTask { passion_id: PassionId, index: usize },
    /// Flip one passion card between collapsed and expanded.
    ToggleExpansion { passion_id: PassionId },
    /// Replace the add-passion modal's text buffer.
    SetPendingTitle { text: String },
    /// Replace the task editor's text buffer.
    SetPendingTask { text: String },
    /// Open the add-passion modal.
    OpenCreateDialog,
    /// Close the add-passion modal, keeping any typed text.
    CloseCreateDialog,
}

/// Command-handler facade over the board state.
///
/// Generic over the color seam so tests can script color assignment
/// while production samples from the palette uniformly.
pub struct BoardService<C: ColorSource> {
    colors: C,
}

impl<C: ColorSource> BoardService<C> {
    /// Creates a service using the provided color source.
    pub fn new(colors: C) -> Self {
        Self { colors }
    }

    /// Applies one intent, returning the next snapshot.
    pub fn apply(&mut self, state: &BoardState, intent: Intent) -> BoardState {
        match intent {
            Intent::CreatePassion { title } => self.create_passion(state, &title),
            Intent::AddTask { passion_id, text } => self.add_task(state, passion_id, &text),
            Intent::RemoveTask { passion_id, index } => {
                self.remove_task(state, passion_id, index)
            }
            Intent::ToggleExpansion { passion_id } => self.toggle_expansion(state, passion_id),
            Intent::SetPendingTitle { text } => self.set_pending_title(state, text),
            Intent::SetPendingTask { text } => self.set_pending_task(state, text),
            Intent::OpenCreateDialog => self.open_create_dialog(state),
            Intent::CloseCreateDialog => self.close_create_dialog(state),
        }
    }

    /// Creates a passion from the trimmed title.
    ///
    /// # Contract
    /// - Blank title after trim: silent no-op, state returned unchanged.
    /// - Otherwise: appends a collapsed passion with an empty task list,
    ///   id issued from the counter, color from the injected source;
    ///   clears the pending title and closes the creation dialog.
    pub fn create_passion(&mut self, state: &BoardState, title: &str) -> BoardState {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            debug!("event=create_passion module=service status=rejected reason=blank_title");
            return state.clone();
        }

        let id = state.next_passion_id;
        let color = self.colors.next_color();
        let mut next = state.clone();
        next.passions.push(Passion::new(id, trimmed, color));
        next.next_passion_id = id + 1;
        next.pending_passion_title.clear();
        next.create_dialog = CreateDialog::Closed;

        info!(
            "event=create_passion module=service status=ok id={} color={}",
            id,
            color.css_class()
        );
        next
    }

    /// Appends a trimmed task to the targeted passion.
    ///
    /// # Contract
    /// - Blank text after trim or unknown id: silent no-op.
    /// - Otherwise: exactly one passion's task list grows by one entry,
    ///   appended at the end; the pending task buffer is cleared and the
    ///   target id is recorded.
    pub fn add_task(
        &mut self,
        state: &BoardState,
        passion_id: PassionId,
        text: &str,
    ) -> BoardState {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!(
                "event=add_task module=service status=rejected reason=blank_text id={passion_id}"
            );
            return state.clone();
        }
        if !state.contains(passion_id) {
            debug!(
                "event=add_task module=service status=rejected reason=unknown_id id={passion_id}"
            );
            return state.clone();
        }

        let mut next = state.clone();
        for passion in &mut next.passions {
            if passion.id == passion_id {
                passion.tasks.push(trimmed.to_string());
            }
        }
        next.target_passion_id = Some(passion_id);
        next.pending_task_text.clear();

        info!("event=add_task module=service status=ok id={passion_id}");
        next
    }

    /// Removes one task from the targeted passion by position.
    ///
    /// # Contract
    /// - Unknown id or out-of-range index: silent no-op.
    /// - Otherwise: exactly one task is removed and the order of the
    ///   remaining tasks is preserved.
    pub fn remove_task(
        &mut self,
        state: &BoardState,
        passion_id: PassionId,
        index: usize,
    ) -> BoardState {
        let in_range = state
            .passion(passion_id)
            .is_some_and(|passion| index < passion.tasks.len());
        if !in_range {
            debug!(
                "event=remove_task module=service status=rejected id={passion_id} index={index}"
            );
            return state.clone();
        }

        let mut next = state.clone();
        for passion in &mut next.passions {
            if passion.id == passion_id {
                passion.tasks.remove(index);
            }
        }

        info!("event=remove_task module=service status=ok id={passion_id} index={index}");
        next
    }

    /// Flips one passion card's expansion state.
    ///
    /// Involution: applying this twice to the same id restores the
    /// original snapshot. Unknown id is a silent no-op.
    pub fn toggle_expansion(&mut self, state: &BoardState, passion_id: PassionId) -> BoardState {
        if !state.contains(passion_id) {
            debug!(
                "event=toggle_expansion module=service status=rejected \
                 reason=unknown_id id={passion_id}"
            );
            return state.clone();
        }

        let mut next = state.clone();
        for passion in &mut next.passions {
            if passion.id == passion_id {
                passion.expanded = !passion.expanded;
            }
        }
        next
    }

    /// Replaces the add-passion modal's text buffer verbatim.
    ///
    /// No trimming happens until submit, so the user sees exactly what
    /// they typed.
    pub fn set_pending_title(&mut self, state: &BoardState, text: String) -> BoardState {
        let mut next = state.clone();
        next.pending_passion_title = text;
        next
    }

    /// Replaces the task editor's text buffer verbatim.
    pub fn set_pending_task(&mut self, state: &BoardState, text: String) -> BoardState {
        let mut next = state.clone();
        next.pending_task_text = text;
        next
    }

    /// Opens the add-passion modal.
    pub fn open_create_dialog(&mut self, state: &BoardState) -> BoardState {
        let mut next = state.clone();
        next.create_dialog = CreateDialog::Open;
        next
    }

    /// Closes the add-passion modal.
    ///
    /// Any pending title text is kept, matching the behavior of a
    /// dismissed dialog whose input was never submitted.
    pub fn close_create_dialog(&mut self, state: &BoardState) -> BoardState {
        let mut next = state.clone();
        next.create_dialog = CreateDialog::Closed;
        next
    }
}
