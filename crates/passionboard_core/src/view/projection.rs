//! Render projection.
//!
//! # Responsibility
//! - Map a board snapshot to a plain-data view tree for the rendering
//!   layer to draw.
//!
//! # Invariants
//! - Projection is pure: no side effects, equal snapshots project to
//!   equal trees.
//! - A card carries a body only while its passion is expanded.

use crate::model::passion::{PassionColor, PassionId};
use crate::state::board::BoardState;
use serde::{Deserialize, Serialize};

/// Chevron direction shown in a card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chevron {
    /// Collapsed card, pointing toward expansion.
    Down,
    /// Expanded card, pointing toward collapse.
    Up,
}

/// One task row inside an expanded card.
///
/// `index` is the position the remove control reports back through
/// `Intent::RemoveTask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub index: usize,
    pub text: String,
}

/// Task-management surface of an expanded card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEditor {
    /// Current contents of the task input, bound to the pending buffer.
    pub pending_text: String,
}

/// Body of an expanded card: task list plus editor surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBody {
    pub tasks: Vec<TaskRow>,
    pub editor: TaskEditor,
}

/// One passion card descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassionCard {
    pub id: PassionId,
    pub title: String,
    pub color: PassionColor,
    pub expanded: bool,
    pub chevron: Chevron,
    /// Present only while the card is expanded.
    pub body: Option<CardBody>,
}

/// Add-passion modal descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDialogView {
    pub open: bool,
    /// Current contents of the title input, bound to the pending buffer.
    pub pending_title: String,
}

/// Complete view description handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cards in display order, one per passion.
    pub cards: Vec<PassionCard>,
    /// Floating add-passion trigger's modal.
    pub create_dialog: CreateDialogView,
}

/// Projects a snapshot into its view description.
pub fn project(state: &BoardState) -> BoardView {
    let cards = state
        .passions
        .iter()
        .map(|passion| {
            let body = passion.expanded.then(|| CardBody {
                tasks: passion
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(index, text)| TaskRow {
                        index,
                        text: text.clone(),
                    })
                    .collect(),
                editor: TaskEditor {
                    pending_text: state.pending_task_text.clone(),
                },
            });
            PassionCard {
                id: passion.id,
                title: passion.title.clone(),
                color: passion.color,
                expanded: passion.expanded,
                chevron: if passion.expanded {
                    Chevron::Up
                } else {
                    Chevron::Down
                },
                body,
            }
        })
        .collect();

    BoardView {
        cards,
        create_dialog: CreateDialogView {
            open: state.create_dialog.is_open(),
            pending_title: state.pending_passion_title.clone(),
        },
    }
}
