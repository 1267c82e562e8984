//! Core domain logic for PassionBoard.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::passion::{seed_passions, Passion, PassionColor, PassionId, PALETTE};
pub use service::board_service::{BoardService, Intent};
pub use service::color::{ColorSource, RandomColorSource, ScriptedColorSource};
pub use state::board::{BoardState, CreateDialog};
pub use state::store::StateStore;
pub use view::projection::{
    project, BoardView, CardBody, Chevron, CreateDialogView, PassionCard, TaskEditor, TaskRow,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
