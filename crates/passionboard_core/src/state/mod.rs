//! Session state: snapshot value and its owning store.
//!
//! # Responsibility
//! - Define the `BoardState` snapshot handlers operate on.
//! - Provide the whole-snapshot-replace store contract of the board.

pub mod board;
pub mod store;
