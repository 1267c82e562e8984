//! Core command handlers.
//!
//! # Responsibility
//! - Map user intents to next-state snapshots.
//! - Keep the rendering layer decoupled from state-transition details.

pub mod board_service;
pub mod color;
