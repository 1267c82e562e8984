//! Domain model for the passion board.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one passion-centric shape for every UI projection.
//!
//! # Invariants
//! - Every domain object is identified by a stable `PassionId`.
//! - A task belongs to exactly one passion and is ordered within it.

pub mod passion;
