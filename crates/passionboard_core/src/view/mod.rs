//! View projection of board state.
//!
//! # Responsibility
//! - Describe what the rendering layer should draw, as plain data.
//! - Make no assumption about how the description is drawn.

pub mod projection;
