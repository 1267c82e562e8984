//! Passion domain model.
//!
//! # Responsibility
//! - Define the canonical passion record and its cosmetic color palette.
//! - Provide the fixed seed the board is rebuilt from at session start.
//!
//! # Invariants
//! - `id` is stable for the passion's lifetime and unique in the session.
//! - `title` is non-empty and immutable after creation (no rename exists).
//! - `tasks` keeps insertion order; duplicates are permitted.

use serde::{Deserialize, Serialize};

/// Stable identifier for a passion within one session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PassionId = u64;

/// Cosmetic color tag drawn from a fixed five-entry palette.
///
/// Assignment is pseudo-random at creation and carries no meaning beyond
/// card styling in the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassionColor {
    Blue,
    Green,
    Purple,
    Yellow,
    Pink,
}

/// The full palette, in the order colors are sampled from.
pub const PALETTE: [PassionColor; 5] = [
    PassionColor::Blue,
    PassionColor::Green,
    PassionColor::Purple,
    PassionColor::Yellow,
    PassionColor::Pink,
];

impl PassionColor {
    /// Returns the styling token the rendering layer maps this color to.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Purple => "bg-purple-500",
            Self::Yellow => "bg-yellow-500",
            Self::Pink => "bg-pink-500",
        }
    }
}

/// A user-defined topic/goal holding an ordered list of free-text tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passion {
    /// Session-unique identifier issued by the state's id counter.
    pub id: PassionId,
    /// Display title, non-empty after trim, immutable thereafter.
    pub title: String,
    /// Cosmetic palette tag assigned at creation.
    pub color: PassionColor,
    /// Ordered task strings; insertion order is display order.
    pub tasks: Vec<String>,
    /// Card expansion view-state, never persisted across sessions.
    pub expanded: bool,
}

impl Passion {
    /// Creates a collapsed passion with no tasks.
    ///
    /// Callers are responsible for issuing a unique `id` and for trimming
    /// and validating `title` beforehand.
    pub fn new(id: PassionId, title: impl Into<String>, color: PassionColor) -> Self {
        Self {
            id,
            title: title.into(),
            color,
            tasks: Vec::new(),
            expanded: false,
        }
    }

    fn seeded(
        id: PassionId,
        title: &str,
        color: PassionColor,
        tasks: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            color,
            tasks: tasks.iter().map(|task| task.to_string()).collect(),
            expanded: false,
        }
    }
}

/// Returns the three fixed passions every session starts from.
///
/// # Invariants
/// - Ids are 1..=3 in order.
/// - All entries start collapsed.
pub fn seed_passions() -> Vec<Passion> {
    vec![
        Passion::seeded(
            1,
            "Home Renovation",
            PassionColor::Blue,
            &["Plan layout", "Choose materials"],
        ),
        Passion::seeded(
            2,
            "Fitness Goals",
            PassionColor::Green,
            &["Set up gym schedule", "Meal prep"],
        ),
        Passion::seeded(
            3,
            "Career Development",
            PassionColor::Purple,
            &["Update resume", "Network"],
        ),
    ]
}
