//! Combat domain: AI for the autonomous opponent.

pub(crate) mod opponent;

pub use opponent::{BrainTurn, SwingReason, think};
