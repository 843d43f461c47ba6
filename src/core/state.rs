//! Core domain: duel lifecycle states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum DuelPhase {
    /// Waiting for a start request; nothing ticks
    #[default]
    Lobby,
    Running,
}
