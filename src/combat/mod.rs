//! Combat domain: combatant state, action control, hit resolution, respawn
//! and the opponent brain.

pub(crate) mod actions;
pub(crate) mod ai;
pub(crate) mod arena;
pub(crate) mod attacks;
pub(crate) mod components;
pub(crate) mod effects;
pub(crate) mod events;
pub(crate) mod resolve;
pub(crate) mod respawn;
mod systems;
pub(crate) mod tick;

#[cfg(test)]
mod tests;

pub use actions::{
    ActionRejection, AttackStart, begin_attack, begin_block, begin_feint, release_block,
};
pub use ai::{BrainTurn, SwingReason, think};
pub use arena::{Arena, AttackOutcome, Scoreboard};
pub use attacks::{AttackKind, ParseAttackKindError};
pub use components::{ActionState, ComboTracker, Fighter, Health, Indicator, Side, Stamina};
pub use effects::{CombatEffect, EffectKind};
pub use events::{ActionRequest, FighterDefeated, FighterRespawned, StrikeResolved};
pub use resolve::{MissReason, StrikeOutcome, angle_gap_degrees, heading, resolve_strike};
pub use respawn::{OpponentProfile, choose_spawn_point, difficulty_tier, respawn};
pub use tick::{Respawned, advance};

use bevy::prelude::*;

use crate::combat::systems::{apply_player_requests, run_opponent_brain, tick_arena};
use crate::core::DuelSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Arena>()
            .add_message::<ActionRequest>()
            .add_message::<StrikeResolved>()
            .add_message::<FighterDefeated>()
            .add_message::<FighterRespawned>()
            .add_systems(FixedUpdate, tick_arena.in_set(DuelSet::Timers))
            .add_systems(FixedUpdate, apply_player_requests.in_set(DuelSet::Actions))
            .add_systems(FixedUpdate, run_opponent_brain.in_set(DuelSet::Brain));
    }
}
