//! Combat domain: returning a downed combatant and scaling the opponent with
//! the player's kill count.

use bevy::prelude::*;

use crate::combat::components::{ActionState, Fighter};
use crate::content::{ArenaLayout, CombatParams, DifficultyCurve};

/// 1-based difficulty tier for a kill count.
pub fn difficulty_tier(kills: u32, curve: &DifficultyCurve) -> u32 {
    kills / curve.kills_per_tier.max(1) + 1
}

/// Tuning the opponent brain runs with. Recomputed whenever the opponent
/// comes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentProfile {
    pub speed: f32,
    pub attack_cooldown_ms: u64,
    pub attack_range: f32,
}

impl OpponentProfile {
    pub fn base(curve: &DifficultyCurve) -> Self {
        Self {
            speed: curve.base_speed,
            attack_cooldown_ms: curve.base_cooldown_ms,
            attack_range: curve.base_range,
        }
    }

    /// Speed and range grow with each tier while the cooldown shrinks. Each
    /// stops at its cap.
    pub fn for_kills(kills: u32, curve: &DifficultyCurve) -> Self {
        let tier = difficulty_tier(kills, curve);
        Self {
            speed: (curve.base_speed + curve.speed_per_tier * tier as f32).min(curve.max_speed),
            attack_cooldown_ms: curve
                .base_cooldown_ms
                .saturating_sub(curve.cooldown_step_ms.saturating_mul(tier as u64))
                .max(curve.min_cooldown_ms),
            attack_range: (curve.base_range + curve.range_per_tier * tier as f32)
                .min(curve.max_range),
        }
    }
}

/// First candidate farther than the minimum distance from the other
/// combatant, or the fallback point when none qualifies.
pub fn choose_spawn_point(other: Vec2, layout: &ArenaLayout) -> Vec2 {
    layout
        .spawn_points
        .iter()
        .map(|point| Vec2::from(*point))
        .find(|candidate| candidate.distance(other) > layout.min_spawn_distance)
        .unwrap_or_else(|| layout.fallback_spawn.into())
}

/// Bring a downed combatant back with full vitals and a grace window.
pub fn respawn(fighter: &mut Fighter, other: Vec2, params: &CombatParams) {
    let position = choose_spawn_point(other, &params.arena);
    fighter.position = position;
    fighter.move_target = position;
    fighter.health.restore();
    fighter.stamina.refill();
    fighter.defeated_at = None;
    fighter.action = ActionState::Idle;
    fighter.swing_progress = 0.0;
    fighter.hit_stun_ms = 0;
    fighter.invulnerable_ms = params.timing.respawn_invulnerability_ms;
}
