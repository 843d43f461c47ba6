//! Combat domain: geometric hit detection and damage application.

use bevy::prelude::*;

use crate::combat::attacks::AttackKind;
use crate::combat::components::Fighter;
use crate::content::CombatParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    OutOfRange,
    OutOfArc,
    TargetInvulnerable,
    TargetDead,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrikeOutcome {
    Miss(MissReason),
    Blocked {
        stamina_lost: f32,
    },
    Hit {
        damage: u32,
        /// Combo count after this hit
        combo: u32,
        /// True when the hit extended a running combo
        chained: bool,
        lethal: bool,
    },
}

impl StrikeOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            StrikeOutcome::Hit { damage, .. } => *damage,
            _ => 0,
        }
    }

    pub fn is_lethal(&self) -> bool {
        matches!(self, StrikeOutcome::Hit { lethal: true, .. })
    }
}

/// Direction from `from` to `to`, in radians.
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Smallest angle between two directions, in degrees within `[0, 180]`.
pub fn angle_gap_degrees(a: f32, b: f32) -> f32 {
    let gap = (a - b).to_degrees().rem_euclid(360.0);
    if gap > 180.0 { 360.0 - gap } else { gap }
}

/// Resolve a swing the instant it starts. `direction` is where the attacker
/// is swinging, in radians.
pub fn resolve_strike(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    kind: AttackKind,
    direction: f32,
    now: u64,
    params: &CombatParams,
) -> StrikeOutcome {
    let profile = params.attack(kind);

    if attacker.position.distance(defender.position) > profile.range {
        return StrikeOutcome::Miss(MissReason::OutOfRange);
    }

    let to_defender = heading(attacker.position, defender.position);
    if angle_gap_degrees(to_defender, direction) > profile.attack_half_arc {
        return StrikeOutcome::Miss(MissReason::OutOfArc);
    }

    if !defender.is_alive() {
        return StrikeOutcome::Miss(MissReason::TargetDead);
    }
    if defender.is_invulnerable() {
        return StrikeOutcome::Miss(MissReason::TargetInvulnerable);
    }

    if let Some(block_angle) = defender.action.block_angle() {
        let to_attacker = heading(defender.position, attacker.position);
        if angle_gap_degrees(to_attacker, block_angle) <= profile.block_half_arc {
            let before = defender.stamina.current;
            defender.stamina.spend(params.stamina.block_cost);
            defender.hit_stun_ms = params.timing.block_stun_ms;
            return StrikeOutcome::Blocked {
                stamina_lost: before - defender.stamina.current,
            };
        }
    }

    let chained = attacker
        .combo
        .register_hit(now, params.timing.combo_window_ms);
    let bonus = if chained {
        (attacker.combo.count * params.combo.bonus_per_hit).min(params.combo.max_bonus)
    } else {
        0
    };
    let damage = profile.damage + bonus;

    defender.health.take_damage(damage);
    defender.hit_stun_ms = params.timing.hit_stun_ms;

    let lethal = defender.health.is_depleted();
    if lethal {
        defender.fall(now);
    }

    StrikeOutcome::Hit {
        damage,
        combo: attacker.combo.count,
        chained,
        lethal,
    }
}
