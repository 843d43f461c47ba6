//! Combat domain: fixed-step advancement of every timed transition.

use bevy::prelude::*;

use crate::combat::actions::side_rules;
use crate::combat::arena::Arena;
use crate::combat::components::{ActionState, Fighter, Indicator, Side};
use crate::combat::effects::prune_expired;
use crate::combat::respawn::{OpponentProfile, respawn};
use crate::content::CombatParams;

/// A combatant that came back during this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Respawned {
    pub side: Side,
    pub position: Vec2,
    /// Difficulty tier in force after the respawn
    pub tier: u32,
}

/// Advance the duel by one step of `step_ms`, with `now` already on the
/// clock. Returns the combatants that respawned.
pub fn advance(
    arena: &mut Arena,
    now: u64,
    step_ms: u64,
    params: &CombatParams,
) -> Vec<Respawned> {
    if advance_fighter(&mut arena.player, now, step_ms, params) {
        arena.indicator = Indicator::Ready;
    }
    advance_fighter(&mut arena.opponent, now, step_ms, params);

    let mut respawned = Vec::new();
    for side in [Side::Player, Side::Opponent] {
        let due = arena
            .fighter(side)
            .defeated_at
            .is_some_and(|at| now.saturating_sub(at) > params.timing.respawn_delay_ms);
        if !due {
            continue;
        }

        let other = arena.fighter(side.other()).position;
        respawn(arena.fighter_mut(side), other, params);
        match side {
            Side::Opponent => {
                arena.profile =
                    OpponentProfile::for_kills(arena.score.kills, &params.opponent.difficulty);
            }
            Side::Player => arena.indicator = Indicator::Ready,
        }
        respawned.push(Respawned {
            side,
            position: arena.fighter(side).position,
            tier: arena.tier(params),
        });
    }

    prune_expired(&mut arena.effects, now);
    respawned
}

/// Decay timers and expire actions for one combatant. Returns true when the
/// combatant fell back to a ready state this tick.
fn advance_fighter(
    fighter: &mut Fighter,
    now: u64,
    step_ms: u64,
    params: &CombatParams,
) -> bool {
    fighter.hit_stun_ms = fighter.hit_stun_ms.saturating_sub(step_ms);
    fighter.invulnerable_ms = fighter.invulnerable_ms.saturating_sub(step_ms);

    if !fighter.is_alive() {
        return false;
    }

    fighter.stamina.regenerate(params.stamina.regen_per_tick);

    let mut ready = false;
    match fighter.action {
        ActionState::Attacking { kind, started_at } => {
            let swing_ms = params.attack(kind).swing_ms.max(1);
            let step = step_ms as f32 / swing_ms as f32 * 100.0;
            fighter.swing_progress = (fighter.swing_progress + step).min(100.0);

            let duration = side_rules(fighter.side, params).attack_duration_ms;
            if now.saturating_sub(started_at) >= duration {
                fighter.action = ActionState::Idle;
                fighter.swing_progress = 0.0;
                ready = true;
            }
        }
        ActionState::Blocking { started_at, .. } => {
            let dry = fighter.stamina.drain(params.stamina.block_drain_per_tick);
            let expired = fighter.side == Side::Opponent
                && now.saturating_sub(started_at) >= params.fighters.opponent_block_ms;
            if dry || expired {
                fighter.action = ActionState::Idle;
                ready = true;
            }
        }
        ActionState::Feinting { started_at } => {
            if now.saturating_sub(started_at) > params.timing.feint_window_ms {
                fighter.action = ActionState::Idle;
                ready = true;
            }
        }
        ActionState::Idle => {}
    }

    if fighter.combo.expire(now, params.timing.combo_window_ms) && fighter.action.is_idle() {
        ready = true;
    }

    ready
}
