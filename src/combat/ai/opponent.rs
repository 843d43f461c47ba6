//! Combat domain: per-tick policy of the autonomous opponent.

use rand::Rng;

use crate::combat::arena::{Arena, AttackOutcome};
use crate::combat::attacks::AttackKind;
use crate::combat::components::Side;
use crate::combat::resolve::heading;
use crate::content::CombatParams;
use crate::movement::step_toward;

/// Why the opponent swung this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingReason {
    /// Attack cooldown elapsed while in range
    Pressure,
    /// Punishing a player feint
    CounterFeint,
}

/// Everything the opponent did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrainTurn {
    /// Player is out of reach (dead or invulnerable); the opponent stood still
    pub stood_down: bool,
    pub approached: bool,
    pub swing: Option<(AttackKind, SwingReason, AttackOutcome)>,
    pub raised_block: bool,
}

/// Run one decision step for the opponent. All randomness comes from `rng`.
pub fn think(arena: &mut Arena, now: u64, params: &CombatParams, rng: &mut impl Rng) -> BrainTurn {
    let mut turn = BrainTurn::default();
    if !arena.opponent.is_alive() {
        return turn;
    }

    if !arena.player.is_alive() || arena.player.is_invulnerable() {
        arena.opponent.move_target = arena.opponent.position;
        turn.stood_down = true;
        return turn;
    }

    let rules = &params.opponent;
    let profile = arena.profile;
    let player_pos = arena.player.position;
    arena.opponent.aim_angle = heading(arena.opponent.position, player_pos);

    let distance = arena.opponent.position.distance(player_pos);
    if distance <= profile.attack_range {
        arena.opponent.move_target = arena.opponent.position;

        let rested = arena
            .opponent
            .last_action_at
            .is_none_or(|last| now.saturating_sub(last) > profile.attack_cooldown_ms);
        if rested && arena.opponent.stamina.current >= rules.attack_stamina_floor {
            let kind = AttackKind::random(rng);
            if let Ok(outcome) = arena.request_attack(Side::Opponent, kind, now, params) {
                turn.swing = Some((kind, SwingReason::Pressure, outcome));
            }
        }

        if arena.player.action.is_attacking()
            && arena.opponent.action.is_idle()
            && arena.opponent.stamina.current >= rules.block_stamina_floor
        {
            let chance = if arena.opponent.stamina.current > rules.confident_stamina {
                rules.block_chance_high
            } else {
                rules.block_chance_low
            };
            if rng.random::<f64>() < chance
                && arena.request_block(Side::Opponent, now, params).is_ok()
            {
                turn.raised_block = true;
            }
        }

        if arena.player.action.is_feinting()
            && arena.opponent.action.is_idle()
            && rng.random::<f64>() < rules.counter_feint_chance
        {
            let kind = AttackKind::random(rng);
            if let Ok(outcome) = arena.request_attack(Side::Opponent, kind, now, params) {
                turn.swing = Some((kind, SwingReason::CounterFeint, outcome));
            }
        }
    } else {
        arena.opponent.move_target = player_pos;
        turn.approached = true;
    }

    let opponent = &mut arena.opponent;
    opponent.position = step_toward(
        opponent.position,
        opponent.move_target,
        profile.speed,
        rules.arrive_epsilon,
    );

    turn
}
