//! Combat domain: validation and application of attack, block and feint
//! requests against a single combatant.
//!
//! Every request either applies fully or returns an `ActionRejection` without
//! touching the combatant.

use crate::combat::attacks::AttackKind;
use crate::combat::components::{ActionState, Fighter, Side};
use crate::content::{CombatParams, SideRules};

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRejection {
    InsufficientStamina,
    /// The current action does not allow this one
    ActionBlockedByState,
    /// Recovery from the previous attack has not elapsed
    OnCooldown,
    /// Hit-stun locks actions (only when enabled in the timing rules)
    Stunned,
    /// The combatant is down
    Defeated,
    /// Block release was requested while not blocking
    NotBlocking,
    /// Opponent blocks run their full duration
    BlockCommitted,
}

impl std::fmt::Display for ActionRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ActionRejection::InsufficientStamina => "insufficient stamina",
            ActionRejection::ActionBlockedByState => "blocked by current action",
            ActionRejection::OnCooldown => "still recovering",
            ActionRejection::Stunned => "stunned",
            ActionRejection::Defeated => "defeated",
            ActionRejection::NotBlocking => "not blocking",
            ActionRejection::BlockCommitted => "block cannot be released early",
        };
        f.write_str(text)
    }
}

/// Result of an accepted attack input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStart {
    /// A running feint swallowed the input; nothing was swung
    FeintCancelled,
    /// The swing started and must be resolved now
    Committed,
}

pub fn side_rules(side: Side, params: &CombatParams) -> SideRules {
    match side {
        Side::Player => params.fighters.player,
        Side::Opponent => params.fighters.opponent,
    }
}

fn ensure_can_act(fighter: &Fighter, params: &CombatParams) -> Result<(), ActionRejection> {
    if !fighter.is_alive() {
        return Err(ActionRejection::Defeated);
    }
    if params.timing.hit_stun_locks_actions && fighter.is_stunned() {
        return Err(ActionRejection::Stunned);
    }
    Ok(())
}

/// Start an attack, or cancel a feint in progress.
pub fn begin_attack(
    fighter: &mut Fighter,
    kind: AttackKind,
    now: u64,
    params: &CombatParams,
) -> Result<AttackStart, ActionRejection> {
    ensure_can_act(fighter, params)?;

    if fighter.action.is_feinting() {
        fighter.action = ActionState::Idle;
        return Ok(AttackStart::FeintCancelled);
    }

    if !fighter.action.is_idle() {
        return Err(ActionRejection::ActionBlockedByState);
    }

    let recovery = side_rules(fighter.side, params).recovery_ms;
    if fighter
        .last_action_at
        .is_some_and(|last| now.saturating_sub(last) <= recovery)
    {
        return Err(ActionRejection::OnCooldown);
    }

    let cost = params.attack(kind).stamina_cost;
    if !fighter.stamina.can_afford(cost) {
        return Err(ActionRejection::InsufficientStamina);
    }

    fighter.stamina.spend(cost);
    fighter.action = ActionState::Attacking {
        kind,
        started_at: now,
    };
    fighter.swing_progress = 0.0;
    fighter.last_action_at = Some(now);
    Ok(AttackStart::Committed)
}

/// Raise a block facing the current aim. A running feint is abandoned.
pub fn begin_block(
    fighter: &mut Fighter,
    now: u64,
    params: &CombatParams,
) -> Result<(), ActionRejection> {
    ensure_can_act(fighter, params)?;

    if fighter.action.is_attacking() || fighter.action.is_blocking() {
        return Err(ActionRejection::ActionBlockedByState);
    }
    if !fighter.stamina.can_afford(params.stamina.block_cost) {
        return Err(ActionRejection::InsufficientStamina);
    }

    fighter.action = ActionState::Blocking {
        angle: fighter.aim_angle,
        started_at: now,
    };
    Ok(())
}

/// Manual block release. Opponent blocks only end on their own.
pub fn release_block(fighter: &mut Fighter) -> Result<(), ActionRejection> {
    if !fighter.action.is_blocking() {
        return Err(ActionRejection::NotBlocking);
    }
    if fighter.side == Side::Opponent {
        return Err(ActionRejection::BlockCommitted);
    }
    fighter.action = ActionState::Idle;
    Ok(())
}

/// Commit stamina to a fake that cancels the next attack input.
pub fn begin_feint(
    fighter: &mut Fighter,
    now: u64,
    params: &CombatParams,
) -> Result<(), ActionRejection> {
    ensure_can_act(fighter, params)?;

    if !fighter.action.is_idle() {
        return Err(ActionRejection::ActionBlockedByState);
    }
    if !fighter.stamina.can_afford(params.stamina.feint_cost) {
        return Err(ActionRejection::InsufficientStamina);
    }

    fighter.stamina.spend(params.stamina.feint_cost);
    fighter.action = ActionState::Feinting { started_at: now };
    Ok(())
}
