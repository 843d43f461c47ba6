//! Combat domain: combatant state and the pieces it is built from.

use bevy::prelude::*;

use crate::combat::attacks::AttackKind;
use crate::content::CombatParams;

/// Which of the two combatants a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human-controlled actor
    Player,
    /// The autonomous opponent
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// Integer hit points. `current == 0` means the combatant is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, flooring at zero. Returns the amount actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Action resource, always within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn can_afford(&self, cost: f32) -> bool {
        self.current >= cost
    }

    pub fn spend(&mut self, cost: f32) {
        self.current = (self.current - cost).max(0.0);
    }

    pub fn regenerate(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Drain stamina. Returns true once it has run dry.
    pub fn drain(&mut self, amount: f32) -> bool {
        self.spend(amount);
        self.current <= 0.0
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// What a combatant is doing right now. Only one action can be active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Attacking { kind: AttackKind, started_at: u64 },
    /// `angle` is the aim captured when the block started, in radians
    Blocking { angle: f32, started_at: u64 },
    Feinting { started_at: u64 },
}

impl ActionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ActionState::Idle)
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self, ActionState::Attacking { .. })
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, ActionState::Blocking { .. })
    }

    pub fn is_feinting(&self) -> bool {
        matches!(self, ActionState::Feinting { .. })
    }

    pub fn attack_kind(&self) -> Option<AttackKind> {
        match self {
            ActionState::Attacking { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn block_angle(&self) -> Option<f32> {
        match self {
            ActionState::Blocking { angle, .. } => Some(*angle),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionState::Idle => "idle",
            ActionState::Attacking { .. } => "attacking",
            ActionState::Blocking { .. } => "blocking",
            ActionState::Feinting { .. } => "feinting",
        }
    }
}

/// Consecutive hits landed inside the combo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComboTracker {
    pub count: u32,
    pub last_hit_at: Option<u64>,
}

impl ComboTracker {
    /// Record a landed hit. Returns true when it extended a running combo.
    pub fn register_hit(&mut self, now: u64, window_ms: u64) -> bool {
        let chained = self
            .last_hit_at
            .is_some_and(|last| now.saturating_sub(last) < window_ms);
        if chained {
            self.count += 1;
        } else {
            self.count = 1;
        }
        self.last_hit_at = Some(now);
        chained
    }

    /// Drop the count once the window has passed. Returns true if it reset.
    pub fn expire(&mut self, now: u64, window_ms: u64) -> bool {
        if self.count == 0 {
            return false;
        }
        let lapsed = self
            .last_hit_at
            .is_none_or(|last| now.saturating_sub(last) > window_ms);
        if lapsed {
            self.count = 0;
        }
        lapsed
    }
}

/// Status shown to the controlled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Ready,
    Attacking(AttackKind),
    Blocking,
    Feinting,
    /// An attack input consumed a running feint
    FeintCancelled,
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indicator::Ready => f.write_str("Ready"),
            Indicator::Attacking(kind) => f.write_str(kind.display_name()),
            Indicator::Blocking => f.write_str("Blocking"),
            Indicator::Feinting => f.write_str("Feinting"),
            Indicator::FeintCancelled => f.write_str("Feint!"),
        }
    }
}

/// Complete mutable record of one combatant. Timestamps are duel clock
/// milliseconds; `*_ms` fields are remaining durations.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    pub side: Side,
    pub position: Vec2,
    /// Facing / weapon direction in radians
    pub aim_angle: f32,
    pub health: Health,
    pub stamina: Stamina,
    pub action: ActionState,
    /// Commitment of the active swing, 0 to 100
    pub swing_progress: f32,
    pub hit_stun_ms: u64,
    pub invulnerable_ms: u64,
    pub combo: ComboTracker,
    /// When the last attack started, for recovery gating
    pub last_action_at: Option<u64>,
    /// Set while the combatant is down
    pub defeated_at: Option<u64>,
    /// Where the combatant is walking to; only the opponent steers by it
    pub move_target: Vec2,
}

impl Fighter {
    pub fn new(side: Side, position: Vec2, params: &CombatParams) -> Self {
        Self {
            side,
            position,
            aim_angle: 0.0,
            health: Health::new(params.fighters.max_health),
            stamina: Stamina::new(params.stamina.max),
            action: ActionState::Idle,
            swing_progress: 0.0,
            hit_stun_ms: 0,
            invulnerable_ms: 0,
            combo: ComboTracker::default(),
            last_action_at: None,
            defeated_at: None,
            move_target: position,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.defeated_at.is_none()
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ms > 0
    }

    pub fn is_stunned(&self) -> bool {
        self.hit_stun_ms > 0
    }

    /// Mark the combatant as down at `now`.
    pub fn fall(&mut self, now: u64) {
        self.health.current = 0;
        self.defeated_at = Some(now);
        self.action = ActionState::Idle;
        self.swing_progress = 0.0;
    }

    /// Weapon direction including the visual sweep of an active swing.
    pub fn weapon_angle(&self, params: &CombatParams) -> f32 {
        match self.action {
            ActionState::Attacking { kind, .. } => {
                let arc = params.attack(kind).swing_arc.to_radians();
                self.aim_angle + self.swing_progress / 100.0 * arc
            }
            _ => self.aim_angle,
        }
    }
}
