//! Combat domain: short-lived markers left behind for the renderer.

use bevy::prelude::*;

use crate::combat::attacks::AttackKind;
use crate::combat::components::Side;
use crate::content::EffectLifetimes;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectKind {
    /// Arc drawn behind a committed swing
    WeaponTrail { kind: AttackKind, angle: f32 },
    /// Damage number on a plain hit
    Impact { damage: u32 },
    /// Damage number on a hit that extended a combo
    Combo { damage: u32, count: u32 },
    /// A block absorbed the strike
    Block,
    /// A combatant went down
    Death { side: Side },
}

impl EffectKind {
    pub fn lifetime_ms(&self, lifetimes: &EffectLifetimes) -> u64 {
        match self {
            EffectKind::WeaponTrail { .. } => lifetimes.trail_ms,
            EffectKind::Impact { .. } | EffectKind::Combo { .. } | EffectKind::Block => {
                lifetimes.impact_ms
            }
            EffectKind::Death { .. } => lifetimes.death_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatEffect {
    pub kind: EffectKind,
    pub position: Vec2,
    pub created_at: u64,
    pub ttl_ms: u64,
}

impl CombatEffect {
    pub fn new(kind: EffectKind, position: Vec2, now: u64, lifetimes: &EffectLifetimes) -> Self {
        Self {
            kind,
            position,
            created_at: now,
            ttl_ms: kind.lifetime_ms(lifetimes),
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.created_at) >= self.ttl_ms
    }

    /// Fraction of the lifetime still ahead, 1.0 when fresh and 0.0 when gone.
    pub fn remaining_fraction(&self, now: u64) -> f32 {
        if self.ttl_ms == 0 {
            return 0.0;
        }
        let age = now.saturating_sub(self.created_at) as f32;
        (1.0 - age / self.ttl_ms as f32).clamp(0.0, 1.0)
    }
}

/// Drop every effect whose lifetime has elapsed.
pub fn prune_expired(effects: &mut Vec<CombatEffect>, now: u64) {
    effects.retain(|effect| !effect.is_expired(now));
}
