//! UI domain: read-only view of the duel for a renderer.

use bevy::prelude::*;

use crate::combat::{Arena, EffectKind, Fighter, Side};
use crate::content::CombatParams;
use crate::core::DuelClock;

#[derive(Debug, Clone, PartialEq)]
pub struct FighterView {
    pub side: Side,
    pub position: Vec2,
    pub aim_angle: f32,
    /// Aim plus the sweep of an active swing
    pub weapon_angle: f32,
    pub health: u32,
    pub max_health: u32,
    pub stamina: f32,
    pub action: &'static str,
    pub swing_progress: f32,
    pub invulnerable: bool,
    pub alive: bool,
}

impl FighterView {
    fn of(fighter: &Fighter, params: &CombatParams) -> Self {
        Self {
            side: fighter.side,
            position: fighter.position,
            aim_angle: fighter.aim_angle,
            weapon_angle: fighter.weapon_angle(params),
            health: fighter.health.current,
            max_health: fighter.health.max,
            stamina: fighter.stamina.current,
            action: fighter.action.label(),
            swing_progress: fighter.swing_progress,
            invulnerable: fighter.is_invulnerable(),
            alive: fighter.is_alive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Vec2,
    /// 1.0 when fresh, 0.0 when about to be pruned
    pub remaining: f32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DuelSnapshot {
    pub now_ms: u64,
    pub fighters: Vec<FighterView>,
    pub effects: Vec<EffectView>,
}

impl DuelSnapshot {
    pub fn capture(arena: &Arena, now: u64, params: &CombatParams) -> Self {
        Self {
            now_ms: now,
            fighters: vec![
                FighterView::of(&arena.player, params),
                FighterView::of(&arena.opponent, params),
            ],
            effects: arena
                .effects
                .iter()
                .map(|effect| EffectView {
                    kind: effect.kind,
                    position: effect.position,
                    remaining: effect.remaining_fraction(now),
                })
                .collect(),
        }
    }

    pub fn fighter(&self, side: Side) -> Option<&FighterView> {
        self.fighters.iter().find(|view| view.side == side)
    }
}

pub(crate) fn capture_snapshot(
    arena: Res<Arena>,
    clock: Res<DuelClock>,
    params: Res<CombatParams>,
    mut snapshot: ResMut<DuelSnapshot>,
) {
    *snapshot = DuelSnapshot::capture(&arena, clock.now_ms, &params);
}
