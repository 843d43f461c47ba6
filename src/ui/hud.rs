//! UI domain: scalar readouts for the heads-up display.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::Arena;
use crate::content::CombatParams;

/// Values a HUD renders. Refreshed every fixed step while the duel runs and
/// on every phase change.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct HudReadout {
    pub health: u32,
    pub max_health: u32,
    /// Whole stamina points
    pub stamina: u32,
    pub kills: u32,
    pub deaths: u32,
    pub kd: String,
    pub tier: u32,
    pub status: String,
}

impl HudReadout {
    pub fn from_arena(arena: &Arena, params: &CombatParams) -> Self {
        Self {
            health: arena.player.health.current,
            max_health: arena.player.health.max,
            stamina: arena.player.stamina.current.round() as u32,
            kills: arena.score.kills,
            deaths: arena.score.deaths,
            kd: arena.score.kd_display(),
            tier: arena.tier(params),
            status: arena.status_text(),
        }
    }
}

impl Default for HudReadout {
    fn default() -> Self {
        Self::from_arena(&Arena::default(), &CombatParams::default())
    }
}

pub(crate) fn update_hud_readout(
    arena: Res<Arena>,
    params: Res<CombatParams>,
    mut hud: ResMut<HudReadout>,
) {
    let next = HudReadout::from_arena(&arena, &params);
    if *hud != next {
        *hud = next;
    }
}
