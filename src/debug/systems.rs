//! Debug domain: runtime duel summaries.

use bevy::prelude::*;

use crate::combat::{Arena, Fighter};
use crate::core::DuelClock;
use crate::debug::state::DebugState;

pub(crate) fn log_duel_summary(
    clock: Res<DuelClock>,
    arena: Res<Arena>,
    mut debug_state: ResMut<DebugState>,
) {
    if !debug_state.summary_due(clock.now_ms) {
        return;
    }

    debug!(
        "t={}ms | {} | {} | K/D {} ({}/{}) | effects {}",
        clock.now_ms,
        describe(&arena.player),
        describe(&arena.opponent),
        arena.score.kd_display(),
        arena.score.kills,
        arena.score.deaths,
        arena.effects.len()
    );
}

fn describe(fighter: &Fighter) -> String {
    format!(
        "{} hp {}/{} st {:.1} {} at ({:.0}, {:.0})",
        fighter.side.label(),
        fighter.health.current,
        fighter.health.max,
        fighter.stamina.current,
        fighter.action.label(),
        fighter.position.x,
        fighter.position.y
    )
}
