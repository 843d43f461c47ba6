//! Core domain: lifecycle and clock systems.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Arena;
use crate::content::CombatParams;
use crate::core::events::{RestartDuel, StartDuel};
use crate::core::resources::DuelClock;
use crate::core::state::DuelPhase;

/// Match the fixed timestep to the configured tick length.
pub(crate) fn configure_fixed_step(params: Res<CombatParams>, mut time: ResMut<Time<Fixed>>) {
    time.set_timestep(Duration::from_millis(params.timing.tick_ms));
}

pub(crate) fn advance_clock(params: Res<CombatParams>, mut clock: ResMut<DuelClock>) {
    clock.advance(params.timing.tick_ms);
}

pub(crate) fn handle_start_requests(
    mut requests: MessageReader<StartDuel>,
    params: Res<CombatParams>,
    mut arena: ResMut<Arena>,
    mut clock: ResMut<DuelClock>,
    mut next_phase: ResMut<NextState<DuelPhase>>,
) {
    if requests.read().last().is_none() {
        return;
    }

    arena.reset(&params);
    clock.reset();
    next_phase.set(DuelPhase::Running);
    info!("Duel started");
}

pub(crate) fn handle_restart_requests(
    mut requests: MessageReader<RestartDuel>,
    params: Res<CombatParams>,
    mut arena: ResMut<Arena>,
    mut clock: ResMut<DuelClock>,
    mut next_phase: ResMut<NextState<DuelPhase>>,
) {
    if requests.read().last().is_none() {
        return;
    }

    let score = arena.score;
    arena.reset(&params);
    clock.reset();
    next_phase.set(DuelPhase::Lobby);
    info!(
        "Duel restarted after {} kills / {} deaths",
        score.kills, score.deaths
    );
}
