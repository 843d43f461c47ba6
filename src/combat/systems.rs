//! Combat domain: fixed-step systems driving the duel.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::ai::{SwingReason, think};
use crate::combat::arena::{Arena, AttackOutcome};
use crate::combat::attacks::AttackKind;
use crate::combat::components::Side;
use crate::combat::events::{ActionRequest, FighterDefeated, FighterRespawned, StrikeResolved};
use crate::combat::resolve::StrikeOutcome;
use crate::combat::tick::advance;
use crate::content::CombatParams;
use crate::core::{DuelClock, DuelRng};

pub(crate) fn tick_arena(
    clock: Res<DuelClock>,
    params: Res<CombatParams>,
    mut arena: ResMut<Arena>,
    mut respawns: MessageWriter<FighterRespawned>,
) {
    for respawned in advance(&mut arena, clock.now_ms, params.timing.tick_ms, &params) {
        info!(
            "{} respawned at ({:.0}, {:.0}), difficulty tier {}",
            respawned.side.label(),
            respawned.position.x,
            respawned.position.y,
            respawned.tier
        );
        respawns.write(FighterRespawned {
            side: respawned.side,
            position: respawned.position,
            tier: respawned.tier,
        });
    }
}

pub(crate) fn apply_player_requests(
    mut requests: MessageReader<ActionRequest>,
    clock: Res<DuelClock>,
    params: Res<CombatParams>,
    mut arena: ResMut<Arena>,
    mut strikes: MessageWriter<StrikeResolved>,
    mut defeats: MessageWriter<FighterDefeated>,
) {
    let now = clock.now_ms;
    for request in requests.read() {
        let result = match *request {
            ActionRequest::Attack(kind) => arena
                .request_attack(Side::Player, kind, now, &params)
                .map(|outcome| {
                    if let AttackOutcome::Swung(outcome) = outcome {
                        publish_strike(
                            Side::Player,
                            kind,
                            outcome,
                            now,
                            &arena,
                            &mut strikes,
                            &mut defeats,
                        );
                    }
                }),
            ActionRequest::BlockStart => arena.request_block(Side::Player, now, &params),
            ActionRequest::BlockStop => arena.release_block(Side::Player),
            ActionRequest::Feint => arena.request_feint(Side::Player, now, &params),
        };

        if let Err(rejection) = result {
            debug!("Player {:?} rejected: {}", request, rejection);
        }
    }
}

pub(crate) fn run_opponent_brain(
    clock: Res<DuelClock>,
    params: Res<CombatParams>,
    mut rng: ResMut<DuelRng>,
    mut arena: ResMut<Arena>,
    mut strikes: MessageWriter<StrikeResolved>,
    mut defeats: MessageWriter<FighterDefeated>,
) {
    let now = clock.now_ms;
    let turn = think(&mut arena, now, &params, &mut rng.0);

    if turn.raised_block {
        debug!("Opponent raised a block");
    }
    if let Some((kind, reason, outcome)) = turn.swing {
        if reason == SwingReason::CounterFeint {
            debug!("Opponent countered a feint with {}", kind);
        }
        if let AttackOutcome::Swung(outcome) = outcome {
            publish_strike(
                Side::Opponent,
                kind,
                outcome,
                now,
                &arena,
                &mut strikes,
                &mut defeats,
            );
        }
    }
}

fn publish_strike(
    attacker: Side,
    kind: AttackKind,
    outcome: StrikeOutcome,
    now: u64,
    arena: &Arena,
    strikes: &mut MessageWriter<StrikeResolved>,
    defeats: &mut MessageWriter<FighterDefeated>,
) {
    debug!("{} {} -> {:?}", attacker.label(), kind, outcome);
    strikes.write(StrikeResolved {
        attacker,
        kind,
        outcome,
        at: now,
    });

    if outcome.is_lethal() {
        let side = attacker.other();
        info!(
            "{} defeated by {} (kills {}, deaths {})",
            side.label(),
            kind,
            arena.score.kills,
            arena.score.deaths
        );
        defeats.write(FighterDefeated {
            side,
            at: now,
            kills: arena.score.kills,
            deaths: arena.score.deaths,
        });
    }
}
