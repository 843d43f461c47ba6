use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::MessageWriter;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use duel_arena::DuelPlugin;
use duel_arena::combat::{ActionRequest, Arena, AttackKind};
use duel_arena::core::{DuelClock, StartDuel};
use duel_arena::movement::{Aim, MovementInput};
use duel_arena::ui::HudReadout;

/// Simulated length of the sparring session
const SESSION_MS: u64 = 60_000;
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
            LogPlugin::default(),
            StatesPlugin,
        ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins(DuelPlugin::default())
        .add_systems(Startup, start_session)
        .add_systems(FixedPreUpdate, drive_sparring_partner)
        .add_systems(Update, finish_session)
        .run();
}

fn start_session(mut start: MessageWriter<StartDuel>) {
    start.write(StartDuel);
}

/// Scripted stand-in for a human: walk at the opponent, keep aiming at it and
/// cycle through the moveset on a fixed rhythm.
fn drive_sparring_partner(
    clock: Res<DuelClock>,
    arena: Res<Arena>,
    mut input: ResMut<MovementInput>,
    mut requests: MessageWriter<ActionRequest>,
) {
    let player = arena.player.position;
    let opponent = arena.opponent.position;
    let gap = opponent - player;

    input.aim = Aim::Point(opponent);
    input.intent = if gap.length() > 90.0 {
        gap.normalize_or_zero()
    } else {
        Vec2::ZERO
    };

    let beat = clock.ticks % 120;
    let request = match beat {
        0 => Some(ActionRequest::Attack(AttackKind::Slash)),
        40 => Some(ActionRequest::Feint),
        44 => Some(ActionRequest::Attack(AttackKind::Stab)),
        60 => Some(ActionRequest::Attack(AttackKind::Overhead)),
        90 => Some(ActionRequest::BlockStart),
        110 => Some(ActionRequest::BlockStop),
        _ => None,
    };
    if let Some(request) = request {
        requests.write(request);
    }
}

fn finish_session(
    clock: Res<DuelClock>,
    hud: Res<HudReadout>,
    mut exit: MessageWriter<AppExit>,
) {
    if clock.now_ms < SESSION_MS {
        return;
    }

    match serde_json::to_string_pretty(&*hud) {
        Ok(json) => println!("{json}"),
        Err(err) => error!("Failed to encode HUD readout: {err}"),
    }
    exit.write(AppExit::Success);
}
