//! Movement domain: per-tick steering of the controlled actor.

use bevy::prelude::*;

use crate::combat::Arena;
use crate::content::CombatParams;
use crate::movement::MovementInput;
use crate::movement::motion::{apply_intent, walkable_bounds};

pub(crate) fn steer_player(
    input: Res<MovementInput>,
    params: Res<CombatParams>,
    mut arena: ResMut<Arena>,
) {
    let player = &mut arena.player;
    if !player.is_alive() {
        return;
    }

    let bounds = walkable_bounds(&params.arena);
    player.position = apply_intent(
        player.position,
        input.intent,
        params.fighters.player_speed,
        bounds,
    );
    player.aim_angle = input.aim.angle_from(player.position, player.aim_angle);
}
