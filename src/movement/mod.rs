//! Movement domain: walking and aiming for the controlled actor.

mod motion;
mod resources;
mod systems;


pub use motion::{apply_intent, step_toward, walkable_bounds};
pub use resources::{Aim, MovementInput};

use bevy::prelude::*;

use crate::core::DuelSet;
use crate::movement::systems::steer_player;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(FixedUpdate, steer_player.in_set(DuelSet::Movement));
    }
}
