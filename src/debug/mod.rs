//! Debug domain: periodic duel summaries for development builds.

mod state;
mod systems;


pub use state::DebugState;

use bevy::prelude::*;

use crate::core::DuelSet;
use crate::debug::systems::log_duel_summary;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(FixedUpdate, log_duel_summary.in_set(DuelSet::Publish));
    }
}
