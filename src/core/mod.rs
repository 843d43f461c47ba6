//! Core domain: duel lifecycle, clock and schedule layout.

mod events;
mod resources;
mod state;
mod systems;

pub use events::{RestartDuel, StartDuel};
pub use resources::{DuelClock, DuelRng};
pub use state::DuelPhase;

use bevy::prelude::*;

use crate::core::systems::{
    advance_clock, configure_fixed_step, handle_restart_requests, handle_start_requests,
};

/// Ordering of one fixed step. Timers settle before any request is evaluated.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DuelSet {
    Clock,
    Timers,
    Movement,
    Actions,
    Brain,
    Publish,
}

pub struct CorePlugin {
    pub seed: Option<u64>,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let rng = match self.seed {
            Some(seed) => DuelRng::seeded(seed),
            None => DuelRng::from_entropy(),
        };

        app.init_state::<DuelPhase>()
            .init_resource::<DuelClock>()
            .insert_resource(rng)
            .add_message::<StartDuel>()
            .add_message::<RestartDuel>()
            .configure_sets(
                FixedUpdate,
                (
                    DuelSet::Clock,
                    DuelSet::Timers,
                    DuelSet::Movement,
                    DuelSet::Actions,
                    DuelSet::Brain,
                    DuelSet::Publish,
                )
                    .chain()
                    .run_if(in_state(DuelPhase::Running)),
            )
            .add_systems(
                Startup,
                configure_fixed_step.after(crate::content::load_combat_params_on_startup),
            )
            .add_systems(FixedUpdate, advance_clock.in_set(DuelSet::Clock))
            .add_systems(Update, (handle_start_requests, handle_restart_requests).chain());
    }
}
