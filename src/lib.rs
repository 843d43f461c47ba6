//! Real-time melee duel engine: two combatants trading timed attacks,
//! blocks and feints with stamina, combos, respawns and an adaptive opponent.

pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;
pub mod ui;


use bevy::prelude::*;

/// Everything needed to run a duel. Hosts supply the time source, the
/// state machinery (`StatesPlugin`) and logging.
#[derive(Debug, Default)]
pub struct DuelPlugin {
    /// Fixed seed for the opponent's random source
    pub seed: Option<u64>,
}

impl DuelPlugin {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Plugin for DuelPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            crate::core::CorePlugin { seed: self.seed },
            content::ContentPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            ui::UiPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
