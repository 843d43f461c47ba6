//! Content domain: the combat parameter table and its RON loader.

mod data;
mod loader;
mod validation;


pub use data::{
    ArenaLayout, AttackProfile, AttackTable, CombatParams, ComboRules, DifficultyCurve,
    EffectLifetimes, FighterRules, OpponentRules, Point, SideRules, StaminaRules, TimingRules,
};
pub use loader::{COMBAT_PARAMS_PATH, ContentLoadError, load_combat_params, parse_combat_params};
pub use validation::{ValidationError, validate_params};

use bevy::prelude::*;

pub(crate) use crate::content::loader::load_combat_params_on_startup;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatParams>()
            .add_systems(Startup, load_combat_params_on_startup);
    }
}
