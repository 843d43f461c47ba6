//! UI domain: HUD readouts, render snapshot and combatant avatars.

mod avatars;
mod hud;
mod snapshot;


pub use avatars::FighterAvatar;
pub use hud::HudReadout;
pub use snapshot::{DuelSnapshot, EffectView, FighterView};

use bevy::prelude::*;

use crate::core::{DuelPhase, DuelSet};
use crate::ui::avatars::{despawn_avatars, spawn_avatars, sync_avatars};
use crate::ui::hud::update_hud_readout;
use crate::ui::snapshot::capture_snapshot;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudReadout>()
            .init_resource::<DuelSnapshot>()
            .add_systems(
                OnEnter(DuelPhase::Lobby),
                (update_hud_readout, capture_snapshot),
            )
            .add_systems(
                OnEnter(DuelPhase::Running),
                (spawn_avatars, update_hud_readout, capture_snapshot),
            )
            .add_systems(OnExit(DuelPhase::Running), despawn_avatars)
            .add_systems(
                FixedUpdate,
                (update_hud_readout, capture_snapshot, sync_avatars).in_set(DuelSet::Publish),
            );
    }
}
