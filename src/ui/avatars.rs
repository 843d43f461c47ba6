//! UI domain: one entity per combatant for a renderer to decorate.

use bevy::prelude::*;

use crate::combat::{Arena, Side};

/// Marks the entity mirroring a combatant's position and aim
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FighterAvatar(pub Side);

pub(crate) fn spawn_avatars(mut commands: Commands, arena: Res<Arena>) {
    for side in [Side::Player, Side::Opponent] {
        let fighter = arena.fighter(side);
        commands.spawn((
            FighterAvatar(side),
            Name::new(side.label()),
            Transform::from_translation(fighter.position.extend(0.0))
                .with_rotation(Quat::from_rotation_z(fighter.aim_angle)),
            Visibility::Visible,
        ));
    }
}

pub(crate) fn sync_avatars(
    arena: Res<Arena>,
    mut avatars: Query<(&FighterAvatar, &mut Transform, &mut Visibility)>,
) {
    for (avatar, mut transform, mut visibility) in &mut avatars {
        let fighter = arena.fighter(avatar.0);
        transform.translation = fighter.position.extend(0.0);
        transform.rotation = Quat::from_rotation_z(fighter.aim_angle);
        *visibility = if fighter.is_alive() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub(crate) fn despawn_avatars(mut commands: Commands, avatars: Query<Entity, With<FighterAvatar>>) {
    for entity in &avatars {
        commands.entity(entity).despawn();
    }
}
