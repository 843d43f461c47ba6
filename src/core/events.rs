//! Core domain: lifecycle requests.

use bevy::ecs::message::Message;

/// Reset both combatants and begin ticking
#[derive(Debug, Default)]
pub struct StartDuel;

impl Message for StartDuel {}

/// Reset everything and return to the lobby without ticking
#[derive(Debug, Default)]
pub struct RestartDuel;

impl Message for RestartDuel {}
