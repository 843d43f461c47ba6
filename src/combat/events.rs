//! Combat domain: requests into the duel and results out of it.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::attacks::AttackKind;
use crate::combat::components::Side;
use crate::combat::resolve::StrikeOutcome;

/// Discrete input from the controlled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    Attack(AttackKind),
    BlockStart,
    BlockStop,
    Feint,
}

impl Message for ActionRequest {}

/// A swing was committed and resolved
#[derive(Debug, Clone, Copy)]
pub struct StrikeResolved {
    pub attacker: Side,
    pub kind: AttackKind,
    pub outcome: StrikeOutcome,
    pub at: u64,
}

impl Message for StrikeResolved {}

#[derive(Debug, Clone, Copy)]
pub struct FighterDefeated {
    pub side: Side,
    pub at: u64,
    pub kills: u32,
    pub deaths: u32,
}

impl Message for FighterDefeated {}

#[derive(Debug, Clone, Copy)]
pub struct FighterRespawned {
    pub side: Side,
    pub position: Vec2,
    pub tier: u32,
}

impl Message for FighterRespawned {}
