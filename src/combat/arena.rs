//! Combat domain: the duel world. Both combatants, the scoreboard and the
//! live effect list are owned here and mutated only through these methods.

use bevy::prelude::*;

use crate::combat::actions::{self, ActionRejection, AttackStart};
use crate::combat::attacks::AttackKind;
use crate::combat::components::{Fighter, Indicator, Side};
use crate::combat::effects::{CombatEffect, EffectKind};
use crate::combat::resolve::{StrikeOutcome, heading, resolve_strike};
use crate::combat::respawn::{OpponentProfile, difficulty_tier};
use crate::content::CombatParams;

/// Kill and death counts from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub kills: u32,
    pub deaths: u32,
}

impl Scoreboard {
    /// Kill/death ratio truncated to one decimal. With no deaths the raw
    /// kill count is shown, still with one decimal.
    pub fn kd_display(&self) -> String {
        if self.deaths == 0 {
            return format!("{}.0", self.kills);
        }
        let tenths = self.kills as u64 * 10 / self.deaths as u64;
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

/// What an accepted attack input turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    FeintCancelled,
    Swung(StrikeOutcome),
}

#[derive(Resource, Debug, Clone)]
pub struct Arena {
    pub player: Fighter,
    pub opponent: Fighter,
    pub profile: OpponentProfile,
    pub score: Scoreboard,
    pub effects: Vec<CombatEffect>,
    /// Player status text source
    pub indicator: Indicator,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(&CombatParams::default())
    }
}

impl Arena {
    pub fn new(params: &CombatParams) -> Self {
        Self {
            player: Fighter::new(Side::Player, params.arena.player_start.into(), params),
            opponent: Fighter::new(Side::Opponent, params.arena.opponent_start.into(), params),
            profile: OpponentProfile::base(&params.opponent.difficulty),
            score: Scoreboard::default(),
            effects: Vec::new(),
            indicator: Indicator::Ready,
        }
    }

    /// Back to the opening positions with full vitals and a clean scoreboard.
    pub fn reset(&mut self, params: &CombatParams) {
        *self = Self::new(params);
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn tier(&self, params: &CombatParams) -> u32 {
        difficulty_tier(self.score.kills, &params.opponent.difficulty)
    }

    pub fn status_text(&self) -> String {
        if self.player.combo.count > 1 {
            format!("COMBO x{}!", self.player.combo.count)
        } else {
            self.indicator.to_string()
        }
    }

    pub fn request_attack(
        &mut self,
        side: Side,
        kind: AttackKind,
        now: u64,
        params: &CombatParams,
    ) -> Result<AttackOutcome, ActionRejection> {
        let Arena {
            player,
            opponent,
            score,
            effects,
            indicator,
            ..
        } = self;
        let (attacker, defender) = match side {
            Side::Player => (player, opponent),
            Side::Opponent => (opponent, player),
        };

        if actions::begin_attack(attacker, kind, now, params)? == AttackStart::FeintCancelled {
            if side == Side::Player {
                *indicator = Indicator::FeintCancelled;
            }
            return Ok(AttackOutcome::FeintCancelled);
        }

        let direction = match side {
            Side::Player => attacker.aim_angle,
            Side::Opponent => heading(attacker.position, defender.position),
        };
        if side == Side::Player {
            *indicator = Indicator::Attacking(kind);
        }
        effects.push(CombatEffect::new(
            EffectKind::WeaponTrail {
                kind,
                angle: direction,
            },
            attacker.position,
            now,
            &params.effects,
        ));

        let outcome = resolve_strike(attacker, defender, kind, direction, now, params);
        let marker = match outcome {
            StrikeOutcome::Miss(_) => None,
            StrikeOutcome::Blocked { .. } => Some(EffectKind::Block),
            StrikeOutcome::Hit {
                damage,
                combo,
                chained: true,
                ..
            } => Some(EffectKind::Combo {
                damage,
                count: combo,
            }),
            StrikeOutcome::Hit { damage, .. } => Some(EffectKind::Impact { damage }),
        };
        if let Some(marker) = marker {
            effects.push(CombatEffect::new(
                marker,
                defender.position,
                now,
                &params.effects,
            ));
        }

        if outcome.is_lethal() {
            match defender.side {
                Side::Opponent => score.kills += 1,
                Side::Player => score.deaths += 1,
            }
            effects.push(CombatEffect::new(
                EffectKind::Death {
                    side: defender.side,
                },
                defender.position,
                now,
                &params.effects,
            ));
        }

        Ok(AttackOutcome::Swung(outcome))
    }

    pub fn request_block(
        &mut self,
        side: Side,
        now: u64,
        params: &CombatParams,
    ) -> Result<(), ActionRejection> {
        actions::begin_block(self.fighter_mut(side), now, params)?;
        if side == Side::Player {
            self.indicator = Indicator::Blocking;
        }
        Ok(())
    }

    pub fn release_block(&mut self, side: Side) -> Result<(), ActionRejection> {
        actions::release_block(self.fighter_mut(side))?;
        if side == Side::Player {
            self.indicator = Indicator::Ready;
        }
        Ok(())
    }

    pub fn request_feint(
        &mut self,
        side: Side,
        now: u64,
        params: &CombatParams,
    ) -> Result<(), ActionRejection> {
        actions::begin_feint(self.fighter_mut(side), now, params)?;
        if side == Side::Player {
            self.indicator = Indicator::Feinting;
        }
        Ok(())
    }
}
