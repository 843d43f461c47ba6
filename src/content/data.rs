//! Data definitions for the combat parameter file.
//!
//! These structs mirror the structure in assets/data/combat.ron and are used
//! for deserialization. `Default` reproduces the shipped tuning so the duel
//! still runs when the file is missing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::attacks::AttackKind;

// ============================================================================
// Common helpers
// ============================================================================

/// A point in arena coordinates. Kept separate from `Vec2` so the RON schema
/// does not depend on engine serialization features.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

// ============================================================================
// Combat parameter table (combat.ron)
// ============================================================================

/// Root of combat.ron. Inserted as a resource once loaded.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct CombatParams {
    pub schema_version: u32,
    pub attacks: AttackTable,
    pub stamina: StaminaRules,
    pub timing: TimingRules,
    pub combo: ComboRules,
    pub fighters: FighterRules,
    pub arena: ArenaLayout,
    pub opponent: OpponentRules,
    pub effects: EffectLifetimes,
}

/// Fixed per-kind attack data.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AttackProfile {
    pub damage: u32,
    pub stamina_cost: f32,
    pub range: f32,
    /// Half-width of the attack cone, in degrees
    pub attack_half_arc: f32,
    /// Half-width of the cone a block must face to stop this attack, in degrees
    pub block_half_arc: f32,
    pub swing_ms: u64,
    /// Visual sweep of the weapon over a full swing, in degrees
    pub swing_arc: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttackTable {
    pub slash: AttackProfile,
    pub stab: AttackProfile,
    pub overhead: AttackProfile,
}

impl AttackTable {
    pub fn profile(&self, kind: AttackKind) -> &AttackProfile {
        match kind {
            AttackKind::Slash => &self.slash,
            AttackKind::Stab => &self.stab,
            AttackKind::Overhead => &self.overhead,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StaminaRules {
    pub max: f32,
    pub regen_per_tick: f32,
    pub block_drain_per_tick: f32,
    pub block_cost: f32,
    pub feint_cost: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimingRules {
    /// Length of one simulation step
    pub tick_ms: u64,
    pub combo_window_ms: u64,
    pub feint_window_ms: u64,
    pub hit_stun_ms: u64,
    /// Stun applied to a defender whose block absorbed a strike
    pub block_stun_ms: u64,
    pub respawn_delay_ms: u64,
    pub respawn_invulnerability_ms: u64,
    /// When set, a stunned combatant cannot start attacks, blocks or feints.
    /// Off by default: stun is a timer the renderer shows, not an input lock.
    pub hit_stun_locks_actions: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComboRules {
    pub bonus_per_hit: u32,
    pub max_bonus: u32,
}

/// Rules that differ between the controlled actor and the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SideRules {
    pub attack_duration_ms: u64,
    /// Minimum time since the last attack before another may start
    pub recovery_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FighterRules {
    pub max_health: u32,
    pub player: SideRules,
    pub opponent: SideRules,
    /// Controlled actor displacement per tick at full movement intent
    pub player_speed: f32,
    /// Opponent blocks end on their own after this long
    pub opponent_block_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArenaLayout {
    pub width: f32,
    pub height: f32,
    /// Distance kept between the controlled actor and the arena edges
    pub edge_margin: f32,
    /// Fraction of the arena height above the walkable ground band
    pub ground_line: f32,
    pub player_start: Point,
    pub opponent_start: Point,
    /// Candidates tried in order when a combatant respawns
    pub spawn_points: Vec<Point>,
    pub min_spawn_distance: f32,
    pub fallback_spawn: Point,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OpponentRules {
    pub attack_stamina_floor: f32,
    pub block_stamina_floor: f32,
    /// Stamina above which the opponent blocks with `block_chance_high`
    pub confident_stamina: f32,
    pub block_chance_high: f64,
    pub block_chance_low: f64,
    pub counter_feint_chance: f64,
    /// Distance at which the opponent counts as having reached its target
    pub arrive_epsilon: f32,
    pub difficulty: DifficultyCurve,
}

/// Opponent scaling by difficulty tier. Tier 0 values are the stats the
/// opponent starts a duel with; respawns apply the tier formula.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DifficultyCurve {
    pub kills_per_tier: u32,
    pub base_speed: f32,
    pub speed_per_tier: f32,
    pub max_speed: f32,
    pub base_cooldown_ms: u64,
    pub cooldown_step_ms: u64,
    pub min_cooldown_ms: u64,
    pub base_range: f32,
    pub range_per_tier: f32,
    pub max_range: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EffectLifetimes {
    pub trail_ms: u64,
    pub impact_ms: u64,
    pub death_ms: u64,
}

impl Default for CombatParams {
    fn default() -> Self {
        Self {
            schema_version: 1,
            attacks: AttackTable {
                slash: AttackProfile {
                    damage: 85,
                    stamina_cost: 25.0,
                    range: 120.0,
                    attack_half_arc: 45.0,
                    block_half_arc: 60.0,
                    swing_ms: 500,
                    swing_arc: 180.0,
                },
                stab: AttackProfile {
                    damage: 95,
                    stamina_cost: 30.0,
                    range: 100.0,
                    attack_half_arc: 15.0,
                    block_half_arc: 30.0,
                    swing_ms: 400,
                    swing_arc: 30.0,
                },
                overhead: AttackProfile {
                    damage: 105,
                    stamina_cost: 35.0,
                    range: 110.0,
                    attack_half_arc: 30.0,
                    block_half_arc: 45.0,
                    swing_ms: 600,
                    swing_arc: 120.0,
                },
            },
            stamina: StaminaRules {
                max: 100.0,
                regen_per_tick: 0.3,
                block_drain_per_tick: 0.5,
                block_cost: 15.0,
                feint_cost: 10.0,
            },
            timing: TimingRules {
                tick_ms: 16,
                combo_window_ms: 2000,
                feint_window_ms: 200,
                hit_stun_ms: 300,
                block_stun_ms: 200,
                respawn_delay_ms: 3000,
                respawn_invulnerability_ms: 2000,
                hit_stun_locks_actions: false,
            },
            combo: ComboRules {
                bonus_per_hit: 5,
                max_bonus: 20,
            },
            fighters: FighterRules {
                max_health: 150,
                player: SideRules {
                    attack_duration_ms: 500,
                    recovery_ms: 300,
                },
                opponent: SideRules {
                    attack_duration_ms: 600,
                    recovery_ms: 600,
                },
                player_speed: 3.0,
                opponent_block_ms: 1000,
            },
            arena: ArenaLayout {
                width: 1200.0,
                height: 800.0,
                edge_margin: 50.0,
                ground_line: 0.6,
                player_start: Point::new(600.0, 600.0),
                opponent_start: Point::new(800.0, 600.0),
                spawn_points: vec![
                    Point::new(100.0, 600.0),
                    Point::new(1100.0, 600.0),
                    Point::new(600.0, 100.0),
                    Point::new(600.0, 700.0),
                ],
                min_spawn_distance: 200.0,
                fallback_spawn: Point::new(100.0, 600.0),
            },
            opponent: OpponentRules {
                attack_stamina_floor: 25.0,
                block_stamina_floor: 15.0,
                confident_stamina: 50.0,
                block_chance_high: 0.6,
                block_chance_low: 0.3,
                counter_feint_chance: 0.4,
                arrive_epsilon: 5.0,
                difficulty: DifficultyCurve {
                    kills_per_tier: 5,
                    base_speed: 2.0,
                    speed_per_tier: 0.5,
                    max_speed: 4.0,
                    base_cooldown_ms: 2000,
                    cooldown_step_ms: 200,
                    min_cooldown_ms: 800,
                    base_range: 80.0,
                    range_per_tier: 10.0,
                    max_range: 120.0,
                },
            },
            effects: EffectLifetimes {
                trail_ms: 300,
                impact_ms: 500,
                death_ms: 2000,
            },
        }
    }
}

impl CombatParams {
    pub fn attack(&self, kind: AttackKind) -> &AttackProfile {
        self.attacks.profile(kind)
    }
}
