//! Validation for combat parameter values that parse but cannot be played.

use super::data::CombatParams;
use crate::combat::attacks::AttackKind;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.problem)
    }
}

/// Helper macro for checking a condition and recording a failure
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $problem:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field.to_string(),
                problem: $problem.to_string(),
            });
        }
    };
}

/// Validate every combat parameter.
/// Returns a list of validation errors, empty if the table is playable.
pub fn validate_params(params: &CombatParams) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let max_stamina = params.stamina.max;

    check!(errors, max_stamina > 0.0, "stamina.max", "must be positive");
    check!(
        errors,
        params.stamina.regen_per_tick >= 0.0,
        "stamina.regen_per_tick",
        "must not be negative"
    );
    check!(
        errors,
        params.stamina.block_drain_per_tick >= 0.0,
        "stamina.block_drain_per_tick",
        "must not be negative"
    );
    check!(
        errors,
        params.stamina.block_cost <= max_stamina,
        "stamina.block_cost",
        "exceeds stamina.max"
    );
    check!(
        errors,
        params.stamina.feint_cost <= max_stamina,
        "stamina.feint_cost",
        "exceeds stamina.max"
    );

    for kind in AttackKind::ALL {
        let profile = params.attack(kind);
        let name = kind.id();
        check!(
            errors,
            profile.range > 0.0,
            format!("attacks.{name}.range"),
            "must be positive"
        );
        check!(
            errors,
            profile.attack_half_arc > 0.0 && profile.attack_half_arc <= 180.0,
            format!("attacks.{name}.attack_half_arc"),
            "must be within (0, 180]"
        );
        check!(
            errors,
            profile.block_half_arc > 0.0 && profile.block_half_arc <= 180.0,
            format!("attacks.{name}.block_half_arc"),
            "must be within (0, 180]"
        );
        check!(
            errors,
            profile.swing_ms > 0,
            format!("attacks.{name}.swing_ms"),
            "must be positive"
        );
        check!(
            errors,
            profile.stamina_cost <= max_stamina,
            format!("attacks.{name}.stamina_cost"),
            "exceeds stamina.max"
        );
    }

    check!(errors, params.timing.tick_ms > 0, "timing.tick_ms", "must be positive");
    check!(
        errors,
        params.fighters.max_health > 0,
        "fighters.max_health",
        "must be positive"
    );
    check!(
        errors,
        params.combo.max_bonus >= params.combo.bonus_per_hit,
        "combo.max_bonus",
        "is smaller than one combo step"
    );

    let arena = &params.arena;
    check!(
        errors,
        !arena.spawn_points.is_empty(),
        "arena.spawn_points",
        "must list at least one point"
    );
    check!(
        errors,
        arena.width > 2.0 * arena.edge_margin,
        "arena.width",
        "leaves no room inside the edge margin"
    );
    check!(
        errors,
        (0.0..1.0).contains(&arena.ground_line),
        "arena.ground_line",
        "must be within [0, 1)"
    );

    let opponent = &params.opponent;
    for (field, chance) in [
        ("opponent.block_chance_high", opponent.block_chance_high),
        ("opponent.block_chance_low", opponent.block_chance_low),
        ("opponent.counter_feint_chance", opponent.counter_feint_chance),
    ] {
        check!(errors, (0.0..=1.0).contains(&chance), field, "must be a probability");
    }

    let curve = &opponent.difficulty;
    check!(
        errors,
        curve.kills_per_tier > 0,
        "opponent.difficulty.kills_per_tier",
        "must be positive"
    );
    check!(
        errors,
        curve.max_speed >= curve.base_speed,
        "opponent.difficulty.max_speed",
        "is below base_speed"
    );
    check!(
        errors,
        curve.min_cooldown_ms <= curve.base_cooldown_ms,
        "opponent.difficulty.min_cooldown_ms",
        "is above base_cooldown_ms"
    );
    check!(
        errors,
        curve.max_range >= curve.base_range,
        "opponent.difficulty.max_range",
        "is below base_range"
    );

    errors
}
