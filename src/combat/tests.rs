//! Combat domain: unit tests for actions, hit resolution, respawn and the
//! opponent brain.

use std::f32::consts::PI;

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::content::{ArenaLayout, CombatParams, Point};

const TICK: u64 = 16;

fn fighter_at(side: Side, x: f32, y: f32, params: &CombatParams) -> Fighter {
    Fighter::new(side, Vec2::new(x, y), params)
}

/// Advance the arena from `from` (exclusive) to `to` (inclusive) in ticks.
fn run_ticks(arena: &mut Arena, from: u64, to: u64, params: &CombatParams) -> Vec<Respawned> {
    let mut respawned = Vec::new();
    let mut now = from;
    while now < to {
        now += TICK;
        respawned.extend(advance(arena, now, TICK, params));
    }
    respawned
}

// ============================================================================
// Input boundary
// ============================================================================

#[test]
fn test_attack_kind_parses_case_insensitively() {
    assert_eq!(" Slash ".parse::<AttackKind>(), Ok(AttackKind::Slash));
    assert_eq!("STAB".parse::<AttackKind>(), Ok(AttackKind::Stab));
    assert_eq!("overhead".parse::<AttackKind>(), Ok(AttackKind::Overhead));

    let err = "kick".parse::<AttackKind>().unwrap_err();
    assert_eq!(err.input, "kick");
}

#[test]
fn test_angle_gap_wraps_around() {
    let gap = angle_gap_degrees(350f32.to_radians(), 10f32.to_radians());
    assert!((gap - 20.0).abs() < 1e-3);

    let gap = angle_gap_degrees(179f32.to_radians(), (-179f32).to_radians());
    assert!((gap - 2.0).abs() < 1e-3);

    let gap = angle_gap_degrees(0.0, PI);
    assert!((gap - 180.0).abs() < 1e-3);
}

// ============================================================================
// Action controller
// ============================================================================

#[test]
fn test_attack_spends_stamina_and_commits() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);

    let start = begin_attack(&mut fighter, AttackKind::Slash, 1000, &params);
    assert_eq!(start, Ok(AttackStart::Committed));
    assert_eq!(fighter.stamina.current, 75.0);
    assert_eq!(fighter.action.attack_kind(), Some(AttackKind::Slash));
    assert_eq!(fighter.swing_progress, 0.0);
    assert_eq!(fighter.last_action_at, Some(1000));
}

#[test]
fn test_attack_is_not_reentrant() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);

    begin_attack(&mut fighter, AttackKind::Stab, 0, &params).unwrap();
    let stamina = fighter.stamina.current;

    let second = begin_attack(&mut fighter, AttackKind::Slash, 16, &params);
    assert_eq!(second, Err(ActionRejection::ActionBlockedByState));
    assert_eq!(fighter.stamina.current, stamina);
    assert_eq!(fighter.action.attack_kind(), Some(AttackKind::Stab));
}

#[test]
fn test_attack_waits_for_recovery() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);
    fighter.last_action_at = Some(1000);

    let early = begin_attack(&mut fighter, AttackKind::Slash, 1300, &params);
    assert_eq!(early, Err(ActionRejection::OnCooldown));
    assert!(fighter.action.is_idle());

    let ready = begin_attack(&mut fighter, AttackKind::Slash, 1301, &params);
    assert_eq!(ready, Ok(AttackStart::Committed));
}

#[test]
fn test_opponent_recovers_slower() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Opponent, 0.0, 0.0, &params);
    fighter.last_action_at = Some(0);

    assert_eq!(
        begin_attack(&mut fighter, AttackKind::Slash, 500, &params),
        Err(ActionRejection::OnCooldown)
    );
    assert!(begin_attack(&mut fighter, AttackKind::Slash, 601, &params).is_ok());
}

#[test]
fn test_attack_rejected_without_stamina() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);
    fighter.stamina.current = 20.0;

    let result = begin_attack(&mut fighter, AttackKind::Slash, 0, &params);
    assert_eq!(result, Err(ActionRejection::InsufficientStamina));
    assert_eq!(fighter.stamina.current, 20.0);
    assert!(fighter.action.is_idle());
    assert_eq!(fighter.last_action_at, None);
}

#[test]
fn test_attack_during_feint_cancels_it() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);

    begin_feint(&mut fighter, 0, &params).unwrap();
    assert_eq!(fighter.stamina.current, 90.0);
    assert!(fighter.action.is_feinting());

    let result = begin_attack(&mut fighter, AttackKind::Overhead, 32, &params);
    assert_eq!(result, Ok(AttackStart::FeintCancelled));
    assert!(fighter.action.is_idle());
    assert_eq!(fighter.stamina.current, 90.0);
    assert_eq!(fighter.last_action_at, None);
}

#[test]
fn test_block_captures_aim_and_ignores_later_aim() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);
    fighter.aim_angle = 1.0;

    begin_block(&mut fighter, 0, &params).unwrap();
    fighter.aim_angle = -2.0;

    assert_eq!(fighter.action.block_angle(), Some(1.0));
    assert_eq!(fighter.stamina.current, 100.0);
}

#[test]
fn test_block_rules() {
    let params = CombatParams::default();

    let mut attacking = fighter_at(Side::Player, 0.0, 0.0, &params);
    begin_attack(&mut attacking, AttackKind::Slash, 0, &params).unwrap();
    assert_eq!(
        begin_block(&mut attacking, 16, &params),
        Err(ActionRejection::ActionBlockedByState)
    );

    let mut tired = fighter_at(Side::Player, 0.0, 0.0, &params);
    tired.stamina.current = 14.0;
    assert_eq!(
        begin_block(&mut tired, 0, &params),
        Err(ActionRejection::InsufficientStamina)
    );

    let mut idle = fighter_at(Side::Player, 0.0, 0.0, &params);
    assert_eq!(release_block(&mut idle), Err(ActionRejection::NotBlocking));
    begin_block(&mut idle, 0, &params).unwrap();
    assert_eq!(release_block(&mut idle), Ok(()));
    assert!(idle.action.is_idle());
}

#[test]
fn test_opponent_block_cannot_be_released() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Opponent, 0.0, 0.0, &params);

    begin_block(&mut fighter, 0, &params).unwrap();
    assert_eq!(
        release_block(&mut fighter),
        Err(ActionRejection::BlockCommitted)
    );
    assert!(fighter.action.is_blocking());
}

#[test]
fn test_feint_rules() {
    let params = CombatParams::default();

    let mut tired = fighter_at(Side::Player, 0.0, 0.0, &params);
    tired.stamina.current = 9.0;
    assert_eq!(
        begin_feint(&mut tired, 0, &params),
        Err(ActionRejection::InsufficientStamina)
    );

    let mut feinting = fighter_at(Side::Player, 0.0, 0.0, &params);
    begin_feint(&mut feinting, 0, &params).unwrap();
    assert_eq!(
        begin_feint(&mut feinting, 16, &params),
        Err(ActionRejection::ActionBlockedByState)
    );
}

#[test]
fn test_defeated_fighter_cannot_act() {
    let params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);
    fighter.fall(0);

    assert_eq!(
        begin_attack(&mut fighter, AttackKind::Slash, 10, &params),
        Err(ActionRejection::Defeated)
    );
    assert_eq!(
        begin_block(&mut fighter, 10, &params),
        Err(ActionRejection::Defeated)
    );
    assert_eq!(
        begin_feint(&mut fighter, 10, &params),
        Err(ActionRejection::Defeated)
    );
}

#[test]
fn test_hit_stun_gates_only_when_enabled() {
    let mut params = CombatParams::default();
    let mut fighter = fighter_at(Side::Player, 0.0, 0.0, &params);
    fighter.hit_stun_ms = 100;

    assert!(begin_feint(&mut fighter, 0, &params).is_ok());

    params.timing.hit_stun_locks_actions = true;
    let mut stunned = fighter_at(Side::Player, 0.0, 0.0, &params);
    stunned.hit_stun_ms = 100;
    assert_eq!(
        begin_attack(&mut stunned, AttackKind::Slash, 0, &params),
        Err(ActionRejection::Stunned)
    );
}

// ============================================================================
// Hit resolver
// ============================================================================

#[test]
fn test_stab_geometry() {
    let params = CombatParams::default();
    let cases = [
        (Vec2::new(90.0, 0.0), None),
        (Vec2::new(90.0, 40.0), Some(MissReason::OutOfArc)),
        (Vec2::new(150.0, 0.0), Some(MissReason::OutOfRange)),
    ];

    for (position, expected_miss) in cases {
        let mut attacker = fighter_at(Side::Player, 0.0, 0.0, &params);
        let mut defender = Fighter::new(Side::Opponent, position, &params);

        let outcome = resolve_strike(
            &mut attacker,
            &mut defender,
            AttackKind::Stab,
            0.0,
            0,
            &params,
        );
        match expected_miss {
            Some(reason) => {
                assert_eq!(outcome, StrikeOutcome::Miss(reason), "at {position}");
                assert_eq!(defender.health.current, 150);
            }
            None => {
                assert!(matches!(outcome, StrikeOutcome::Hit { damage: 95, .. }));
                assert_eq!(defender.health.current, 55);
            }
        }
    }
}

#[test]
fn test_block_law() {
    let params = CombatParams::default();
    let mut attacker = fighter_at(Side::Player, 0.0, 0.0, &params);
    let mut defender = fighter_at(Side::Opponent, 100.0, 0.0, &params);
    defender.aim_angle = PI;
    begin_block(&mut defender, 0, &params).unwrap();

    let outcome = resolve_strike(
        &mut attacker,
        &mut defender,
        AttackKind::Slash,
        0.0,
        50,
        &params,
    );

    assert_eq!(outcome, StrikeOutcome::Blocked { stamina_lost: 15.0 });
    assert_eq!(defender.stamina.current, 85.0);
    assert_eq!(defender.health.current, 150);
    assert_eq!(defender.hit_stun_ms, 200);
    assert_eq!(attacker.combo.count, 0);
}

#[test]
fn test_block_facing_away_does_not_protect() {
    let params = CombatParams::default();
    let mut attacker = fighter_at(Side::Player, 0.0, 0.0, &params);
    let mut defender = fighter_at(Side::Opponent, 100.0, 0.0, &params);
    defender.aim_angle = 0.0;
    begin_block(&mut defender, 0, &params).unwrap();

    let outcome = resolve_strike(
        &mut attacker,
        &mut defender,
        AttackKind::Slash,
        0.0,
        50,
        &params,
    );

    assert!(matches!(outcome, StrikeOutcome::Hit { damage: 85, .. }));
    assert_eq!(defender.hit_stun_ms, 300);
}

#[test]
fn test_combo_law() {
    let params = CombatParams::default();
    let mut attacker = fighter_at(Side::Player, 0.0, 0.0, &params);
    let mut defender = fighter_at(Side::Opponent, 100.0, 0.0, &params);
    defender.health = Health::new(10_000);

    let expected = [
        (1000, 85, 1),
        (1500, 95, 2),
        (2000, 100, 3),
        (2500, 105, 4),
        (3000, 105, 5),
    ];
    for (now, damage, count) in expected {
        let outcome = resolve_strike(
            &mut attacker,
            &mut defender,
            AttackKind::Slash,
            0.0,
            now,
            &params,
        );
        assert_eq!(outcome.damage(), damage, "hit at {now}");
        assert_eq!(attacker.combo.count, count);
    }

    let lapsed = resolve_strike(
        &mut attacker,
        &mut defender,
        AttackKind::Slash,
        0.0,
        5000,
        &params,
    );
    assert_eq!(
        lapsed,
        StrikeOutcome::Hit {
            damage: 85,
            combo: 1,
            chained: false,
            lethal: false,
        }
    );
}

#[test]
fn test_invulnerable_target_is_missed() {
    let params = CombatParams::default();
    let mut attacker = fighter_at(Side::Opponent, 0.0, 0.0, &params);
    let mut defender = fighter_at(Side::Player, 50.0, 0.0, &params);
    defender.invulnerable_ms = 1000;

    let outcome = resolve_strike(
        &mut attacker,
        &mut defender,
        AttackKind::Overhead,
        0.0,
        0,
        &params,
    );
    assert_eq!(outcome, StrikeOutcome::Miss(MissReason::TargetInvulnerable));
    assert_eq!(defender.health.current, 150);
}

#[test]
fn test_dead_target_is_missed() {
    let params = CombatParams::default();
    let mut attacker = fighter_at(Side::Opponent, 0.0, 0.0, &params);
    let mut defender = fighter_at(Side::Player, 50.0, 0.0, &params);
    defender.fall(0);

    let outcome = resolve_strike(
        &mut attacker,
        &mut defender,
        AttackKind::Slash,
        0.0,
        10,
        &params,
    );
    assert_eq!(outcome, StrikeOutcome::Miss(MissReason::TargetDead));
}

#[test]
fn test_lethal_hit_floors_health() {
    let params = CombatParams::default();
    let mut attacker = fighter_at(Side::Player, 0.0, 0.0, &params);
    let mut defender = fighter_at(Side::Opponent, 100.0, 0.0, &params);
    defender.health.current = 40;

    let outcome = resolve_strike(
        &mut attacker,
        &mut defender,
        AttackKind::Slash,
        0.0,
        700,
        &params,
    );

    assert!(outcome.is_lethal());
    assert_eq!(defender.health.current, 0);
    assert!(!defender.is_alive());
    assert_eq!(defender.defeated_at, Some(700));
}

// ============================================================================
// Arena and tick orchestration
// ============================================================================

#[test]
fn test_arena_feint_cancel_leaves_opponent_untouched() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(680.0, 600.0);

    arena.request_feint(Side::Player, 0, &params).unwrap();
    assert_eq!(arena.status_text(), "Feinting");

    let outcome = arena.request_attack(Side::Player, AttackKind::Slash, 48, &params);
    assert_eq!(outcome, Ok(AttackOutcome::FeintCancelled));
    assert_eq!(arena.opponent.health.current, 150);
    assert!(arena.player.action.is_idle());
    assert_eq!(arena.status_text(), "Feint!");
    assert!(arena.effects.is_empty());
}

#[test]
fn test_arena_hit_records_effects_and_status() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(700.0, 600.0);

    let outcome = arena
        .request_attack(Side::Player, AttackKind::Slash, 0, &params)
        .unwrap();

    assert!(matches!(
        outcome,
        AttackOutcome::Swung(StrikeOutcome::Hit { damage: 85, .. })
    ));
    assert_eq!(arena.status_text(), "Slash");
    assert_eq!(arena.effects.len(), 2);
    assert!(matches!(
        arena.effects[0].kind,
        EffectKind::WeaponTrail {
            kind: AttackKind::Slash,
            ..
        }
    ));
    assert_eq!(arena.effects[1].kind, EffectKind::Impact { damage: 85 });

    run_ticks(&mut arena, 0, 304, &params);
    assert_eq!(arena.effects.len(), 1);
    run_ticks(&mut arena, 304, 512, &params);
    assert!(arena.effects.is_empty());
}

#[test]
fn test_arena_combo_status() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(700.0, 600.0);
    arena.opponent.health = Health::new(10_000);

    arena
        .request_attack(Side::Player, AttackKind::Slash, 0, &params)
        .unwrap();
    run_ticks(&mut arena, 0, 800, &params);
    let outcome = arena
        .request_attack(Side::Player, AttackKind::Slash, 800, &params)
        .unwrap();

    assert!(matches!(
        outcome,
        AttackOutcome::Swung(StrikeOutcome::Hit {
            damage: 95,
            chained: true,
            ..
        })
    ));
    assert_eq!(arena.status_text(), "COMBO x2!");
    assert!(
        arena
            .effects
            .iter()
            .any(|effect| effect.kind == EffectKind::Combo { damage: 95, count: 2 })
    );
}

#[test]
fn test_swing_advances_and_attack_ends() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena
        .request_attack(Side::Player, AttackKind::Slash, 0, &params)
        .unwrap();

    run_ticks(&mut arena, 0, 16, &params);
    assert!((arena.player.swing_progress - 3.2).abs() < 1e-4);

    run_ticks(&mut arena, 16, 496, &params);
    assert!(arena.player.action.is_attacking());
    assert!(arena.player.swing_progress <= 100.0);

    run_ticks(&mut arena, 496, 512, &params);
    assert!(arena.player.action.is_idle());
    assert_eq!(arena.status_text(), "Ready");
}

#[test]
fn test_feint_expires_after_window() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.request_feint(Side::Player, 0, &params).unwrap();

    run_ticks(&mut arena, 0, 192, &params);
    assert!(arena.player.action.is_feinting());

    run_ticks(&mut arena, 192, 208, &params);
    assert!(arena.player.action.is_idle());
    assert_eq!(arena.status_text(), "Ready");
}

#[test]
fn test_block_drains_and_drops_when_dry() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.request_block(Side::Player, 0, &params).unwrap();

    run_ticks(&mut arena, 0, 16, &params);
    assert_eq!(arena.player.stamina.current, 99.5);

    arena.player.stamina.current = 0.1;
    run_ticks(&mut arena, 16, 32, &params);
    assert!(arena.player.action.is_idle());
    assert_eq!(arena.player.stamina.current, 0.0);
    assert_eq!(arena.status_text(), "Ready");
}

#[test]
fn test_opponent_block_expires_on_its_own() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.request_block(Side::Opponent, 0, &params).unwrap();

    run_ticks(&mut arena, 0, 992, &params);
    assert!(arena.opponent.action.is_blocking());

    run_ticks(&mut arena, 992, 1008, &params);
    assert!(arena.opponent.action.is_idle());
}

#[test]
fn test_timers_decay_and_combo_resets() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.player.hit_stun_ms = 300;
    arena.player.invulnerable_ms = 10;
    arena.player.combo = ComboTracker {
        count: 3,
        last_hit_at: Some(0),
    };

    run_ticks(&mut arena, 0, 16, &params);
    assert_eq!(arena.player.hit_stun_ms, 284);
    assert_eq!(arena.player.invulnerable_ms, 0);

    run_ticks(&mut arena, 16, 2000, &params);
    assert_eq!(arena.player.combo.count, 3);

    run_ticks(&mut arena, 2000, 2016, &params);
    assert_eq!(arena.player.combo.count, 0);
}

// ============================================================================
// Death and respawn
// ============================================================================

#[test]
fn test_death_and_respawn() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(700.0, 600.0);
    arena.opponent.health.current = 50;

    let outcome = arena
        .request_attack(Side::Player, AttackKind::Slash, 0, &params)
        .unwrap();
    assert!(matches!(outcome, AttackOutcome::Swung(s) if s.is_lethal()));
    assert!(!arena.opponent.is_alive());
    assert_eq!(arena.opponent.health.current, 0);
    assert_eq!(arena.score.kills, 1);
    assert!(
        arena
            .effects
            .iter()
            .any(|effect| effect.kind == EffectKind::Death { side: Side::Opponent })
    );

    assert!(run_ticks(&mut arena, 0, 3000, &params).is_empty());
    assert!(!arena.opponent.is_alive());

    let respawned = run_ticks(&mut arena, 3000, 3016, &params);
    assert_eq!(respawned.len(), 1);
    assert_eq!(respawned[0].side, Side::Opponent);
    assert_eq!(respawned[0].tier, 1);

    let opponent = &arena.opponent;
    assert!(opponent.is_alive());
    assert!(opponent.is_invulnerable());
    assert_eq!(opponent.health.current, opponent.health.max);
    assert_eq!(opponent.stamina.current, 100.0);
    assert!(opponent.position.distance(arena.player.position) >= 200.0);
    assert_eq!(arena.profile, OpponentProfile::for_kills(1, &params.opponent.difficulty));
}

#[test]
fn test_player_death_counts_and_blocks_input() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(650.0, 600.0);
    arena.player.health.current = 10;

    arena
        .request_attack(Side::Opponent, AttackKind::Stab, 0, &params)
        .unwrap();

    assert_eq!(arena.score.deaths, 1);
    assert_eq!(
        arena.request_attack(Side::Player, AttackKind::Slash, 16, &params),
        Err(ActionRejection::Defeated)
    );
}

#[test]
fn test_spawn_point_selection() {
    let layout = CombatParams::default().arena;

    assert_eq!(
        choose_spawn_point(Vec2::new(600.0, 600.0), &layout),
        Vec2::new(100.0, 600.0)
    );
    assert_eq!(
        choose_spawn_point(Vec2::new(150.0, 600.0), &layout),
        Vec2::new(1100.0, 600.0)
    );

    let cramped = ArenaLayout {
        spawn_points: vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)],
        fallback_spawn: Point::new(999.0, 999.0),
        ..layout
    };
    assert_eq!(
        choose_spawn_point(Vec2::new(10.0, 0.0), &cramped),
        Vec2::new(999.0, 999.0)
    );
}

#[test]
fn test_difficulty_is_monotonic_and_clamped() {
    let curve = CombatParams::default().opponent.difficulty;

    assert_eq!(difficulty_tier(0, &curve), 1);
    assert_eq!(difficulty_tier(4, &curve), 1);
    assert_eq!(difficulty_tier(5, &curve), 2);

    let first = OpponentProfile::for_kills(0, &curve);
    assert_eq!(first.speed, 2.5);
    assert_eq!(first.attack_cooldown_ms, 1800);
    assert_eq!(first.attack_range, 90.0);

    let mut previous = first;
    for kills in 1..100 {
        let profile = OpponentProfile::for_kills(kills, &curve);
        assert!(profile.speed >= previous.speed);
        assert!(profile.attack_cooldown_ms <= previous.attack_cooldown_ms);
        assert!(profile.attack_range >= previous.attack_range);
        assert!(profile.speed <= 4.0);
        assert!(profile.attack_cooldown_ms >= 800);
        assert!(profile.attack_range <= 120.0);
        previous = profile;
    }

    assert_eq!(previous.speed, 4.0);
    assert_eq!(previous.attack_cooldown_ms, 800);
    assert_eq!(previous.attack_range, 120.0);
}

#[test]
fn test_arena_reset_restores_opening_state() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.score = Scoreboard {
        kills: 12,
        deaths: 3,
    };
    arena.profile = OpponentProfile::for_kills(12, &params.opponent.difficulty);
    arena.player.health.current = 1;

    arena.reset(&params);

    assert_eq!(arena.score, Scoreboard::default());
    assert_eq!(arena.profile, OpponentProfile::base(&params.opponent.difficulty));
    assert_eq!(arena.player.health.current, 150);
    assert_eq!(arena.player.position, Vec2::new(600.0, 600.0));
    assert_eq!(arena.opponent.position, Vec2::new(800.0, 600.0));
}

#[test]
fn test_kd_display_truncates() {
    let kd = |kills, deaths| Scoreboard { kills, deaths }.kd_display();
    assert_eq!(kd(3, 0), "3.0");
    assert_eq!(kd(0, 0), "0.0");
    assert_eq!(kd(7, 2), "3.5");
    assert_eq!(kd(2, 3), "0.6");
    assert_eq!(kd(10, 3), "3.3");
    assert_eq!(kd(0, 4), "0.0");
}

// ============================================================================
// Opponent brain
// ============================================================================

#[test]
fn test_brain_approaches_from_afar() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let turn = think(&mut arena, 16, &params, &mut rng);

    assert!(turn.approached);
    assert!(turn.swing.is_none());
    assert_eq!(arena.opponent.move_target, arena.player.position);
    assert_eq!(arena.opponent.position, Vec2::new(798.0, 600.0));
}

#[test]
fn test_brain_attacks_in_range() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(670.0, 600.0);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let turn = think(&mut arena, 16, &params, &mut rng);

    let (_, reason, outcome) = turn.swing.expect("opponent should swing");
    assert_eq!(reason, SwingReason::Pressure);
    assert!(matches!(
        outcome,
        AttackOutcome::Swung(StrikeOutcome::Hit { .. })
    ));
    assert!(arena.player.health.current < 150);
    assert_eq!(arena.opponent.position, Vec2::new(670.0, 600.0));
    assert!((arena.opponent.aim_angle - PI).abs() < 1e-5);

    let next = think(&mut arena, 32, &params, &mut rng);
    assert!(next.swing.is_none());
}

#[test]
fn test_brain_stands_down_for_invulnerable_player() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.position = Vec2::new(670.0, 600.0);
    arena.player.invulnerable_ms = 2000;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let turn = think(&mut arena, 16, &params, &mut rng);

    assert!(turn.stood_down);
    assert!(turn.swing.is_none());
    assert_eq!(arena.player.health.current, 150);
    assert_eq!(arena.opponent.move_target, Vec2::new(670.0, 600.0));
}

#[test]
fn test_brain_idle_while_down() {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    arena.opponent.fall(0);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let turn = think(&mut arena, 16, &params, &mut rng);
    assert_eq!(turn, BrainTurn::default());
    assert_eq!(arena.opponent.position, Vec2::new(800.0, 600.0));
}

#[test]
fn test_brain_never_blocks_without_stamina() {
    let params = CombatParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for now in (16..3200).step_by(16) {
        let mut arena = Arena::new(&params);
        arena.opponent.position = Vec2::new(670.0, 600.0);
        arena.opponent.last_action_at = Some(now);
        arena.opponent.stamina.current = 14.0;
        let _ = arena.request_attack(Side::Player, AttackKind::Stab, 0, &params);

        let turn = think(&mut arena, now, &params, &mut rng);
        assert!(!turn.raised_block);
    }
}

/// Opponent in reach of the player, its attack cooldown still running.
fn close_quarters(now: u64, opponent_stamina: f32, params: &CombatParams) -> Arena {
    let mut arena = Arena::new(params);
    arena.opponent.position = Vec2::new(670.0, 600.0);
    arena.opponent.last_action_at = Some(now - 1000);
    arena.opponent.stamina.current = opponent_stamina;
    arena
}

/// How many of `trials` fresh turns raised a block against a player swing.
fn count_blocks(opponent_stamina: f32, trials: u32, rng: &mut ChaCha8Rng) -> u32 {
    let params = CombatParams::default();
    let now = 1500;
    let mut blocks = 0;

    for _ in 0..trials {
        let mut arena = close_quarters(now, opponent_stamina, &params);
        arena
            .request_attack(Side::Player, AttackKind::Stab, now, &params)
            .unwrap();

        let turn = think(&mut arena, now, &params, rng);
        assert!(turn.swing.is_none());
        if turn.raised_block {
            blocks += 1;
            let angle = arena.opponent.action.block_angle().expect("block angle");
            assert!((angle - PI).abs() < 1e-5);
        }
    }
    blocks
}

#[test]
fn test_brain_blocks_player_swings() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let blocks = count_blocks(100.0, 400, &mut rng);
    assert!((200..=280).contains(&blocks), "blocked {blocks}/400");
}

#[test]
fn test_brain_blocks_less_when_tired() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let confident = count_blocks(51.0, 400, &mut rng);
    let tired = count_blocks(50.0, 400, &mut rng);
    assert!((80..=160).contains(&tired), "blocked {tired}/400");
    assert!(confident > tired);
}

#[test]
fn test_brain_counters_player_feints() {
    let params = CombatParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let now = 1500;
    let mut counters = 0;

    for _ in 0..400 {
        let mut arena = close_quarters(now, 100.0, &params);
        arena.request_feint(Side::Player, now, &params).unwrap();

        let turn = think(&mut arena, now, &params, &mut rng);
        assert!(!turn.raised_block);
        if let Some((_, reason, outcome)) = turn.swing {
            assert_eq!(reason, SwingReason::CounterFeint);
            assert!(matches!(outcome, AttackOutcome::Swung(_)));
            assert!(arena.opponent.action.is_attacking());
            counters += 1;
        }
    }
    assert!((110..=210).contains(&counters), "countered {counters}/400");
}

#[test]
fn test_brain_waits_out_full_cooldown() {
    let params = CombatParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut arena = close_quarters(1000, 100.0, &params);
    arena.opponent.last_action_at = Some(0);
    let turn = think(&mut arena, 2000, &params, &mut rng);
    assert!(turn.swing.is_none());

    let turn = think(&mut arena, 2016, &params, &mut rng);
    let (_, reason, _) = turn.swing.expect("cooldown elapsed");
    assert_eq!(reason, SwingReason::Pressure);
}

/// Scripted exchange used by the long-running property tests.
fn spar(seed: u64, ticks: u64) -> Arena {
    let params = CombatParams::default();
    let mut arena = Arena::new(&params);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut now = 0;

    for tick in 0..ticks {
        now += TICK;
        advance(&mut arena, now, TICK, &params);

        let target = arena.opponent.position;
        arena.player.aim_angle = heading(arena.player.position, target);
        match tick % 90 {
            0 => {
                let kind = AttackKind::ALL[(tick / 90 % 3) as usize];
                let _ = arena.request_attack(Side::Player, kind, now, &params);
            }
            30 => {
                let _ = arena.request_feint(Side::Player, now, &params);
            }
            50 => {
                let _ = arena.request_block(Side::Player, now, &params);
            }
            70 => {
                let _ = arena.release_block(Side::Player);
            }
            _ => {}
        }

        think(&mut arena, now, &params, &mut rng);

        for fighter in [&arena.player, &arena.opponent] {
            assert!(fighter.health.current <= fighter.health.max);
            assert_eq!(fighter.health.current == 0, !fighter.is_alive());
            assert!((0.0..=100.0).contains(&fighter.stamina.current));
            assert!((0.0..=100.0).contains(&fighter.swing_progress));
        }
    }

    arena
}

#[test]
fn test_vitals_stay_bounded_over_long_duel() {
    let arena = spar(42, 6000);
    assert!(arena.score.kills + arena.score.deaths > 0);
}

#[test]
fn test_brain_is_deterministic_for_a_seed() {
    let first = spar(1234, 2000);
    let second = spar(1234, 2000);

    assert_eq!(first.player, second.player);
    assert_eq!(first.opponent, second.opponent);
    assert_eq!(first.score, second.score);
}
