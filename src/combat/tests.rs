//! Combat domain: tests for stats, attack styles, and the damage pipeline.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use std::time::Duration;

use super::{
    AttackStyle, AttackTimer, CombatPlugin, Enemy, Health, Invulnerable, PlayerDamagedEvent,
    PlayerStats, Projectile,
};
use crate::combat::components::EnemyMotion;
use crate::movement::{MovementPlugin, Player};

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins((MovementPlugin, CombatPlugin));
    app.update();
    app
}

fn tick(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

fn player_entity(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .unwrap()
}

fn spawn_melee_enemy(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Enemy,
            Health::new(2.0),
            AttackStyle::melee(),
            AttackTimer::default(),
            EnemyMotion::default(),
            Transform::from_xyz(position.x, position.y, 0.0),
        ))
        .id()
}

// -----------------------------------------------------------------------------
// Health / PlayerStats
// -----------------------------------------------------------------------------

#[test]
fn test_health_damage_floors_at_zero() {
    let mut health = Health::new(3.0);
    assert_eq!(health.take_damage(5.0), 3.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_defense_reduces_damage_to_floor() {
    let stats = PlayerStats {
        defense: 2.0,
        ..default()
    };
    assert_eq!(stats.adjusted_damage(5.0), 3.0);
    assert_eq!(stats.adjusted_damage(1.0), 0.0);
}

// -----------------------------------------------------------------------------
// Damage pipeline
// -----------------------------------------------------------------------------

#[test]
fn test_melee_hit_damages_player_and_opens_window() {
    let mut app = test_app();
    let player = player_entity(&mut app);
    spawn_melee_enemy(&mut app, Vec2::new(10.0, 0.0));

    tick(&mut app, 1.0 / 60.0);

    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, health.max - 1.0);
    assert!(
        app.world()
            .get::<Invulnerable>(player)
            .unwrap()
            .is_invulnerable()
    );
}

#[test]
fn test_invulnerability_window_suppresses_repeat_hits() {
    let mut app = test_app();
    let player = player_entity(&mut app);
    // Two adjacent melee enemies hitting in the same window.
    spawn_melee_enemy(&mut app, Vec2::new(10.0, 0.0));
    spawn_melee_enemy(&mut app, Vec2::new(-10.0, 0.0));

    for _ in 0..6 {
        tick(&mut app, 1.0 / 60.0);
    }

    // Only the first hit lands; the window eats the rest.
    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, health.max - 1.0);
}

#[test]
fn test_window_expiry_allows_next_hit() {
    let mut app = test_app();
    let player = player_entity(&mut app);
    spawn_melee_enemy(&mut app, Vec2::new(10.0, 0.0));

    tick(&mut app, 1.0 / 60.0);
    // Outlast both the invulnerability window and the attack cooldown.
    for _ in 0..80 {
        tick(&mut app, 1.0 / 60.0);
    }

    let health = app.world().get::<Health>(player).unwrap();
    assert!(health.current <= health.max - 2.0);
}

// -----------------------------------------------------------------------------
// Ranged style / projectiles
// -----------------------------------------------------------------------------

#[test]
fn test_ranged_enemy_spawns_projectile() {
    let mut app = test_app();
    app.world_mut().spawn((
        Enemy,
        Health::new(2.0),
        AttackStyle::ranged(),
        AttackTimer::default(),
        EnemyMotion::default(),
        Transform::from_xyz(200.0, 0.0, 0.0),
    ));

    tick(&mut app, 1.0 / 60.0);

    let mut projectiles = app.world_mut().query::<&Projectile>();
    let all: Vec<_> = projectiles.iter(app.world()).collect();
    assert_eq!(all.len(), 1);
    // Fired toward the player at the origin.
    assert!(all[0].velocity.x < 0.0);
}

#[test]
fn test_projectile_expires_after_lifetime() {
    let mut app = test_app();
    app.world_mut().spawn((
        Projectile {
            velocity: Vec2::new(0.0, 100.0),
            damage: 1.0,
            lifetime: 0.05,
        },
        Transform::from_xyz(5_000.0, 5_000.0, 2.0),
    ));

    tick(&mut app, 0.1);
    tick(&mut app, 0.1);

    let mut projectiles = app.world_mut().query::<&Projectile>();
    assert_eq!(projectiles.iter(app.world()).count(), 0);
}

// -----------------------------------------------------------------------------
// Player attack / enemy death
// -----------------------------------------------------------------------------

#[test]
fn test_player_attack_kills_enemy_in_range() {
    let mut app = test_app();
    let enemy = spawn_melee_enemy(&mut app, Vec2::new(30.0, 0.0));

    // Two swings at 1 damage each against 2 hp.
    for _ in 0..2 {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        tick(&mut app, 1.0 / 60.0);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::Space);
        tick(&mut app, 1.0 / 60.0);
    }

    assert!(app.world().get_entity(enemy).is_err());
}

#[test]
fn test_player_attack_misses_out_of_range() {
    let mut app = test_app();
    let enemy = spawn_melee_enemy(&mut app, Vec2::new(500.0, 0.0));

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    tick(&mut app, 1.0 / 60.0);

    let health = app.world().get::<Health>(enemy).unwrap();
    assert_eq!(health.current, health.max);
}

// -----------------------------------------------------------------------------
// Style dispatch
// -----------------------------------------------------------------------------

#[test]
fn test_attack_style_cooldowns() {
    assert_eq!(AttackStyle::melee().cooldown(), 1.0);
    assert_eq!(AttackStyle::ranged().cooldown(), 1.5);
}

#[test]
fn test_damage_event_channel_drains_without_player() {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<crate::movement::MovementInput>();
    app.add_plugins(CombatPlugin);
    app.update();

    app.world_mut()
        .resource_mut::<Messages<PlayerDamagedEvent>>()
        .write(PlayerDamagedEvent { amount: 1.0 });
    tick(&mut app, 1.0 / 60.0);
}
