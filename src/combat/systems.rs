//! Combat domain: enemy movement, attack dispatch, projectiles, damage.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    AttackStyle, AttackTimer, CombatTuning, Enemy, EnemyMotion, Health, Invulnerable, PlayerStats,
    Projectile,
};
use crate::combat::events::{PlayerDamagedEvent, PlayerDiedEvent};
use crate::movement::{GameLayer, MovementInput, Player};

pub(crate) fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    for mut invulnerable in &mut query {
        if invulnerable.timer > 0.0 {
            invulnerable.timer -= time.delta_secs();
        }
    }
}

/// Melee enemies chase the player; ranged enemies hold their preferred
/// distance, backing off when crowded and closing when out of reach.
pub(crate) fn apply_enemy_movement(
    tuning: Res<CombatTuning>,
    player: Query<&Transform, With<Player>>,
    mut enemies: Query<
        (&Transform, &mut LinearVelocity, &AttackStyle, &EnemyMotion),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Some(player_transform) = player.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut velocity, style, motion) in &mut enemies {
        let enemy_pos = transform.translation.truncate();
        let to_player = player_pos - enemy_pos;
        let distance = to_player.length();
        let dir = to_player.normalize_or_zero();

        match style {
            AttackStyle::Melee { .. } => {
                velocity.0 = dir * motion.move_speed;
            }
            AttackStyle::Ranged {
                preferred_distance, ..
            } => {
                if distance < *preferred_distance {
                    velocity.0 = -dir * motion.move_speed;
                } else if distance > *preferred_distance + tuning.ranged_slack {
                    velocity.0 = dir * motion.move_speed;
                } else {
                    velocity.0 = Vec2::ZERO;
                }
            }
        }
    }
}

/// Single dispatch point for enemy attacks across styles.
pub(crate) fn execute_enemy_attacks(
    mut commands: Commands,
    time: Res<Time>,
    player: Query<&Transform, With<Player>>,
    mut enemies: Query<(&Transform, &AttackStyle, &mut AttackTimer), With<Enemy>>,
    mut damage_events: MessageWriter<PlayerDamagedEvent>,
) {
    let Some(player_transform) = player.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, style, mut timer) in &mut enemies {
        timer.remaining -= time.delta_secs();
        if !timer.ready() {
            continue;
        }

        let enemy_pos = transform.translation.truncate();
        let distance = enemy_pos.distance(player_pos);

        match style {
            AttackStyle::Melee { range, damage, .. } => {
                if distance <= *range {
                    damage_events.write(PlayerDamagedEvent { amount: *damage });
                    timer.remaining = style.cooldown();
                }
            }
            AttackStyle::Ranged {
                projectile_speed,
                damage,
                ..
            } => {
                let dir = (player_pos - enemy_pos).normalize_or_zero();
                if dir == Vec2::ZERO {
                    continue;
                }
                commands.spawn((
                    Projectile {
                        velocity: dir * *projectile_speed,
                        damage: *damage,
                        lifetime: 3.0,
                    },
                    Sprite {
                        color: Color::srgb(1.0, 0.6, 0.2),
                        custom_size: Some(Vec2::splat(10.0)),
                        ..default()
                    },
                    Transform::from_xyz(enemy_pos.x, enemy_pos.y, 2.0),
                    CollisionLayers::new(GameLayer::Projectile, [GameLayer::Player]),
                ));
                timer.remaining = style.cooldown();
            }
        }
    }
}

pub(crate) fn update_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    player: Query<&Transform, With<Player>>,
    mut projectiles: Query<(Entity, &mut Transform, &mut Projectile), Without<Player>>,
    mut damage_events: MessageWriter<PlayerDamagedEvent>,
) {
    let dt = time.delta_secs();
    let player_pos = player
        .iter()
        .next()
        .map(|transform| transform.translation.truncate());

    for (entity, mut transform, mut projectile) in &mut projectiles {
        transform.translation.x += projectile.velocity.x * dt;
        transform.translation.y += projectile.velocity.y * dt;
        projectile.lifetime -= dt;

        if let Some(player_pos) = player_pos {
            let hit = transform.translation.truncate().distance(player_pos)
                <= tuning.projectile_hit_radius;
            if hit {
                damage_events.write(PlayerDamagedEvent {
                    amount: projectile.damage,
                });
                commands.entity(entity).despawn();
                continue;
            }
        }

        if projectile.lifetime <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Swing at every enemy within the player's attack range.
pub(crate) fn player_attack(
    input: Res<MovementInput>,
    player: Query<(&Transform, &PlayerStats), With<Player>>,
    mut enemies: Query<(&Transform, &mut Health), (With<Enemy>, Without<Player>)>,
) {
    if !input.attack_just_pressed {
        return;
    }
    let Some((player_transform, stats)) = player.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut health) in &mut enemies {
        if transform.translation.truncate().distance(player_pos) <= stats.attack_range {
            health.take_damage(stats.attack_damage);
        }
    }
}

/// Fold incoming hits into the player's health. An active invulnerability
/// window suppresses every hit outright, then a fresh window opens on the
/// first hit that lands.
pub(crate) fn apply_player_damage(
    mut damage_events: MessageReader<PlayerDamagedEvent>,
    tuning: Res<CombatTuning>,
    mut player: Query<(&mut Health, &PlayerStats, &mut Invulnerable), With<Player>>,
    mut death_events: MessageWriter<PlayerDiedEvent>,
) {
    let Some((mut health, stats, mut invulnerable)) = player.iter_mut().next() else {
        for _ in damage_events.read() {}
        return;
    };

    for event in damage_events.read() {
        if invulnerable.is_invulnerable() {
            continue;
        }

        let taken = health.take_damage(stats.adjusted_damage(event.amount));
        info!(
            "[COMBAT] Player took {:.1} damage ({:.1}/{:.1} hp)",
            taken, health.current, health.max
        );
        invulnerable.timer = tuning.invulnerability_window;

        if health.is_dead() {
            info!("[COMBAT] Player died");
            death_events.write(PlayerDiedEvent);
            health.current = health.max;
            break;
        }
    }
}

pub(crate) fn despawn_dead_enemies(
    mut commands: Commands,
    enemies: Query<(Entity, &Health), With<Enemy>>,
) {
    for (entity, health) in &enemies {
        if health.is_dead() {
            commands.entity(entity).despawn();
        }
    }
}
