//! Movement domain: input sampling, freeze countdown, and locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Health, Invulnerable, PlayerStats};
use crate::movement::components::{GameLayer, InputFreeze, Player};
use crate::movement::resources::{MovementInput, MovementTuning};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 32.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    let stats = PlayerStats::default();
    commands.spawn((
        Player,
        Health::new(stats.max_hp),
        Invulnerable::default(),
        stats,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Dynamic,
        Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Wall, GameLayer::Enemy, GameLayer::Projectile],
        ),
        LinearVelocity::default(),
        LockedAxes::ROTATION_LOCKED,
        GravityScale(0.0),
    ));
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.attack_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.interact_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
}

pub(crate) fn tick_input_freeze(
    mut commands: Commands,
    time: Res<Time>,
    mut frozen: Query<(Entity, &mut InputFreeze)>,
) {
    for (entity, mut freeze) in &mut frozen {
        freeze.remaining -= time.delta_secs();
        if freeze.remaining <= 0.0 {
            commands.entity(entity).remove::<InputFreeze>();
            info!("[MOVEMENT] Input freeze expired");
        }
    }
}

/// Drive the player's velocity from the sampled input axes.
/// A frozen player is pinned: velocity is forced to zero no matter the input.
pub(crate) fn apply_player_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut player: Query<(&mut LinearVelocity, Option<&InputFreeze>), With<Player>>,
) {
    for (mut velocity, freeze) in &mut player {
        if freeze.is_some() {
            velocity.0 = Vec2::ZERO;
            continue;
        }
        velocity.0 = input.axis.normalize_or_zero() * tuning.move_speed;
    }
}
