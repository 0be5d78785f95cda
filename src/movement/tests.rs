//! Movement domain: tests for input freeze and locomotion.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;
use std::time::Duration;

use super::{InputFreeze, MovementPlugin, Player, apply_pose};

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(MovementPlugin);
    // Run Startup so the player exists.
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

fn player_velocity(app: &mut App, entity: Entity) -> Vec2 {
    app.world().get::<LinearVelocity>(entity).unwrap().0
}

#[test]
fn test_input_drives_velocity() {
    let mut app = test_app();
    let player = player_entity(&mut app);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyD);
    tick(&mut app, 1.0 / 60.0);

    let velocity = player_velocity(&mut app, player);
    assert!(velocity.x > 0.0);
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn test_freeze_rejects_input_driven_movement() {
    let mut app = test_app();
    let player = player_entity(&mut app);

    app.world_mut()
        .entity_mut(player)
        .insert(InputFreeze::new(0.3));
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyD);

    tick(&mut app, 1.0 / 60.0);
    assert_eq!(player_velocity(&mut app, player), Vec2::ZERO);
}

#[test]
fn test_freeze_expires_and_movement_resumes() {
    let mut app = test_app();
    let player = player_entity(&mut app);

    app.world_mut()
        .entity_mut(player)
        .insert(InputFreeze::new(0.1));
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyD);

    // Burn through the freeze window.
    for _ in 0..12 {
        tick(&mut app, 1.0 / 60.0);
    }

    assert!(app.world().get::<InputFreeze>(player).is_none());
    assert!(player_velocity(&mut app, player).x > 0.0);
}

#[test]
fn test_diagonal_input_is_normalized() {
    let mut app = test_app();
    let player = player_entity(&mut app);

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::KeyW);
    }
    tick(&mut app, 1.0 / 60.0);

    let speed = player_velocity(&mut app, player).length();
    let tuning = app.world().resource::<super::MovementTuning>();
    assert!((speed - tuning.move_speed).abs() < 0.5);
}

#[test]
fn test_apply_pose_clears_velocity() {
    let mut transform = Transform::from_xyz(10.0, 20.0, 1.0);
    let mut velocity = LinearVelocity(Vec2::new(50.0, -30.0));

    apply_pose(
        &mut transform,
        &mut velocity,
        Vec2::new(-5.0, 7.0),
        Quat::IDENTITY,
    );

    assert_eq!(transform.translation.x, -5.0);
    assert_eq!(transform.translation.y, 7.0);
    // Z layer is preserved by the teleport.
    assert_eq!(transform.translation.z, 1.0);
    assert_eq!(velocity.0, Vec2::ZERO);
}
