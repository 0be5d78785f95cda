//! Rooms domain: room content factory.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackStyle, AttackTimer, Enemy, EnemyMotion, Health};
use crate::movement::{GameLayer, Ground, Wall};
use crate::rooms::catalog::{AttackKind, EnemyFormation, FormationAxis, RoomDef};
use crate::rooms::components::{DoorGate, RoomContent, SpawnMarker};

pub(crate) const WALL_THICKNESS: f32 = 32.0;
const DOOR_SIZE: Vec2 = Vec2::new(48.0, 48.0);
const ENEMY_SIZE: Vec2 = Vec2::splat(28.0);
const ENEMY_HP: f32 = 2.0;

/// Instantiate the full content of one room: floor, four walls, the spawn
/// marker, doors (locked until the count is known), and enemy formations.
/// Everything is tagged `RoomContent` so the next swap despawns it wholesale.
pub(crate) fn spawn_room_content(commands: &mut Commands, def: &RoomDef) {
    commands.spawn((
        RoomContent,
        Ground,
        Sprite {
            color: Color::srgb(0.16, 0.14, 0.13),
            custom_size: Some(Vec2::new(def.width, def.height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));

    for (center, size) in wall_layout(def.width, def.height) {
        commands.spawn((
            RoomContent,
            Wall,
            Sprite {
                color: Color::srgb(0.35, 0.3, 0.28),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(
                GameLayer::Wall,
                [GameLayer::Player, GameLayer::Enemy, GameLayer::Projectile],
            ),
        ));
    }

    if let Some((x, y)) = def.spawn_point {
        commands.spawn((RoomContent, SpawnMarker, Transform::from_xyz(x, y, 0.0)));
    }

    for door in &def.doors {
        commands.spawn((
            RoomContent,
            DoorGate { locked: true },
            Sprite {
                color: Color::srgb(0.35, 0.2, 0.15),
                custom_size: Some(DOOR_SIZE),
                ..default()
            },
            Transform::from_xyz(door.position.0, door.position.1, 0.5),
        ));
    }

    for formation in &def.enemies {
        spawn_formation(commands, formation);
    }

    info!(
        "[ROOMS] Spawned content for '{}' ({} doors, {} formations)",
        def.name,
        def.doors.len(),
        def.enemies.len()
    );
}

/// Centers and sizes of the four boundary walls around a floor of the
/// given inner size. Horizontal walls overhang the corners.
pub(crate) fn wall_layout(width: f32, height: f32) -> [(Vec2, Vec2); 4] {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let t = WALL_THICKNESS;
    let horizontal = Vec2::new(width + 2.0 * t, t);
    let vertical = Vec2::new(t, height);
    [
        (Vec2::new(0.0, half_h + t / 2.0), horizontal),
        (Vec2::new(0.0, -half_h - t / 2.0), horizontal),
        (Vec2::new(-half_w - t / 2.0, 0.0), vertical),
        (Vec2::new(half_w + t / 2.0, 0.0), vertical),
    ]
}

/// Offsets along the formation axis: first at the origin, the rest fanning
/// out to alternating sides.
pub(crate) fn formation_offsets(count: u32, spacing: f32) -> Vec<f32> {
    (0..count)
        .map(|i| {
            if i == 0 {
                0.0
            } else {
                let step = i.div_ceil(2) as f32 * spacing;
                if i % 2 == 1 { step } else { -step }
            }
        })
        .collect()
}

fn spawn_formation(commands: &mut Commands, formation: &EnemyFormation) {
    let origin = Vec2::new(formation.origin.0, formation.origin.1);
    let dir = match formation.axis {
        FormationAxis::Horizontal => Vec2::X,
        FormationAxis::Vertical => Vec2::Y,
    };
    let style = match formation.attack {
        AttackKind::Melee => AttackStyle::melee(),
        AttackKind::Ranged => AttackStyle::ranged(),
    };

    for offset in formation_offsets(formation.count, formation.spacing) {
        let position = origin + dir * offset;
        commands.spawn((
            RoomContent,
            Enemy,
            Health::new(ENEMY_HP),
            style,
            AttackTimer::default(),
            EnemyMotion::default(),
            Sprite {
                color: match formation.attack {
                    AttackKind::Melee => Color::srgb(0.75, 0.25, 0.2),
                    AttackKind::Ranged => Color::srgb(0.55, 0.25, 0.6),
                },
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            RigidBody::Dynamic,
            Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Wall, GameLayer::Player]),
            LinearVelocity::default(),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(0.0),
        ));
    }
}
