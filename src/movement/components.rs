//! Movement domain: components, physics layers, and pose helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floor surfaces
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Projectiles fired by enemies
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for floor sprites
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders; also drives the camera clamp rect.
#[derive(Component, Debug)]
pub struct Wall;

/// Rejects input-driven movement until `remaining` seconds elapse.
/// Inserted by the transition driver right after a spawn teleport so
/// residual input cannot drift the player off the marker.
#[derive(Component, Debug)]
pub struct InputFreeze {
    pub remaining: f32,
}

impl InputFreeze {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
        }
    }
}

/// Teleport an actor and clear any residual velocity in one step.
pub fn apply_pose(
    transform: &mut Transform,
    velocity: &mut LinearVelocity,
    position: Vec2,
    rotation: Quat,
) {
    transform.translation.x = position.x;
    transform.translation.y = position.y;
    transform.rotation = rotation;
    velocity.0 = Vec2::ZERO;
}
