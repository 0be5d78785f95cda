//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self { move_speed: 300.0 }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub attack_just_pressed: bool,
    pub interact_just_pressed: bool,
}
