//! Movement domain: player locomotion, input freeze, and physics layers.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, InputFreeze, Player, Wall, apply_pose};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, systems::spawn_player)
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::tick_input_freeze,
                    systems::apply_player_movement,
                )
                    .chain(),
            );
    }
}
