//! Core domain: game states, run config, and bootstrap wiring.

mod resources;
mod state;
mod systems;

pub use resources::RunConfig;
pub use state::GameState;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(RunConfig::from_env())
            .add_systems(Startup, (systems::setup_camera, systems::seed_room_rng))
            .add_systems(
                Update,
                systems::finish_boot.run_if(in_state(GameState::Boot)),
            )
            .add_systems(OnEnter(GameState::Playing), systems::enter_tutorial);
    }
}
