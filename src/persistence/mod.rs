//! Persistence domain: schema-opaque key/value progress saves.

mod store;
mod systems;

#[cfg(test)]
mod tests;

pub use store::{SAVE_PATH, SaveError, SaveStore, keys};

use bevy::prelude::*;

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::open_save_store).add_systems(
            Update,
            (systems::apply_saved_stats, systems::save_on_room_entered),
        );
    }
}
