//! Rooms domain: room catalog, content factory, doors, and the
//! fade-out/swap/fade-in transition controller.

mod catalog;
mod components;
mod events;
mod selection;
mod spawn;
mod systems;
mod transition;


pub use catalog::{
    AttackKind, CATALOG_PATH, CatalogLoadError, DoorDef, EnemyFormation, FormationAxis,
    RoomCatalog, RoomDef,
};
pub use components::{DoorGate, RoomContent, SpawnMarker};
pub use events::{RoomClearedEvent, RoomEnteredEvent};
pub use selection::{RoomRng, SelectionPolicy, select_next};
pub use transition::{
    RoomIdentity, RoomTarget, RoomTransitionController, TransitionError, TransitionPhase,
    TransitionRequest, TransitionTuning,
};

use bevy::prelude::*;

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomTransitionController>()
            .init_resource::<TransitionTuning>()
            .init_resource::<SelectionPolicy>()
            .init_resource::<RoomRng>()
            .add_message::<RoomEnteredEvent>()
            .add_message::<RoomClearedEvent>()
            .add_systems(Startup, systems::load_room_catalog)
            .add_systems(
                Update,
                (
                    systems::activate_doors,
                    systems::drive_transition,
                    systems::track_enemy_deaths,
                    systems::track_enemy_spawns,
                    systems::sync_door_visuals,
                )
                    .chain(),
            );
    }
}
