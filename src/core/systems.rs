//! Core domain: camera bootstrap and the boot-to-playing handoff.

use bevy::prelude::*;

use crate::camera::{CameraAnchor, FollowVelocity};
use crate::core::resources::RunConfig;
use crate::core::state::GameState;
use crate::rooms::{
    RoomCatalog, RoomRng, RoomTarget, RoomTransitionController, TransitionRequest,
};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        CameraAnchor,
        FollowVelocity::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}

pub(crate) fn seed_room_rng(config: Res<RunConfig>, mut rng: ResMut<RoomRng>) {
    *rng = RoomRng::from_seed(config.seed);
    info!("[CORE] Run seed {}", config.seed);
}

/// Leave `Boot` after the first frame, once startup resources are in place.
pub(crate) fn finish_boot(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::Playing);
}

/// Entering play drops the player into the tutorial; the tutorial never
/// counts toward the visit total.
pub(crate) fn enter_tutorial(
    catalog: Res<RoomCatalog>,
    mut controller: ResMut<RoomTransitionController>,
) {
    let request = TransitionRequest {
        target: RoomTarget::Tutorial,
        increment_visits: false,
    };
    match controller.try_begin(request, catalog.rooms.len()) {
        Ok(()) => info!("[CORE] Entering tutorial"),
        Err(err) => warn!("[CORE] Could not start tutorial: {err}"),
    }
}
