//! Camera domain: wall-derived clamp bounds and smoothed player follow.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{
    CameraAnchor, CameraClampRect, CameraTuning, CameraViewport, ClampAxis, FollowVelocity,
};

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request to rescan the current room's walls and rebuild the clamp rect.
/// Written by the transition driver once new room content is in place.
#[derive(Debug, Default)]
pub struct RefreshCameraBounds;

impl Message for RefreshCameraBounds {}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraClampRect>()
            .init_resource::<CameraViewport>()
            .init_resource::<CameraTuning>()
            .add_message::<RefreshCameraBounds>()
            .add_systems(
                Update,
                (systems::refresh_camera_bounds, systems::follow_player).chain(),
            );
    }
}
