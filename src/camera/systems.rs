//! Camera domain: bounds refresh from wall geometry and per-tick follow.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::camera::resources::smooth_damp;
use crate::camera::{
    CameraAnchor, CameraClampRect, CameraTuning, CameraViewport, ClampAxis, FollowVelocity,
    RefreshCameraBounds,
};
use crate::movement::{Player, Wall};

/// Rebuild the clamp rect from wall sprites whenever a refresh is requested,
/// then snap the anchor onto the player so the new room does not start mid-pan.
pub(crate) fn refresh_camera_bounds(
    mut requests: MessageReader<RefreshCameraBounds>,
    walls: Query<(&Transform, &Sprite), (With<Wall>, Without<CameraAnchor>)>,
    player: Query<&Transform, (With<Player>, Without<CameraAnchor>)>,
    viewport: Res<CameraViewport>,
    mut bounds: ResMut<CameraClampRect>,
    mut camera: Query<(&mut Transform, &mut FollowVelocity), With<CameraAnchor>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    *bounds = compute_bounds(walls.iter().map(|(transform, sprite)| {
        (
            transform.translation.truncate(),
            sprite.custom_size.unwrap_or_default() * 0.5,
        )
    }));
    info!(
        "[CAMERA] Bounds refreshed: left {:.1}, right {:.1}, bottom {:.1}, top {:.1} ({:?} horizontal)",
        bounds.left, bounds.right, bounds.bottom, bounds.top, bounds.horizontal
    );

    let Some(player_transform) = player.iter().next() else {
        return;
    };
    let anchor = bounds.clamp_focus(player_transform.translation.truncate(), viewport.half_extents);
    for (mut transform, mut velocity) in &mut camera {
        transform.translation.x = anchor.x;
        transform.translation.y = anchor.y;
        velocity.0 = Vec2::ZERO;
    }
}

/// Compute the clamp rect from wall AABBs (center, half extents).
/// No walls yields an unbounded rect; the axis with the larger spread
/// becomes the horizontal clamp axis.
pub(crate) fn compute_bounds(walls: impl Iterator<Item = (Vec2, Vec2)>) -> CameraClampRect {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    let mut any = false;
    for (center, half) in walls {
        any = true;
        min = min.min(center - half);
        max = max.max(center + half);
    }
    if !any {
        info!("[CAMERA] No walls found, leaving bounds unbounded");
        return CameraClampRect::unbounded();
    }

    let span = max - min;
    let horizontal = if span.y > span.x {
        ClampAxis::Y
    } else {
        ClampAxis::X
    };
    match horizontal {
        ClampAxis::X => CameraClampRect {
            left: min.x,
            right: max.x,
            bottom: min.y,
            top: max.y,
            horizontal,
        },
        ClampAxis::Y => CameraClampRect {
            left: min.y,
            right: max.y,
            bottom: min.x,
            top: max.x,
            horizontal,
        },
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    viewport: Res<CameraViewport>,
    bounds: Res<CameraClampRect>,
    player: Query<&Transform, (With<Player>, Without<CameraAnchor>)>,
    mut camera: Query<(&mut Transform, &mut FollowVelocity), With<CameraAnchor>>,
) {
    let Some(player_transform) = player.iter().next() else {
        return;
    };
    let desired = bounds.clamp_focus(player_transform.translation.truncate(), viewport.half_extents);

    for (mut transform, mut velocity) in &mut camera {
        let current = transform.translation.truncate();
        let next = smooth_damp(
            current,
            desired,
            &mut velocity.0,
            tuning.smooth_time,
            time.delta_secs(),
        );
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
